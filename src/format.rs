//! IRC color and style markup.
//!
//! Outgoing text can be written with readable `{alias}` tokens such as
//! `{red}{bold}Hello{c}` and converted into the control bytes IRC clients
//! render. The same table drives stripping of either representation.
//!
//! # IRC Format Codes
//! - 0x01: CTCP delimiter
//! - 0x02 (^B): Bold
//! - 0x03 (^C): Color (followed by a two-digit color index)
//! - 0x0F (^O): Reset all formatting
//! - 0x16 (^V): Reverse/Inverse
//! - 0x1D (^]): Italic
//! - 0x1F (^_): Underline
//!
//! Color indices 00-15 follow the mIRC palette, see
//! <https://modern.ircdocs.horse/formatting>.

use std::borrow::Cow;

/// Character that opens a markup token.
pub const TOKEN_OPEN: char = '{';

/// Character that closes a markup token.
pub const TOKEN_CLOSE: char = '}';

/// One row of the markup table: every alias expands to `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCode {
    /// Names accepted inside `{...}`.
    pub aliases: &'static [&'static str],
    /// Raw control bytes sent on the wire.
    pub code: &'static str,
}

impl FormatCode {
    const fn new(aliases: &'static [&'static str], code: &'static str) -> Self {
        Self { aliases, code }
    }

    /// Returns true if `alias` is one of this entry's names.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| *a == alias)
    }
}

/// The markup table, in substitution order.
///
/// Color entries come before the bare `\x03` "clear" entry so that
/// [`strip_control_bytes`] removes a color sequence as a whole.
pub const FORMAT_CODES: &[FormatCode] = &[
    FormatCode::new(&["white"], "\x0300"),
    FormatCode::new(&["black"], "\x0301"),
    FormatCode::new(&["blue", "navy"], "\x0302"),
    FormatCode::new(&["green"], "\x0303"),
    FormatCode::new(&["red"], "\x0304"),
    FormatCode::new(&["brown", "maroon"], "\x0305"),
    FormatCode::new(&["purple"], "\x0306"),
    FormatCode::new(&["orange", "olive", "gold"], "\x0307"),
    FormatCode::new(&["yellow"], "\x0308"),
    FormatCode::new(&["lightgreen", "lime"], "\x0309"),
    FormatCode::new(&["teal"], "\x0310"),
    FormatCode::new(&["cyan"], "\x0311"),
    FormatCode::new(&["lightblue", "royal"], "\x0312"),
    FormatCode::new(&["lightpurple", "pink", "fuchsia"], "\x0313"),
    FormatCode::new(&["grey", "gray"], "\x0314"),
    FormatCode::new(&["lightgrey", "silver"], "\x0315"),
    FormatCode::new(&["bold", "b"], "\x02"),
    FormatCode::new(&["italic", "i"], "\x1d"),
    FormatCode::new(&["reset", "r"], "\x0f"),
    FormatCode::new(&["clear", "c"], "\x03"),
    FormatCode::new(&["reverse"], "\x16"),
    FormatCode::new(&["underline", "ul"], "\x1f"),
    FormatCode::new(&["ctcp"], "\x01"),
];

/// Look up the control bytes for a markup alias.
///
/// # Examples
///
/// ```
/// use slirc_util::format::lookup;
///
/// assert_eq!(lookup("gray"), Some("\x0314"));
/// assert_eq!(lookup("ul"), Some("\x1f"));
/// assert_eq!(lookup("chartreuse"), None);
/// ```
pub fn lookup(alias: &str) -> Option<&'static str> {
    FORMAT_CODES
        .iter()
        .find(|entry| entry.matches_alias(alias))
        .map(|entry| entry.code)
}

/// Replace every known `{alias}` token with its control bytes.
///
/// Unknown tokens are left as they are. Replacement is literal and
/// non-recursive: bytes produced by one entry are never re-scanned as
/// markup by the same entry.
///
/// # Examples
///
/// ```
/// use slirc_util::format::apply_format;
///
/// assert_eq!(apply_format("{red}{bold}Hello{c}"), "\x0304\x02Hello\x03");
/// assert_eq!(apply_format("{nope}"), "{nope}");
/// ```
pub fn apply_format(text: &str) -> Cow<'_, str> {
    replace_tokens(text, |entry| entry.code)
}

/// Remove every known `{alias}` token.
///
/// # Examples
///
/// ```
/// use slirc_util::format::strip_format_tokens;
///
/// assert_eq!(strip_format_tokens("{red}{bold}Hello{c}"), "Hello");
/// assert_eq!(strip_format_tokens("{nope} kept"), "{nope} kept");
/// ```
pub fn strip_format_tokens(text: &str) -> Cow<'_, str> {
    replace_tokens(text, |_| "")
}

/// Remove the raw control bytes of every table entry.
///
/// Only sequences from [`FORMAT_CODES`] are removed. A color introducer
/// followed by a single digit (`\x034`) loses the `\x03` but keeps the digit.
///
/// # Examples
///
/// ```
/// use slirc_util::format::strip_control_bytes;
///
/// assert_eq!(strip_control_bytes("\x0304\x02Hello\x03"), "Hello");
/// assert_eq!(strip_control_bytes("plain"), "plain");
/// ```
pub fn strip_control_bytes(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for entry in FORMAT_CODES {
        if out.contains(entry.code) {
            out = Cow::Owned(out.replace(entry.code, ""));
        }
    }
    out
}

/// Returns true if `text` contains any control sequence from the table.
pub fn has_control_bytes(text: &str) -> bool {
    FORMAT_CODES.iter().any(|entry| text.contains(entry.code))
}

/// One pass per table entry, stopping once no `{` is left to match.
fn replace_tokens<'a>(
    text: &'a str,
    replacement: impl Fn(&FormatCode) -> &'static str,
) -> Cow<'a, str> {
    let mut out = Cow::Borrowed(text);
    if !text.contains(TOKEN_OPEN) {
        return out;
    }

    for entry in FORMAT_CODES {
        for alias in entry.aliases {
            let token = format!("{TOKEN_OPEN}{alias}{TOKEN_CLOSE}");
            if out.contains(token.as_str()) {
                out = Cow::Owned(out.replace(token.as_str(), replacement(entry)));
            }
        }

        if !out.contains(TOKEN_OPEN) {
            break;
        }
    }

    out
}

/// Extension trait for IRC markup on strings.
pub trait FormattedStringExt<'a> {
    /// Check if the string contains any table control sequence.
    fn has_control_bytes(&self) -> bool;

    /// Expand `{alias}` markup into control bytes.
    fn to_irc_format(self) -> Cow<'a, str>;

    /// Remove `{alias}` markup.
    fn strip_format_tokens(self) -> Cow<'a, str>;

    /// Remove raw control sequences.
    ///
    /// Returns `Cow::Borrowed` if nothing was removed.
    fn strip_control_bytes(self) -> Cow<'a, str>;
}

impl<'a> FormattedStringExt<'a> for &'a str {
    fn has_control_bytes(&self) -> bool {
        has_control_bytes(self)
    }

    fn to_irc_format(self) -> Cow<'a, str> {
        apply_format(self)
    }

    fn strip_format_tokens(self) -> Cow<'a, str> {
        strip_format_tokens(self)
    }

    fn strip_control_bytes(self) -> Cow<'a, str> {
        strip_control_bytes(self)
    }
}

impl FormattedStringExt<'static> for String {
    fn has_control_bytes(&self) -> bool {
        has_control_bytes(self)
    }

    fn to_irc_format(self) -> Cow<'static, str> {
        Cow::Owned(reuse(self, apply_format))
    }

    fn strip_format_tokens(self) -> Cow<'static, str> {
        Cow::Owned(reuse(self, strip_format_tokens))
    }

    fn strip_control_bytes(self) -> Cow<'static, str> {
        Cow::Owned(reuse(self, strip_control_bytes))
    }
}

/// Apply `f`, handing back the original allocation when nothing changed.
fn reuse(text: String, f: fn(&str) -> Cow<'_, str>) -> String {
    let changed = match f(text.as_str()) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    changed.unwrap_or(text)
}
