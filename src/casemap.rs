//! IRC case-mapping functions.
//!
//! IRC uses a special case-insensitive comparison where some characters
//! are considered equivalent (e.g., `[` and `{`). This implements the
//! `rfc1459` case mapping: every byte from `A` (0x41) through `^` (0x5E)
//! is shifted up by 32, so `[]\^` fold onto `{}|~`.

/// First byte folded by the RFC 1459 mapping (`A`).
pub const FOLD_START: u8 = 0x41;

/// Last byte folded by the RFC 1459 mapping (`^`).
pub const FOLD_END: u8 = 0x5E;

/// Distance between a folded byte and its lowercase counterpart.
const FOLD_OFFSET: u8 = 0x20;

/// Fold a single byte using RFC 1459 case mapping.
#[inline]
pub const fn fold_byte(b: u8) -> u8 {
    match b {
        FOLD_START..=FOLD_END => b + FOLD_OFFSET,
        _ => b,
    }
}

/// Fold a single character using RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `^` → `~`
///
/// Non-ASCII characters are returned unchanged.
#[inline]
pub const fn fold_char(c: char) -> char {
    if c.is_ascii() {
        fold_byte(c as u8) as char
    } else {
        c
    }
}

/// Convert a string to its RFC 1459 canonical form.
///
/// The output has the same byte length as the input.
///
/// # Examples
///
/// ```
/// use slirc_util::casemap::fold_case;
///
/// assert_eq!(fold_case("[TEST]"), "{test}");
/// assert_eq!(fold_case("Nick\\Away^"), "nick|away~");
/// assert_eq!(fold_case("already_lower"), "already_lower");
/// ```
pub fn fold_case(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
///
/// Equivalent to `fold_case(a) == fold_case(b)` without allocating.
///
/// # Examples
///
/// ```
/// use slirc_util::casemap::irc_eq;
///
/// assert!(irc_eq("#Channel[1]", "#CHANNEL{1}"));
/// assert!(!irc_eq("nick", "nicks"));
/// ```
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .all(|(ca, cb)| fold_byte(ca) == fold_byte(cb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_char() {
        // ASCII uppercase
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('Z'), 'z');
        assert_eq!(fold_char('M'), 'm');

        // Special IRC chars
        assert_eq!(fold_char('['), '{');
        assert_eq!(fold_char(']'), '}');
        assert_eq!(fold_char('\\'), '|');
        assert_eq!(fold_char('^'), '~');

        // Outside the folded range
        assert_eq!(fold_char('@'), '@');
        assert_eq!(fold_char('_'), '_');
        assert_eq!(fold_char('~'), '~');
        assert_eq!(fold_char('a'), 'a');
        assert_eq!(fold_char('0'), '0');
        assert_eq!(fold_char('é'), 'é');
    }

    #[test]
    fn test_fold_byte_boundaries() {
        assert_eq!(fold_byte(FOLD_START - 1), b'@');
        assert_eq!(fold_byte(FOLD_START), b'a');
        assert_eq!(fold_byte(FOLD_END), b'~');
        assert_eq!(fold_byte(FOLD_END + 1), b'_');
        assert_eq!(fold_byte(0xC3), 0xC3);
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("[TEST]"), "{test}");
        assert_eq!(fold_case("HELLO"), "hello");
        assert_eq!(fold_case("#Channel[1]"), "#channel{1}");
        assert_eq!(fold_case("Nick\\Away"), "nick|away");
        assert_eq!(fold_case(""), "");
    }

    #[test]
    fn test_fold_case_preserves_length() {
        for s in ["ÀB[c]", "日本Z", "\x02BOLD\x02"] {
            assert_eq!(fold_case(s).len(), s.len());
        }
        assert_eq!(fold_case("ÀB"), "Àb");
    }

    #[test]
    fn test_irc_eq() {
        assert!(irc_eq("hello", "HELLO"));
        assert!(irc_eq("#channel[1]", "#CHANNEL{1}"));
        assert!(irc_eq("nick\\test", "NICK|TEST"));
        assert!(irc_eq("a^", "A~"));

        assert!(!irc_eq("hello", "world"));
        assert!(!irc_eq("short", "longer"));
        assert!(!irc_eq("_", "\x7f"));
    }
}
