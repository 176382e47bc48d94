//! IRC identifier validation.
//!
//! Byte-range checks for channel names, nicknames and usernames (idents),
//! following the RFC 2812 grammar with the relaxations real networks use.
//!
//! ```text
//! channel    =  ( "#" / "+" / "*" / "&" / ( "!" channelid ) ) chanstring
//! chanstring =  any octet except NUL, BELL, CR, LF, " ", "," and ":"
//! channelid  =  5( %x41-5A / digit )
//!
//! nickname   =  ( %x41-7D ) *( %x41-7D / digit / "-" )
//! user       =  [ "~" ] ( letter / digit ) *( %x41-7D / digit / "-" / "." )
//! ```
//!
//! Nicknames and usernames are checked after RFC 1459 case folding (see
//! [`casemap`](crate::casemap)), so `[`, `\`, `]` and `^` are checked as
//! `{`, `|`, `}` and `~`. A nickname containing `^` is therefore rejected,
//! and a username starting with `^` is treated as carrying the `~` marker.
//!
//! Lengths are byte lengths. Nickname and username length limits are
//! network-specific (ISUPPORT `NICKLEN`/`USERLEN`) and not checked here.

use crate::casemap::fold_case;
use crate::error::{Result, ValidationError};

/// Shortest legal channel name (prefix plus one byte).
pub const CHANNEL_MIN_LEN: usize = 2;

/// Longest legal channel name, per RFC 2812.
pub const CHANNEL_MAX_LEN: usize = 50;

/// Length of the ID following a `!` channel prefix.
pub const CHANNEL_ID_LEN: usize = 5;

/// Shortest `!` channel: prefix, ID, and at least one name byte.
pub const CHANNEL_ID_MIN_LEN: usize = 1 + CHANNEL_ID_LEN + 1;

/// Bytes that may start a channel name. `*` is not in the RFC but is
/// used by bouncers such as ZNC.
pub const CHANNEL_PREFIXES: &[u8] = b"!#&*+";

/// Bytes that may not appear after the channel prefix.
const INVALID_CHAN_BYTES: &[u8] = &[
    0x00, // NUL
    0x07, // BELL
    0x0D, // CR
    0x0A, // LF
    0x20, // space
    0x2C, // ,
    0x3A, // :
];

const CHANNEL_ID_PREFIX: u8 = 0x21; // !

const ASCII_UPPER_START: u8 = 0x41; // A
const ASCII_UPPER_END: u8 = 0x5A; // Z
const ASCII_LOWER_START: u8 = 0x61; // a
const ASCII_LOWER_END: u8 = 0x7A; // z
const DIGIT_START: u8 = 0x30; // 0
const DIGIT_END: u8 = 0x39; // 9

// Letters plus [\]^_`{|}
const NICK_RANGE_START: u8 = 0x41; // A
const NICK_RANGE_END: u8 = 0x7D; // }

const HYPHEN: u8 = 0x2D;
const PERIOD: u8 = 0x2E;

/// Prepended to a username when the ident lookup got no response.
const NO_IDENT_MARKER: u8 = 0x7E; // ~

#[inline]
fn is_digit(b: u8) -> bool {
    matches!(b, DIGIT_START..=DIGIT_END)
}

#[inline]
fn is_alphanumeric(b: u8) -> bool {
    matches!(b, ASCII_UPPER_START..=ASCII_UPPER_END | ASCII_LOWER_START..=ASCII_LOWER_END)
        || is_digit(b)
}

#[inline]
fn is_channel_id_byte(b: u8) -> bool {
    matches!(b, ASCII_UPPER_START..=ASCII_UPPER_END) || is_digit(b)
}

/// Check if a (case-folded) byte may start a nickname.
#[inline]
pub fn is_valid_nick_first_byte(b: u8) -> bool {
    matches!(b, NICK_RANGE_START..=NICK_RANGE_END)
}

/// Check if a (case-folded) byte may appear after the first nickname byte.
#[inline]
pub fn is_valid_nick_byte(b: u8) -> bool {
    is_valid_nick_first_byte(b) || is_digit(b) || b == HYPHEN
}

/// Check if a (case-folded) byte may appear after the first username byte.
///
/// Same as nicknames, plus `.` for `first.last` style idents.
#[inline]
pub fn is_valid_user_byte(b: u8) -> bool {
    is_valid_nick_byte(b) || b == PERIOD
}

/// Validate an IRC channel name.
///
/// # Examples
///
/// ```
/// use slirc_util::validation::validate_channel;
/// use slirc_util::ValidationError;
///
/// assert!(validate_channel("#rust").is_ok());
/// assert!(validate_channel("!ABC12chan").is_ok());
/// assert_eq!(
///     validate_channel("#"),
///     Err(ValidationError::TooShort { min: 2, actual: 1 })
/// );
/// assert_eq!(
///     validate_channel("#a,b"),
///     Err(ValidationError::InvalidByte { byte: b',', position: 2 })
/// );
/// ```
pub fn validate_channel(name: &str) -> Result<()> {
    validate_channel_with_max_len(name, CHANNEL_MAX_LEN)
}

/// Validate an IRC channel name with a custom maximum length.
///
/// This is useful when you have ISUPPORT CHANNELLEN information.
pub fn validate_channel_with_max_len(name: &str, max_len: usize) -> Result<()> {
    check_channel(name.as_bytes(), max_len).map_err(|err| rejected("channel", name, err))
}

fn check_channel(bytes: &[u8], max_len: usize) -> Result<()> {
    let len = bytes.len();
    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len < CHANNEL_MIN_LEN {
        return Err(ValidationError::TooShort {
            min: CHANNEL_MIN_LEN,
            actual: len,
        });
    }
    if len > max_len {
        return Err(ValidationError::TooLong {
            max: max_len,
            actual: len,
        });
    }

    let first = bytes[0];
    if !CHANNEL_PREFIXES.contains(&first) {
        return Err(ValidationError::InvalidPrefix { byte: first });
    }

    if first == CHANNEL_ID_PREFIX {
        if len < CHANNEL_ID_MIN_LEN {
            return Err(ValidationError::TooShort {
                min: CHANNEL_ID_MIN_LEN,
                actual: len,
            });
        }

        for (position, &byte) in bytes.iter().enumerate().take(1 + CHANNEL_ID_LEN).skip(1) {
            if !is_channel_id_byte(byte) {
                return Err(ValidationError::InvalidChannelId { byte, position });
            }
        }
    }

    for (position, &byte) in bytes.iter().enumerate().skip(1) {
        if INVALID_CHAN_BYTES.contains(&byte) {
            return Err(ValidationError::InvalidByte { byte, position });
        }
    }

    Ok(())
}

/// Validate an IRC nickname.
///
/// # Examples
///
/// ```
/// use slirc_util::validation::validate_nick;
///
/// assert!(validate_nick("Nick_1").is_ok());
/// assert!(validate_nick("[away]").is_ok());
/// assert!(validate_nick("1abc").is_err());
/// assert!(validate_nick("").is_err());
/// ```
pub fn validate_nick(nick: &str) -> Result<()> {
    check_nick(&fold_case(nick)).map_err(|err| rejected("nickname", nick, err))
}

fn check_nick(folded: &str) -> Result<()> {
    let (&first, rest) = folded
        .as_bytes()
        .split_first()
        .ok_or(ValidationError::Empty)?;

    if !is_valid_nick_first_byte(first) {
        return Err(ValidationError::InvalidFirstByte {
            byte: first,
            position: 0,
        });
    }

    for (i, &byte) in rest.iter().enumerate() {
        if !is_valid_nick_byte(byte) {
            return Err(ValidationError::InvalidByte {
                byte,
                position: i + 1,
            });
        }
    }

    Ok(())
}

/// Validate an IRC username (ident).
///
/// A leading `~` (no ident response) is skipped before checking.
///
/// # Examples
///
/// ```
/// use slirc_util::validation::validate_user;
/// use slirc_util::ValidationError;
///
/// assert!(validate_user("~user.name").is_ok());
/// assert!(validate_user("first.last").is_ok());
/// assert_eq!(validate_user("~"), Err(ValidationError::Empty));
/// ```
pub fn validate_user(user: &str) -> Result<()> {
    check_user(&fold_case(user)).map_err(|err| rejected("username", user, err))
}

fn check_user(folded: &str) -> Result<()> {
    let bytes = folded.as_bytes();
    let offset = usize::from(bytes.first() == Some(&NO_IDENT_MARKER));

    let (&first, rest) = bytes[offset..]
        .split_first()
        .ok_or(ValidationError::Empty)?;

    if !is_alphanumeric(first) {
        return Err(ValidationError::InvalidFirstByte {
            byte: first,
            position: offset,
        });
    }

    for (i, &byte) in rest.iter().enumerate() {
        if !is_valid_user_byte(byte) {
            return Err(ValidationError::InvalidByte {
                byte,
                position: offset + 1 + i,
            });
        }
    }

    Ok(())
}

/// Check if a string is a valid channel name.
///
/// This is a convenience wrapper around [`validate_channel`].
#[inline]
pub fn is_valid_channel(name: &str) -> bool {
    validate_channel(name).is_ok()
}

/// Check if a string is a valid nickname.
///
/// This is a convenience wrapper around [`validate_nick`].
#[inline]
pub fn is_valid_nick(nick: &str) -> bool {
    validate_nick(nick).is_ok()
}

/// Check if a string is a valid username.
///
/// This is a convenience wrapper around [`validate_user`].
#[inline]
pub fn is_valid_user(user: &str) -> bool {
    validate_user(user).is_ok()
}

fn rejected(kind: &'static str, input: &str, err: ValidationError) -> ValidationError {
    #[cfg(feature = "tracing")]
    tracing::trace!(kind, input, reason = %err, "identifier rejected");
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, input);
    err
}

/// Extension trait for checking if a string is a valid IRC channel name.
pub trait ChannelExt {
    /// Check if this string is a valid IRC channel name.
    ///
    /// Valid channel names:
    /// - Start with '#', '&', '+', '*', or '!' followed by a 5-byte ID
    /// - Do not contain NUL, BELL, CR, LF, space, comma, or colon
    /// - Are 2 to 50 bytes long
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        is_valid_channel(self)
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        is_valid_channel(self)
    }
}

/// Extension trait for checking if a string is a valid IRC nickname.
pub trait NickExt {
    /// Check if this string is a valid IRC nickname.
    ///
    /// ```
    /// use slirc_util::NickExt;
    ///
    /// assert!("Nick123".is_valid_nick());
    /// assert!(!"123nick".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        is_valid_nick(self)
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        is_valid_nick(self)
    }
}

/// Extension trait for checking if a string is a valid IRC username.
pub trait UserExt {
    /// Check if this string is a valid IRC username (ident).
    fn is_valid_user(&self) -> bool;
}

impl UserExt for &str {
    fn is_valid_user(&self) -> bool {
        is_valid_user(self)
    }
}

impl UserExt for String {
    fn is_valid_user(&self) -> bool {
        is_valid_user(self)
    }
}
