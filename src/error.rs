//! Error types for identifier validation.
//!
//! The `is_valid_*` predicates only answer yes or no. The `validate_*`
//! functions in [`validation`](crate::validation) return a
//! [`ValidationError`] naming the first rule the input broke.

use thiserror::Error;

/// Convenience type alias for Results using [`ValidationError`].
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Reasons an identifier was rejected.
///
/// Positions are byte offsets into the input. Nicknames and usernames are
/// checked after case folding, so their reported byte is the folded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ValidationError {
    /// The input was empty, or held nothing after a `~` ident marker.
    #[error("input is empty")]
    Empty,

    /// The input was shorter than the grammar allows.
    #[error("input too short: {actual} bytes (min {min})")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
        /// Actual length.
        actual: usize,
    },

    /// The input was longer than the grammar allows.
    #[error("input too long: {actual} bytes (max {max})")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// Channel name did not start with a channel prefix.
    #[error("invalid channel prefix: {byte:#04x}")]
    InvalidPrefix {
        /// The offending first byte.
        byte: u8,
    },

    /// A `!` channel's 5-character ID contained a byte outside `A-Z0-9`.
    #[error("invalid channel id byte {byte:#04x} at position {position}")]
    InvalidChannelId {
        /// The offending byte.
        byte: u8,
        /// Position in the input.
        position: usize,
    },

    /// The first byte is not allowed to start this kind of identifier.
    #[error("invalid first byte {byte:#04x} at position {position}")]
    InvalidFirstByte {
        /// The offending byte.
        byte: u8,
        /// Position in the input (1 when a `~` marker was skipped).
        position: usize,
    },

    /// A byte is not allowed anywhere in this kind of identifier.
    #[error("invalid byte {byte:#04x} at position {position}")]
    InvalidByte {
        /// The offending byte.
        byte: u8,
        /// Position in the input.
        position: usize,
    },
}
