//! # slirc-util
//!
//! String helpers for IRC clients and servers.
//!
//! ## Features
//!
//! - `{alias}` color/style markup to and from IRC control bytes
//! - Channel name, nickname and username validation
//! - RFC 1459 case folding and case-insensitive comparison
//! - `*` glob matching for hostmasks and similar patterns
//!
//! All functions are pure and allocation-light; the only shared state is
//! the read-only [`FORMAT_CODES`] table.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use slirc_util::{apply_format, fold_case, glob, is_valid_channel, is_valid_nick};
//!
//! let line = apply_format("{bold}{red}alert{reset}: disk full");
//! assert_eq!(line, "\x02\x0304alert\x0f: disk full");
//!
//! assert!(is_valid_channel("#rust"));
//! assert!(is_valid_nick("ferris"));
//! assert_eq!(fold_case("Ferris[m]"), "ferris{m}");
//! assert!(glob("ferris!crab@rust-lang.org", "*!*@rust-lang.org"));
//! ```

pub mod casemap;
pub mod error;
pub mod format;
pub mod glob;
pub mod validation;

pub use self::casemap::{fold_case, irc_eq};
pub use self::error::{Result, ValidationError};
pub use self::format::{
    apply_format, strip_control_bytes, strip_format_tokens, FormatCode, FormattedStringExt,
    FORMAT_CODES,
};
pub use self::glob::{glob, GlobExt, Pattern};
pub use self::validation::{
    is_valid_channel, is_valid_nick, is_valid_user, validate_channel, validate_nick,
    validate_user, ChannelExt, NickExt, UserExt,
};
