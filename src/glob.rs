//! IRC-style glob matching.
//!
//! The only wildcard is `*`, matching any run of zero or more bytes. The
//! matcher makes a single left-to-right pass: the leading literal must be
//! a prefix but is not consumed, each interior literal is matched at its
//! leftmost occurrence after the previous match, and the trailing literal
//! must be a suffix of what is left. There is no backtracking.
//!
//! Matching is case-sensitive; fold both sides with
//! [`fold_case`](crate::casemap::fold_case) first for IRC-insensitive
//! comparison.

use std::fmt;

/// The wildcard character.
pub const GLOB_CHAR: char = '*';

/// A compiled glob pattern.
///
/// # Examples
///
/// ```
/// use slirc_util::glob::Pattern;
///
/// let mask = Pattern::new("*!*@*.example.com");
/// assert!(mask.matches("nick!user@host.example.com"));
/// assert!(!mask.matches("nick!user@example.org"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Pattern {
    raw: String,
    /// Literal parts between wildcards; empty when `raw` has no `*`.
    parts: Vec<String>,
    leading: bool,
    trailing: bool,
}

impl Pattern {
    /// Compile a pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let parts = if raw.contains(GLOB_CHAR) {
            raw.split(GLOB_CHAR).map(str::to_owned).collect()
        } else {
            Vec::new()
        };

        Self {
            leading: raw.starts_with(GLOB_CHAR),
            trailing: raw.ends_with(GLOB_CHAR),
            raw,
            parts,
        }
    }

    /// The pattern text as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the pattern contains no wildcard.
    pub fn is_literal(&self) -> bool {
        self.parts.is_empty()
    }

    /// Test whether `input` matches this pattern.
    pub fn matches(&self, input: &str) -> bool {
        if self.is_literal() {
            // also covers the empty pattern, which only matches ""
            return input == self.raw;
        }

        if self.raw.len() == GLOB_CHAR.len_utf8() {
            return true;
        }

        let (first, rest) = match self.parts.split_first() {
            Some(split) => split,
            None => return false,
        };
        let (last, middle) = match rest.split_last() {
            Some(split) => split,
            None => return false,
        };

        // the prefix is only tested; interior parts search from the start
        if !self.leading && !input.starts_with(first.as_str()) {
            return false;
        }

        let mut remaining = input;

        for part in middle {
            match remaining.find(part.as_str()) {
                Some(idx) => remaining = &remaining[idx + part.len()..],
                None => return false,
            }
        }

        self.trailing || remaining.ends_with(last.as_str())
    }
}

impl From<String> for Pattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.raw
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Test a string against a glob pattern.
///
/// # Examples
///
/// ```
/// use slirc_util::glob::glob;
///
/// assert!(glob("hello world", "hello*"));
/// assert!(glob("hello world", "*world"));
/// assert!(glob("anything", "*"));
/// assert!(glob("", ""));
/// assert!(!glob("abc", ""));
/// ```
pub fn glob(input: &str, pattern: &str) -> bool {
    Pattern::new(pattern).matches(input)
}

/// Extension trait for glob matching on strings.
pub trait GlobExt {
    /// Test whether this string matches `pattern`.
    fn glob_matches(&self, pattern: &str) -> bool;
}

impl GlobExt for &str {
    fn glob_matches(&self, pattern: &str) -> bool {
        glob(self, pattern)
    }
}

impl GlobExt for String {
    fn glob_matches(&self, pattern: &str) -> bool {
        glob(self, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_star() {
        assert!(glob("", ""));
        assert!(!glob("abc", ""));
        assert!(glob("anything", "*"));
        assert!(glob("", "*"));
        assert!(glob("", "**"));
    }

    #[test]
    fn test_literal() {
        assert!(glob("exact", "exact"));
        assert!(!glob("exact", "Exact"));
        assert!(!glob("exactly", "exact"));
        assert!(Pattern::new("plain").is_literal());
        assert!(!Pattern::new("pl*in").is_literal());
    }

    #[test]
    fn test_prefix_suffix() {
        assert!(glob("hello world", "hello*"));
        assert!(glob("hello world", "*world"));
        assert!(glob("hello", "h*o"));
        assert!(glob("ho", "h*o"));
        assert!(!glob("hello world", "h*o"));
        assert!(!glob("hello world", "world*"));
        assert!(!glob("hello world", "*hello"));
    }

    #[test]
    fn test_middle_parts() {
        assert!(glob("nick!user@host.example.com", "*!*@*.example.com"));
        assert!(glob("abc", "*b*"));
        assert!(glob("abc", "a*b*c"));
        assert!(!glob("acb", "a*b*c"));
        assert!(!glob("abc", "*d*"));
    }

    #[test]
    fn test_prefix_is_not_consumed() {
        // the same bytes may satisfy both the prefix and the suffix
        assert!(glob("a", "a*a"));
        assert!(glob("aa", "a*a"));
        assert!(glob("ab", "ab*b"));
        // interior parts also search from the start of the input
        assert!(glob("ab", "ab*b*"));
        assert!(glob("abc", "abc*b*c"));
        assert!(!glob("ab", "ab*c*"));
        assert!(!glob("ba", "a*a"));
    }

    #[test]
    fn test_leftmost_interior_match() {
        // "b" takes the first b, leaving "cbd" for the suffix
        assert!(glob("abcbd", "a*b*bd"));
        // the suffix may not reuse bytes consumed by an interior part
        assert!(!glob("abd", "a*bd*bd"));
        assert!(glob("abdbd", "a*bd*bd"));
    }

    #[test]
    fn test_pattern_reuse() {
        let pattern = Pattern::from("*.example.com");
        assert!(pattern.matches("irc.example.com"));
        assert!(pattern.matches(".example.com"));
        assert!(!pattern.matches("example.com"));
        assert_eq!(pattern.to_string(), "*.example.com");
        assert_eq!(pattern.as_str(), "*.example.com");
        assert_eq!(String::from(pattern), "*.example.com");
    }

    #[test]
    fn test_extension_trait() {
        assert!("hello world".glob_matches("hello*"));
        assert!(String::from("abc").glob_matches("a*c"));
        assert!(!"abc".glob_matches(""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pattern_serde() {
        let pattern = Pattern::new("*!*@host");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"*!*@host\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
        assert!(back.matches("nick!user@host"));
    }
}
