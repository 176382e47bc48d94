//! Fuzz target for glob matching
//!
//! Splits the input at the first NUL into a pattern and a subject string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let (pattern, subject) = input.split_once('\0').unwrap_or((input, ""));

        let compiled = slirc_util::Pattern::new(pattern);
        assert_eq!(compiled.matches(subject), slirc_util::glob(subject, pattern));

        if !pattern.contains('*') {
            assert!(compiled.matches(pattern));
        }
    }
});
