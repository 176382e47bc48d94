//! Fuzz target for identifier validation and case folding
//!
//! The boolean predicates must agree with the diagnosing validators, and
//! folding must never change the byte length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        assert_eq!(
            slirc_util::is_valid_channel(input),
            slirc_util::validate_channel(input).is_ok()
        );
        assert_eq!(
            slirc_util::is_valid_nick(input),
            slirc_util::validate_nick(input).is_ok()
        );
        assert_eq!(
            slirc_util::is_valid_user(input),
            slirc_util::validate_user(input).is_ok()
        );

        let folded = slirc_util::fold_case(input);
        assert_eq!(folded.len(), input.len());
        assert!(slirc_util::irc_eq(input, &folded));
    }
});
