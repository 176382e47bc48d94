//! Fuzz target for `{alias}` markup handling
//!
//! Expands and strips arbitrary text, checking that stripping the expanded
//! control bytes never leaves a table sequence behind.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let expanded = slirc_util::apply_format(input);
        let _ = slirc_util::strip_format_tokens(input);

        let stripped = slirc_util::strip_control_bytes(&expanded);
        assert!(!slirc_util::format::has_control_bytes(&stripped));
    }
});
