//! Fuzz target: code extraction over arbitrary text.

#![no_main]

use inbox_core::extract_code;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Some(code) = extract_code(text) {
        assert!((4..=8).contains(&code.len()));
        assert!(code.bytes().all(|b| b.is_ascii_digit()));
    }
});
