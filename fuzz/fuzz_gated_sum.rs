//! Fuzz target for extraction and both summation modes.
//!
//! Run with: cargo +nightly fuzz run fuzz_gated_sum
//!
//! Gated sums can never exceed ungated sums over the same text, and overflow
//! must surface as an error rather than a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mulscan_core::{sum_gated_str, sum_ungated_str};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let (Ok(all), Ok(gated)) = (sum_ungated_str(text), sum_gated_str(text)) {
        assert!(gated <= all);
    }
});
