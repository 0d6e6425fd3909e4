//! Fuzz target for `.env` parsing.
//!
//! Goal: the parser should **never panic**, and every key it returns is non-empty.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_env_file
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(vars) = medik_settings::parse_env_file(text)
    {
        assert!(vars.keys().all(|k| !k.is_empty()));
    }
});
