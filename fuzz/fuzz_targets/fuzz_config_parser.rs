//! Fuzz target for config parsing and exam planning.
//!
//! Goal: neither the YAML/TOML/JSON config loaders nor the exam parsers may **panic**.
//! Malformed input must surface as an error.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use medik_settings::{ConfigFormat, Overrides};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in [ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json] {
        let Ok(cfg) = medik_settings::parse_config(text, format) else {
            continue;
        };
        let Ok(resolved) = medik_settings::resolve_config(cfg, Overrides::default()) else {
            continue;
        };

        // Plan every declared protocol; parsing never touches the environment.
        let names: Vec<String> = resolved.protocols.keys().cloned().collect();
        let _ = medik_domain::plan(&resolved.exams, &names, &resolved.protocols);
    }
});
