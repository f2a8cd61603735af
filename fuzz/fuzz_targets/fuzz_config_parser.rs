//! Fuzz target for `vouch.toml` parsing and resolution.
//!
//! Goal: parsing and resolving **never panic** on any input. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use vouch_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = parse_config_toml(text) {
            if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
                // A resolved config always yields a validator.
                vouch_domain::Validator::new(resolved.effective)
                    .expect("resolved settings must compile");
            }
        }
    }
});
