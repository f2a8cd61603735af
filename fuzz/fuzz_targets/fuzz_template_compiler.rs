//! Fuzz target for the dual-polarity template compiler.
//!
//! Goal: compiling **never panics**, and each compiled form renders with exactly as many
//! arguments as it has placeholders.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_compiler
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use vouch_format::{Polarity, compile};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(template) = compile(raw) else {
        return;
    };

    for polarity in [Polarity::Positive, Polarity::Negative] {
        let args = vec!["x"; template.arity(polarity)];
        template
            .render(polarity, &args)
            .expect("a form renders with its own arity");
    }
});
