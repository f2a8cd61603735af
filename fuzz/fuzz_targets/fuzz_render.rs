//! Fuzz target for placeholder rendering.
//!
//! Goal: rendering **never panics**; it renders exactly when the argument count matches the
//! placeholder count.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_render
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_format::{count_placeholders, render};

#[derive(Arbitrary, Debug)]
struct Input {
    form: String,
    args: Vec<String>,
}

fuzz_target!(|input: Input| {
    let expected = count_placeholders(&input.form);
    let rendered = render(&input.form, &input.args);
    assert_eq!(rendered.is_ok(), expected == input.args.len());
});
