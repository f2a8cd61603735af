use crate::pool::CheckContext;
use crate::validator::Validator;
use std::sync::Arc;
use vouch_types::{Frame, Trace};

pub fn validator() -> Arc<Validator> {
    Validator::shared_default()
}

pub fn context() -> CheckContext {
    CheckContext::new(validator())
}

/// A synthetic trace with one frame per symbol, innermost first.
pub fn trace_of(symbols: &[&str]) -> Trace {
    symbols
        .iter()
        .enumerate()
        .map(|(i, symbol)| frame(symbol, i))
        .collect::<Vec<_>>()
        .into()
}

pub fn frame(symbol: &str, i: usize) -> Frame {
    Frame::new(symbol).at("src/lib.rs", 10 + i as u32)
}

/// Rendered message of an argument failure; panics on success or on a contract failure.
pub fn message<T: std::fmt::Debug>(result: crate::failure::CheckResult<T>) -> String {
    let failure = result.expect_err("check should fail");
    failure
        .as_argument()
        .unwrap_or_else(|| panic!("expected an argument failure, got {failure:?}"))
        .message()
        .to_string()
}
