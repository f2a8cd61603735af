//! Look up the message a failure kind renders in each polarity.

use vouch_domain::Validator;
use vouch_format::Polarity;
use vouch_types::{FailureKind, all_kinds};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub kind: FailureKind,
    pub arity: usize,
    pub positive: String,
    pub negative: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known kind IDs.
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

/// Explain a kind by its ID (`NOT_EMPTY`) using the validator's catalog.
pub fn run_explain(validator: &Validator, identifier: &str) -> ExplainOutput {
    match FailureKind::from_id(identifier.trim()) {
        Some(kind) => {
            let template = validator.catalog().template(kind);
            ExplainOutput::Found(Explanation {
                kind,
                arity: kind.arity(),
                positive: template.form(Polarity::Positive).to_string(),
                negative: template.form(Polarity::Negative).to_string(),
            })
        }
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: all_kinds().iter().map(|kind| kind.id()).collect(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let title = exp.kind.id();
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("arguments: {}\n", exp.arity));
    out.push_str(&format!("positive:  {}\n", exp.positive));
    out.push_str(&format!("negative:  {}\n", exp.negative));
    out
}

/// Format the "not found" message for terminal display.
pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = format!("Unknown failure kind: {identifier}\n\nAvailable kinds:\n");
    for id in available {
        out.push_str(&format!("  - {id}\n"));
    }
    out
}
