//! Compiled message catalog: one [`FormatTemplate`] per [`FailureKind`].
//!
//! Every template is compiled and arity-checked up front, so rendering never meets a
//! malformed template at failure time.

use crate::failure::{ContractFailure, ContractViolation};
use crate::policy::EffectiveSettings;
use crate::provenance::{self, ProvenanceCleaner};
use vouch_format::{FormatTemplate, Polarity, compile};
use vouch_types::FailureKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<FormatTemplate>,
}

impl Catalog {
    /// Compile the template in effect for every kind.
    ///
    /// Fails with a [`ContractFailure`] when a template does not compile or when either of
    /// its forms has a placeholder count different from the kind's argument count.
    pub fn compile(
        settings: &EffectiveSettings,
        cleaner: &ProvenanceCleaner,
    ) -> Result<Self, ContractFailure> {
        let mut templates = Vec::with_capacity(FailureKind::COUNT);
        for kind in FailureKind::ALL {
            let template = compile_kind(kind, settings.template(kind))
                .map_err(|violation| ContractFailure::new(violation, provenance::capture(cleaner)))?;
            templates.push(template);
        }

        tracing::debug!(
            kinds = templates.len(),
            overridden = settings.templates.len(),
            "message catalog compiled"
        );
        Ok(Self { templates })
    }

    pub fn template(&self, kind: FailureKind) -> &FormatTemplate {
        &self.templates[kind.index()]
    }
}

/// Compile one raw template and verify both forms take `kind.arity()` arguments.
pub fn compile_kind(kind: FailureKind, raw: &str) -> Result<FormatTemplate, ContractViolation> {
    let template =
        compile(raw).map_err(|source| ContractViolation::MalformedTemplate { kind, source })?;
    for polarity in [Polarity::Positive, Polarity::Negative] {
        let found = template.arity(polarity);
        if found != kind.arity() {
            return Err(ContractViolation::TemplateArity {
                kind,
                polarity,
                expected: kind.arity(),
                found,
            });
        }
    }
    Ok(template)
}
