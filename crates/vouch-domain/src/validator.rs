use crate::catalog::Catalog;
use crate::failure::{ContractFailure, FailureFactory};
use crate::policy::EffectiveSettings;
use crate::pool::CheckContext;
use crate::provenance::ProvenanceCleaner;
use std::sync::{Arc, OnceLock};

/// Immutable, thread-shareable configuration of the check machinery: the compiled catalog,
/// the default display name and the provenance cleaner.
#[derive(Debug)]
pub struct Validator {
    default_name: String,
    catalog: Catalog,
    cleaner: ProvenanceCleaner,
}

impl Validator {
    pub fn new(settings: EffectiveSettings) -> Result<Self, ContractFailure> {
        let cleaner = ProvenanceCleaner::new(
            settings.clean_provenance,
            settings.library_prefixes.iter().cloned(),
        );
        let catalog = Catalog::compile(&settings, &cleaner)?;
        tracing::debug!(
            default_name = %settings.default_name,
            clean_provenance = settings.clean_provenance,
            "validator built"
        );
        Ok(Self {
            default_name: settings.default_name,
            catalog,
            cleaner,
        })
    }

    /// Process-wide validator over the built-in settings.
    pub fn shared_default() -> Arc<Validator> {
        static DEFAULT: OnceLock<Arc<Validator>> = OnceLock::new();
        DEFAULT
            .get_or_init(|| {
                Arc::new(
                    Validator::new(EffectiveSettings::default())
                        .expect("built-in message catalog must compile"),
                )
            })
            .clone()
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cleaner(&self) -> &ProvenanceCleaner {
        &self.cleaner
    }

    pub fn failures(&self) -> FailureFactory<'_> {
        FailureFactory::new(&self.catalog, &self.cleaner)
    }

    /// A fresh check context for the calling thread.
    pub fn context(self: &Arc<Self>) -> CheckContext {
        CheckContext::new(Arc::clone(self))
    }
}
