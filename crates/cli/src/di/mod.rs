use blockdecree_application::ports::{BlocklistStore, DocumentSource, TldOracle};
use blockdecree_application::services::{
    CanonicalizerSettings, DomainCanonicalizer, DomainExtractor, TitleClassifier, ValidationCache,
};
use blockdecree_application::use_cases::ConsolidateBlocklistUseCase;
use blockdecree_domain::{Config, DomainError};
use blockdecree_infrastructure::persistence::FileBlocklistStore;
use blockdecree_infrastructure::sources::ManifestDocumentSource;
use blockdecree_infrastructure::tld::PslTldOracle;
use std::sync::Arc;

pub struct Adapters {
    pub oracle: Arc<dyn TldOracle>,
    pub store: Arc<dyn BlocklistStore>,
    pub documents: Arc<dyn DocumentSource>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            oracle: Arc::new(PslTldOracle::with_extra_tlds(
                &config.normalization.extra_tlds,
            )),
            store: Arc::new(FileBlocklistStore::from_config(&config.storage)),
            documents: Arc::new(ManifestDocumentSource::new(&config.storage.manifest)),
        }
    }
}

pub struct UseCases {
    pub consolidate: Arc<ConsolidateBlocklistUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Result<Self, DomainError> {
        let canonicalizer = Arc::new(DomainCanonicalizer::new(
            CanonicalizerSettings::from(&config.normalization),
            adapters.oracle.clone(),
            Arc::new(ValidationCache::new()),
        ));
        let extractor = Arc::new(DomainExtractor::new(
            canonicalizer,
            config.normalization.max_source_bytes,
        ));
        let classifier = TitleClassifier::from_config(&config.classification)?;

        Ok(Self {
            consolidate: Arc::new(ConsolidateBlocklistUseCase::new(
                adapters.store.clone(),
                adapters.documents.clone(),
                extractor,
                classifier,
            )),
        })
    }
}
