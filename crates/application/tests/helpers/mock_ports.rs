use async_trait::async_trait;
use blockdecree_application::ports::{BlocklistStore, DocumentSource, TldOracle};
use blockdecree_application::services::{
    CanonicalizerSettings, DomainCanonicalizer, DomainExtractor, ValidationCache,
};
use blockdecree_domain::{DomainError, SourceDocument};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Accepts a fixed set of TLDs and a simple LDH label grammar.
pub struct FakeTldOracle {
    tlds: BTreeSet<String>,
    lookups: AtomicUsize,
}

impl FakeTldOracle {
    pub fn new() -> Self {
        Self::with_tlds(&["ua", "com", "org", "test", "xn--j1amh", "xn--p1ai"])
    }

    pub fn with_tlds(tlds: &[&str]) -> Self {
        Self {
            tlds: tlds.iter().map(|t| t.to_string()).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for FakeTldOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl TldOracle for FakeTldOracle {
    fn is_valid_domain(&self, ascii: &str) -> bool {
        let labels: Vec<&str> = ascii.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && label.len() <= 63
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            })
    }

    fn is_known_tld(&self, tld: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.tlds.contains(tld)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryBlocklistStore {
    seed: Arc<RwLock<Vec<String>>>,
    stored: Arc<RwLock<Option<BTreeSet<String>>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryBlocklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(lines: &[&str]) -> Self {
        let store = Self::new();
        *store.seed.write().unwrap() = lines.iter().map(|l| l.to_string()).collect();
        store
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn stored(&self) -> Option<BTreeSet<String>> {
        self.stored.read().unwrap().clone()
    }

    pub fn stored_vec(&self) -> Vec<String> {
        self.stored()
            .map(|set| set.into_iter().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BlocklistStore for InMemoryBlocklistStore {
    async fn load_seed(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.seed.read().unwrap().clone())
    }

    async fn store(&self, domains: &BTreeSet<String>) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        *self.stored.write().unwrap() = Some(domains.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDocumentSource {
    documents: Arc<RwLock<Vec<SourceDocument>>>,
}

impl InMemoryDocumentSource {
    pub fn new(documents: Vec<SourceDocument>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn load_documents(&self) -> Result<Vec<SourceDocument>, DomainError> {
        Ok(self.documents.read().unwrap().clone())
    }
}

pub fn settings_with_source(source: Option<&str>) -> CanonicalizerSettings {
    CanonicalizerSettings {
        source_domain: source.map(|s| s.to_string()),
        ..CanonicalizerSettings::default()
    }
}

pub fn canonicalizer(source: Option<&str>) -> Arc<DomainCanonicalizer> {
    Arc::new(DomainCanonicalizer::new(
        settings_with_source(source),
        Arc::new(FakeTldOracle::new()),
        Arc::new(ValidationCache::new()),
    ))
}

pub fn extractor(source: Option<&str>, max_source_bytes: usize) -> Arc<DomainExtractor> {
    Arc::new(DomainExtractor::new(canonicalizer(source), max_source_bytes))
}
