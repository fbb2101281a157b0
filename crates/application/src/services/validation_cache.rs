use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;

/// Per-run memo for TLD validity answers and confusable skeletons.
///
/// Both maps are append-only and every value is a pure function of its key,
/// so two threads racing on the same key may compute it twice; the first
/// insert wins and the other result is dropped. The value is computed
/// outside the shard lock.
#[derive(Default)]
pub struct ValidationCache {
    tlds: DashMap<String, bool, FxBuildHasher>,
    skeletons: DashMap<String, Arc<str>, FxBuildHasher>,
}

impl ValidationCache {
    pub fn new() -> Self {
        Self {
            tlds: DashMap::with_hasher(FxBuildHasher),
            skeletons: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn tld_valid_or_insert_with(&self, tld: &str, compute: impl FnOnce() -> bool) -> bool {
        if let Some(known) = self.tlds.get(tld) {
            return *known;
        }
        let valid = compute();
        *self.tlds.entry(tld.to_string()).or_insert(valid)
    }

    pub fn skeleton_or_insert_with(
        &self,
        input: &str,
        compute: impl FnOnce() -> String,
    ) -> Arc<str> {
        if let Some(known) = self.skeletons.get(input) {
            return Arc::clone(&known);
        }
        let skeleton: Arc<str> = Arc::from(compute());
        Arc::clone(
            &self
                .skeletons
                .entry(input.to_string())
                .or_insert(skeleton),
        )
    }

    pub fn tld_entries(&self) -> usize {
        self.tlds.len()
    }

    pub fn skeleton_entries(&self) -> usize {
        self.skeletons.len()
    }
}
