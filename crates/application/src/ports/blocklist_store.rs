use async_trait::async_trait;
use blockdecree_domain::DomainError;
use std::collections::BTreeSet;

#[async_trait]
pub trait BlocklistStore: Send + Sync {
    /// Raw lines of the previously persisted blocklist(s), blank lines removed.
    async fn load_seed(&self) -> Result<Vec<String>, DomainError>;

    /// Persists the resolved list, one domain per line in set order.
    async fn store(&self, domains: &BTreeSet<String>) -> Result<(), DomainError>;
}
