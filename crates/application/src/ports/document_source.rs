use async_trait::async_trait;
use blockdecree_domain::{DomainError, SourceDocument};

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load_documents(&self) -> Result<Vec<SourceDocument>, DomainError>;
}
