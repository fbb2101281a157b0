use async_trait::async_trait;
use blockdecree_application::ports::DocumentSource;
use blockdecree_domain::{
    parse_effective_time, DocumentAction, DomainError, SourceDocument, TextPreparation,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    documents: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    #[serde(default)]
    title: String,
    published_at: Option<String>,
    status: Option<String>,
    action: Option<String>,
    #[serde(default)]
    preparation: TextPreparation,
    path: PathBuf,
}

/// Reads a TOML manifest of already-extracted text files.
///
/// Entry paths are relative to the manifest's directory. An entry whose
/// metadata is malformed or whose text cannot be read is skipped; only an
/// unreadable or unparsable manifest fails the load.
pub struct ManifestDocumentSource {
    manifest: PathBuf,
}

impl ManifestDocumentSource {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    fn base_dir(&self) -> &Path {
        self.manifest.parent().unwrap_or_else(|| Path::new(""))
    }

    async fn load_entry(&self, entry: ManifestEntry) -> Result<SourceDocument, DomainError> {
        let invalid = |reason: String| DomainError::InvalidDocument {
            id: entry.id.clone(),
            reason,
        };

        let path = self.base_dir().join(&entry.path);
        let bytes = fs::read(&path)
            .await
            .map_err(|e| invalid(format!("cannot read {}: {}", path.display(), e)))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let mut document = SourceDocument::new(&entry.id, &entry.title, text)
            .with_preparation(entry.preparation);

        if let Some(raw) = entry.published_at.as_deref() {
            let at = parse_effective_time(raw).map_err(|e| invalid(e.to_string()))?;
            document = document.with_effective_time(at);
        }
        if let Some(status) = entry.status.as_deref() {
            document = document.with_status(status);
        }
        if let Some(raw) = entry.action.as_deref() {
            let action = DocumentAction::from_str(raw)
                .ok_or_else(|| invalid(format!("unknown action '{}'", raw)))?;
            document = document.with_action(action);
        }

        Ok(document)
    }
}

#[async_trait]
impl DocumentSource for ManifestDocumentSource {
    async fn load_documents(&self) -> Result<Vec<SourceDocument>, DomainError> {
        let content = fs::read_to_string(&self.manifest).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to read manifest {}: {}",
                self.manifest.display(),
                e
            ))
        })?;

        let manifest: Manifest = toml::from_str(&content).map_err(|e| {
            DomainError::InvalidManifest(format!("{}: {}", self.manifest.display(), e))
        })?;

        let total = manifest.documents.len();
        let mut documents = Vec::with_capacity(total);
        for entry in manifest.documents {
            match self.load_entry(entry).await {
                Ok(document) => {
                    debug!(
                        document = %document.id,
                        bytes = document.text.len(),
                        preparation = document.preparation.to_str(),
                        "Document loaded"
                    );
                    documents.push(document);
                }
                Err(e) => warn!(error = %e, "Manifest entry skipped"),
            }
        }

        info!(
            manifest = %self.manifest.display(),
            loaded = documents.len(),
            skipped = total - documents.len(),
            "Manifest loaded"
        );
        Ok(documents)
    }
}
