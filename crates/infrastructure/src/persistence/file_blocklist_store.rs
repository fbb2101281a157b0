use async_trait::async_trait;
use blockdecree_application::ports::BlocklistStore;
use blockdecree_domain::config::StorageConfig;
use blockdecree_domain::DomainError;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Plain-text blocklists on disk: one domain per line.
///
/// Seed files that do not exist are skipped with a warning. The output is
/// written to a sibling temp file first and renamed over the target, so a
/// reader never sees a half-written list.
pub struct FileBlocklistStore {
    seed_files: Vec<PathBuf>,
    output_file: PathBuf,
}

impl FileBlocklistStore {
    pub fn new(seed_files: Vec<PathBuf>, output_file: PathBuf) -> Self {
        Self {
            seed_files,
            output_file,
        }
    }

    pub fn from_config(cfg: &StorageConfig) -> Self {
        Self::new(
            cfg.seed_files.iter().map(PathBuf::from).collect(),
            PathBuf::from(&cfg.output_file),
        )
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .output_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.output_file.with_file_name(name)
    }
}

#[async_trait]
impl BlocklistStore for FileBlocklistStore {
    async fn load_seed(&self) -> Result<Vec<String>, DomainError> {
        let mut lines = Vec::new();

        for path in &self.seed_files {
            let content = match fs::read_to_string(path).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    warn!(path = %path.display(), "Seed blocklist not found, skipped");
                    continue;
                }
                Err(e) => {
                    return Err(DomainError::IoError(format!(
                        "Failed to read seed blocklist {}: {}",
                        path.display(),
                        e
                    )))
                }
            };

            let before = lines.len();
            lines.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(str::to_string),
            );
            debug!(path = %path.display(), entries = lines.len() - before, "Seed blocklist read");
        }

        Ok(lines)
    }

    async fn store(&self, domains: &BTreeSet<String>) -> Result<(), DomainError> {
        let mut body = String::with_capacity(domains.iter().map(|d| d.len() + 1).sum());
        for domain in domains {
            body.push_str(domain);
            body.push('\n');
        }

        if let Some(parent) = self.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body).await.map_err(|e| {
            DomainError::IoError(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &self.output_file).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to move {} to {}: {}",
                temp.display(),
                self.output_file.display(),
                e
            ))
        })?;

        info!(
            path = %self.output_file.display(),
            domains = domains.len(),
            "Blocklist written"
        );
        Ok(())
    }
}
