use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Previously persisted blocklists; every line seeds a blocked directive
    #[serde(default = "default_seed_files")]
    pub seed_files: Vec<String>,

    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// TOML manifest describing the extracted source documents
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_files: default_seed_files(),
            output_file: default_output_file(),
            manifest: default_manifest(),
        }
    }
}

fn default_seed_files() -> Vec<String> {
    vec!["blocked.txt".to_string()]
}

fn default_output_file() -> String {
    "blocked.result.txt".to_string()
}

fn default_manifest() -> String {
    "documents.toml".to_string()
}
