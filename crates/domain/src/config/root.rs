use serde::{Deserialize, Serialize};

use super::classification::ClassificationConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::normalization::{is_service_label, NormalizationConfig};
use super::storage::StorageConfig;

const LOCAL_CONFIG: &str = "blockdecree.toml";
const SYSTEM_CONFIG: &str = "/etc/blockdecree/config.toml";

/// Main configuration structure for blockdecree
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Candidate canonicalization settings
    #[serde(default)]
    pub normalization: NormalizationConfig,

    /// Title keywords deciding block vs unblock
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Seed, output and manifest locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. blockdecree.toml in current directory
    /// 3. /etc/blockdecree/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(manifest) = overrides.manifest {
            self.storage.manifest = manifest;
        }
        if let Some(seeds) = overrides.seed_files {
            self.storage.seed_files = seeds;
        }
        if let Some(output) = overrides.output_file {
            self.storage.output_file = output;
        }
        if let Some(source) = overrides.source_domain {
            self.normalization.source_domain = Some(source);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let norm = &self.normalization;

        if norm.max_domain_length == 0 {
            return Err(ConfigError::Validation(
                "max_domain_length cannot be 0".to_string(),
            ));
        }
        if norm.max_source_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_source_bytes cannot be 0".to_string(),
            ));
        }

        for label in &norm.service_subdomains {
            let label = label.trim().to_ascii_lowercase();
            if !is_service_label(&label) {
                return Err(ConfigError::Validation(format!(
                    "Invalid service subdomain '{}' (expected [a-z0-9-]+)",
                    label
                )));
            }
        }

        if self.storage.output_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_file cannot be empty".to_string(),
            ));
        }

        if self.classification.block_keywords.is_empty()
            && self.classification.unblock_keywords.is_empty()
        {
            return Err(ConfigError::Validation(
                "At least one block or unblock keyword is required".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub manifest: Option<String>,
    pub seed_files: Option<Vec<String>>,
    pub output_file: Option<String>,
    pub source_domain: Option<String>,
    pub log_level: Option<String>,
}
