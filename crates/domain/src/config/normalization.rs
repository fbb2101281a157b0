use serde::{Deserialize, Serialize};

use crate::canonical_domain::MAX_DOMAIN_LENGTH;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizationConfig {
    /// Leading labels stripped from candidates (`www.example.ua` → `example.ua`)
    #[serde(default = "default_service_subdomains")]
    pub service_subdomains: Vec<String>,

    /// Site the lists are published on; never allowed into its own blocklist
    #[serde(default)]
    pub source_domain: Option<String>,

    #[serde(default = "default_max_domain_length")]
    pub max_domain_length: usize,

    /// Source text blocks larger than this are skipped wholesale
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,

    /// TLDs accepted in addition to the Public Suffix List
    #[serde(default)]
    pub extra_tlds: Vec<String>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            service_subdomains: default_service_subdomains(),
            source_domain: None,
            max_domain_length: default_max_domain_length(),
            max_source_bytes: default_max_source_bytes(),
            extra_tlds: vec![],
        }
    }
}

impl NormalizationConfig {
    /// Service labels lower-cased, trimmed and filtered to `[a-z0-9-]+`.
    pub fn normalized_service_subdomains(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .service_subdomains
            .iter()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| is_service_label(s))
            .collect();
        labels.dedup();
        labels
    }
}

pub fn is_service_label(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn default_service_subdomains() -> Vec<String> {
    [
        "www", "ftp", "mail", "api", "blog", "shop", "login", "admin", "web", "secure", "m",
        "mobile", "app", "dev", "test",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_domain_length() -> usize {
    MAX_DOMAIN_LENGTH
}

fn default_max_source_bytes() -> usize {
    10_000_000
}
