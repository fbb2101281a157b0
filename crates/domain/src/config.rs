pub mod classification;
pub mod errors;
pub mod logging;
pub mod normalization;
pub mod root;
pub mod storage;

pub use classification::ClassificationConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use normalization::NormalizationConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
