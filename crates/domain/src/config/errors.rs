#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write configuration {0}: {1}")]
    FileWrite(String, String),

    #[error("Malformed configuration: {0}")]
    Parse(String),

    #[error("Cannot serialize configuration: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
