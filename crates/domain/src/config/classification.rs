use serde::{Deserialize, Serialize};

/// Keyword patterns evaluated against document titles.
///
/// Patterns are case-insensitive regular expressions. `розблокування`
/// contains `блокування`, so with the default lists an unblock title matches
/// both; `unblock_precedence` decides which one wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_block_keywords")]
    pub block_keywords: Vec<String>,

    #[serde(default = "default_unblock_keywords")]
    pub unblock_keywords: Vec<String>,

    #[serde(default = "default_true")]
    pub unblock_precedence: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            block_keywords: default_block_keywords(),
            unblock_keywords: default_unblock_keywords(),
            unblock_precedence: true,
        }
    }
}

fn default_block_keywords() -> Vec<String> {
    vec!["блокування".to_string(), "обмеження доступу".to_string()]
}

fn default_unblock_keywords() -> Vec<String> {
    vec![
        "розблокування".to_string(),
        "припинення тимчасового".to_string(),
    ]
}

fn default_true() -> bool {
    true
}
