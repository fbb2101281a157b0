use blockdecree_domain::config::ClassificationConfig;
use blockdecree_domain::DomainError;
use regex::{Regex, RegexBuilder};

/// Decides from a document title whether it orders blocking, lifts a block,
/// or is unrelated.
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    block: Vec<Regex>,
    unblock: Vec<Regex>,
    unblock_precedence: bool,
}

impl TitleClassifier {
    pub fn from_config(config: &ClassificationConfig) -> Result<Self, DomainError> {
        Ok(Self {
            block: compile_all(&config.block_keywords)?,
            unblock: compile_all(&config.unblock_keywords)?,
            unblock_precedence: config.unblock_precedence,
        })
    }

    /// `Some(true)` for block, `Some(false)` for unblock, `None` when no
    /// pattern matches.
    pub fn classify(&self, title: &str) -> Option<bool> {
        let block = self.block.iter().any(|re| re.is_match(title));
        let unblock = self.unblock.iter().any(|re| re.is_match(title));

        match (block, unblock) {
            (true, true) => Some(!self.unblock_precedence),
            (true, false) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, DomainError> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| DomainError::InvalidKeywordPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
        })
        .collect()
}
