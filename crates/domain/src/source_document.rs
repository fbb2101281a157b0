use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentAction {
    Block,
    Unblock,
}

impl DocumentAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            DocumentAction::Block => "block",
            DocumentAction::Unblock => "unblock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Some(DocumentAction::Block),
            "unblock" => Some(DocumentAction::Unblock),
            _ => None,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, DocumentAction::Block)
    }
}

/// How a document's text is prepared before candidates are pulled out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPreparation {
    /// Untouched text, scanned with the fragment pattern.
    #[default]
    Raw,
    /// Line breaks removed, for lists wrapped across PDF lines.
    JoinLines,
    /// Line breaks turned into spaces, whitespace collapsed and list
    /// numbering detached from URLs.
    Flatten,
    /// One candidate per non-empty line.
    Lines,
}

impl TextPreparation {
    pub fn to_str(&self) -> &'static str {
        match self {
            TextPreparation::Raw => "raw",
            TextPreparation::JoinLines => "join_lines",
            TextPreparation::Flatten => "flatten",
            TextPreparation::Lines => "lines",
        }
    }
}

/// Already-decoded text of one bulletin attachment, notice or article,
/// together with the metadata the directive layer needs.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub effective_time: Option<DateTime<Utc>>,
    pub status: Option<Arc<str>>,
    pub action: Option<DocumentAction>,
    pub preparation: TextPreparation,
    pub text: String,
}

impl SourceDocument {
    pub fn new(id: &str, title: &str, text: impl Into<String>) -> Self {
        Self {
            id: Arc::from(id),
            title: Arc::from(title),
            effective_time: None,
            status: None,
            action: None,
            preparation: TextPreparation::default(),
            text: text.into(),
        }
    }

    pub fn with_effective_time(mut self, at: DateTime<Utc>) -> Self {
        self.effective_time = Some(at);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(Arc::from(status));
        self
    }

    pub fn with_action(mut self, action: DocumentAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_preparation(mut self, preparation: TextPreparation) -> Self {
        self.preparation = preparation;
        self
    }

    /// Documents without a status are treated as published.
    pub fn is_published(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case("published"))
            .unwrap_or(true)
    }
}
