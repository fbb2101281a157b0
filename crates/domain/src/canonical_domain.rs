use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// Upper bound on the ASCII form of a domain accepted anywhere in the system.
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// A validated, lower-case ASCII/punycode host name.
///
/// Values are produced by the canonicalizer after syntax and TLD checks have
/// passed, so this type only enforces the cheap representation invariants
/// (ASCII, lower case). It is cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomain(Arc<str>);

impl CanonicalDomain {
    pub fn new(ascii: &str) -> Self {
        Self(Arc::from(ascii.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label after the last dot, without the dot.
    pub fn tld(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_punycode(&self) -> bool {
        self.0.split('.').any(|label| label.starts_with("xn--"))
    }
}

impl<'de> Deserialize<'de> for CanonicalDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

impl Borrow<str> for CanonicalDomain {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
