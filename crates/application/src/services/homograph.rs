use blockdecree_domain::CanonicalDomain;
use std::sync::Arc;
use tracing::debug;

use super::canonicalizer::{is_ip_literal, to_ascii, DomainCanonicalizer};

/// Produces the Latin look-alike of a domain written with confusable
/// characters, so that both spellings end up blocked.
pub struct HomographResolver {
    canonicalizer: Arc<DomainCanonicalizer>,
}

impl HomographResolver {
    pub fn new(canonicalizer: Arc<DomainCanonicalizer>) -> Self {
        Self { canonicalizer }
    }

    /// `original` is the lower-cased host before ASCII conversion and
    /// `plain` the domain it canonicalized to, if it was accepted at all.
    /// Returns `None` for ASCII input or when the skeleton is invalid or
    /// equal to `plain`.
    pub fn resolve(
        &self,
        original: &str,
        plain: Option<&CanonicalDomain>,
    ) -> Option<CanonicalDomain> {
        if original.is_ascii() {
            return None;
        }

        let skeleton = self
            .canonicalizer
            .cache()
            .skeleton_or_insert_with(original, || skeleton_of(original));

        let settings = self.canonicalizer.settings();
        let ascii = to_ascii(&skeleton, settings.max_domain_length).ok()?;

        if plain.is_some_and(|plain| plain.as_str() == ascii)
            || is_ip_literal(&ascii)
            || self.canonicalizer.is_excluded_source(&ascii)
        {
            return None;
        }

        if let Err(reason) = self.canonicalizer.validate_ascii(&ascii) {
            debug!(original = %original, skeleton = %skeleton, reason = %reason, "Homograph variant rejected");
            return None;
        }

        Some(CanonicalDomain::new(&ascii))
    }
}

/// UTS #39 confusable skeleton.
pub fn skeleton_of(s: &str) -> String {
    unicode_security::skeleton(s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_of_cyrillic_lookalike() {
        assert_eq!(skeleton_of("аре.ua"), "ape.ua");
    }

    #[test]
    fn test_skeleton_of_plain_ascii_prototypes_is_identity() {
        assert_eq!(skeleton_of("ape.ua"), "ape.ua");
    }
}
