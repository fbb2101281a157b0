use blockdecree_domain::{CanonicalDomain, RejectionReason, TextPreparation};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

use super::canonicalizer::{candidate_host, DomainCanonicalizer};
use super::homograph::HomographResolver;
use super::text_preparation::prepare;
use super::tokenizer::{FragmentTokenizer, RawCandidate};

/// What one block of source text contributed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// Accepted domains plus their homograph variants, deduplicated.
    pub domains: BTreeSet<CanonicalDomain>,
    pub accepted: usize,
    pub homograph_variants: usize,
    pub rejections: BTreeMap<RejectionReason, usize>,
    pub oversized: bool,
}

impl ExtractionOutcome {
    pub fn rejected(&self) -> usize {
        self.rejections.values().sum()
    }

    fn reject(&mut self, reason: RejectionReason) {
        *self.rejections.entry(reason).or_insert(0) += 1;
    }
}

/// Prepare, size-check, tokenize, canonicalize and expand homographs for a
/// block of source text. Safe to share across threads.
pub struct DomainExtractor {
    tokenizer: FragmentTokenizer,
    canonicalizer: Arc<DomainCanonicalizer>,
    resolver: HomographResolver,
    max_source_bytes: usize,
}

impl DomainExtractor {
    pub fn new(canonicalizer: Arc<DomainCanonicalizer>, max_source_bytes: usize) -> Self {
        Self {
            tokenizer: FragmentTokenizer::new(),
            resolver: HomographResolver::new(Arc::clone(&canonicalizer)),
            canonicalizer,
            max_source_bytes,
        }
    }

    pub fn canonicalizer(&self) -> &Arc<DomainCanonicalizer> {
        &self.canonicalizer
    }

    pub fn extract(
        &self,
        fragment_id: &str,
        preparation: TextPreparation,
        text: &str,
    ) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();

        if text.len() > self.max_source_bytes {
            warn!(
                fragment = %fragment_id,
                bytes = text.len(),
                limit = self.max_source_bytes,
                "Source text too large, skipped"
            );
            outcome.oversized = true;
            return outcome;
        }

        let prepared = prepare(preparation, text);
        let candidates: Box<dyn Iterator<Item = RawCandidate<'_>> + '_> = match preparation {
            TextPreparation::Lines => Box::new(self.tokenizer.line_candidates(fragment_id, &prepared)),
            _ => Box::new(self.tokenizer.candidates(fragment_id, &prepared)),
        };

        for candidate in candidates {
            self.accept(candidate, &mut outcome);
        }

        debug!(
            fragment = %fragment_id,
            accepted = outcome.accepted,
            rejected = outcome.rejected(),
            homographs = outcome.homograph_variants,
            "Fragment extracted"
        );
        outcome
    }

    fn accept(&self, candidate: RawCandidate<'_>, outcome: &mut ExtractionOutcome) {
        let canonical = match self.canonicalizer.canonicalize(candidate.text) {
            Ok(canonical) => canonical,
            Err(reason) => {
                debug!(
                    fragment = %candidate.fragment_id,
                    candidate = %candidate.text,
                    reason = %reason,
                    "Candidate rejected"
                );
                outcome.reject(reason);
                if matches!(
                    reason,
                    RejectionReason::InvalidSyntax | RejectionReason::InvalidTld
                ) {
                    // A look-alike TLD fails the plain checks but may still
                    // have a valid Latin skeleton.
                    let host = candidate_host(
                        candidate.text,
                        &self.canonicalizer.settings().service_subdomains,
                    );
                    self.add_variant(&host, None, outcome);
                }
                return;
            }
        };

        outcome.accepted += 1;
        self.add_variant(&canonical.unicode_host, Some(&canonical.domain), outcome);
        outcome.domains.insert(canonical.domain);
    }

    fn add_variant(
        &self,
        host: &str,
        plain: Option<&CanonicalDomain>,
        outcome: &mut ExtractionOutcome,
    ) {
        if host.is_ascii() {
            return;
        }
        if let Some(variant) = self.resolver.resolve(host, plain) {
            debug!(original = %host, variant = %variant, "Homograph variant added");
            outcome.homograph_variants += 1;
            outcome.domains.insert(variant);
        }
    }
}
