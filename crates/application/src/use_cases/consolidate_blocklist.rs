use blockdecree_domain::{CanonicalDomain, Directive, DomainError, RejectionReason, SourceDocument};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{BlocklistStore, DocumentSource};
use crate::services::{DirectiveStore, DomainExtractor, ExtractionOutcome, TitleClassifier};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConsolidationReport {
    pub documents_total: usize,
    pub documents_processed: usize,
    pub documents_skipped: usize,
    pub oversized_documents: usize,
    pub seeded: usize,
    pub seed_rejected: usize,
    pub candidates_accepted: usize,
    pub homograph_variants: usize,
    pub rejections: BTreeMap<RejectionReason, usize>,
    pub new_directives: usize,
    pub blocked_total: usize,
    pub written: bool,
}

impl ConsolidationReport {
    pub fn rejected_total(&self) -> usize {
        self.rejections.values().sum()
    }

    fn absorb(&mut self, outcome: &ExtractionOutcome) {
        self.candidates_accepted += outcome.accepted;
        self.homograph_variants += outcome.homograph_variants;
        if outcome.oversized {
            self.oversized_documents += 1;
        }
        for (reason, count) in &outcome.rejections {
            *self.rejections.entry(*reason).or_insert(0) += count;
        }
    }
}

/// A document that passed the status and relevance checks.
struct Job {
    document: SourceDocument,
    blocked: bool,
}

/// Use case: fold the persisted blocklist and every published decision into
/// one resolved list and persist it.
pub struct ConsolidateBlocklistUseCase {
    store: Arc<dyn BlocklistStore>,
    documents: Arc<dyn DocumentSource>,
    extractor: Arc<DomainExtractor>,
    classifier: TitleClassifier,
}

impl ConsolidateBlocklistUseCase {
    pub fn new(
        store: Arc<dyn BlocklistStore>,
        documents: Arc<dyn DocumentSource>,
        extractor: Arc<DomainExtractor>,
        classifier: TitleClassifier,
    ) -> Self {
        Self {
            store,
            documents,
            extractor,
            classifier,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, dry_run: bool) -> Result<ConsolidationReport, DomainError> {
        let mut report = ConsolidationReport::default();
        let directives = Arc::new(DirectiveStore::new());

        let (seeds, rejected) = self.canonical_seed().await?;
        report.seed_rejected = rejected;
        report.seeded = directives.seed(seeds);
        info!(seeded = report.seeded, rejected, "Seed blocklist loaded");

        let documents = self.documents.load_documents().await?;
        report.documents_total = documents.len();

        let jobs: Vec<Job> = documents
            .into_iter()
            .filter_map(|document| self.classify(document))
            .collect();
        report.documents_processed = jobs.len();
        report.documents_skipped = report.documents_total - jobs.len();

        let extractor = Arc::clone(&self.extractor);
        let sink = Arc::clone(&directives);
        let outcomes = tokio::task::spawn_blocking(move || {
            jobs.into_par_iter()
                .map(|job| apply(&extractor, &sink, job))
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| DomainError::ExtractionTaskFailed(e.to_string()))?;

        for (outcome, added) in &outcomes {
            report.absorb(outcome);
            report.new_directives += added;
        }

        let resolved = directives.resolved();
        report.blocked_total = resolved.len();

        if dry_run {
            info!(blocked = resolved.len(), "Dry run, blocklist not written");
        } else {
            self.store.store(&resolved).await?;
            report.written = true;
        }

        info!(
            documents = report.documents_processed,
            skipped = report.documents_skipped,
            accepted = report.candidates_accepted,
            rejected = report.rejected_total(),
            homographs = report.homograph_variants,
            new_directives = report.new_directives,
            blocked = report.blocked_total,
            "Blocklist consolidated"
        );

        Ok(report)
    }

    /// Seed lines go through the canonicalizer like any other candidate, so
    /// an IP literal or the source domain in an old list is dropped.
    async fn canonical_seed(&self) -> Result<(Vec<CanonicalDomain>, usize), DomainError> {
        let lines = self.store.load_seed().await?;
        let canonicalizer = self.extractor.canonicalizer();

        let mut domains = Vec::with_capacity(lines.len());
        let mut rejected = 0;
        for line in &lines {
            match canonicalizer.canonicalize(line) {
                Ok(canonical) => domains.push(canonical.domain),
                Err(reason) => {
                    warn!(line = %line, reason = %reason, "Seed entry rejected");
                    rejected += 1;
                }
            }
        }
        Ok((domains, rejected))
    }

    fn classify(&self, document: SourceDocument) -> Option<Job> {
        if !document.is_published() {
            warn!(
                document = %document.id,
                status = document.status.as_deref().unwrap_or_default(),
                "Document not published, skipped"
            );
            return None;
        }

        let blocked = document
            .action
            .map(|action| action.is_block())
            .or_else(|| self.classifier.classify(&document.title));

        match blocked {
            Some(blocked) => Some(Job { document, blocked }),
            None => {
                debug!(document = %document.id, title = %document.title, "Unrelated document skipped");
                None
            }
        }
    }
}

fn apply(extractor: &DomainExtractor, store: &DirectiveStore, job: Job) -> (ExtractionOutcome, usize) {
    let Job { document, blocked } = job;
    let outcome = extractor.extract(&document.id, document.preparation, &document.text);

    let added = outcome
        .domains
        .iter()
        .filter(|domain| {
            store.add(Directive::new(
                (*domain).clone(),
                blocked,
                document.effective_time,
                Arc::clone(&document.id),
            ))
        })
        .count();

    debug!(document = %document.id, blocked, added, "Directives applied");
    (outcome, added)
}
