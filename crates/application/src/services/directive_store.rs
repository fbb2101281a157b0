use blockdecree_domain::{CanonicalDomain, Directive};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Ordered, thread-safe set of directives.
///
/// The state of a domain is the `blocked` flag of its greatest directive
/// under [`Directive`]'s ordering, so the result does not depend on the order
/// in which directives were added.
#[derive(Default)]
pub struct DirectiveStore {
    directives: Mutex<BTreeSet<Directive>>,
}

impl DirectiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no equal directive was present.
    pub fn add(&self, directive: Directive) -> bool {
        self.directives
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(directive)
    }

    /// Adds a blocked, undated directive per domain; returns how many were new.
    pub fn seed<I>(&self, domains: I) -> usize
    where
        I: IntoIterator<Item = CanonicalDomain>,
    {
        let mut set = self.directives.lock().unwrap_or_else(|e| e.into_inner());
        domains
            .into_iter()
            .filter(|domain| set.insert(Directive::seeded(domain.clone())))
            .count()
    }

    /// Every domain whose final state is blocked, sorted.
    pub fn resolved(&self) -> BTreeSet<String> {
        let set = self.directives.lock().unwrap_or_else(|e| e.into_inner());
        let mut blocked = BTreeSet::new();
        let mut iter = set.iter().peekable();
        while let Some(directive) = iter.next() {
            let is_last_for_domain = iter
                .peek()
                .is_none_or(|next| next.domain != directive.domain);
            if is_last_for_domain && directive.blocked {
                blocked.insert(directive.domain.as_str().to_string());
            }
        }
        blocked
    }

    /// The directive currently deciding `domain`.
    pub fn state_of(&self, domain: &str) -> Option<Directive> {
        let domain = CanonicalDomain::new(domain);
        let bound = Directive::upper_bound(domain.clone());
        let set = self.directives.lock().unwrap_or_else(|e| e.into_inner());
        set.range(..=bound)
            .next_back()
            .filter(|d| d.domain == domain)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.directives
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
