use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::sync::Arc;

use crate::canonical_domain::CanonicalDomain;
use crate::errors::DomainError;

/// Source label attached to directives read from a persisted blocklist.
pub const SEED_SOURCE: &str = "seed";

/// One timestamped instruction to block or unblock a domain.
///
/// Identity and ordering use `(domain, effective_time, blocked)` only; the
/// `source` label is carried for audit logging. A missing effective time
/// counts as the Unix epoch, so it ties with an explicit epoch instant.
/// On an exact time tie `blocked = false` sorts first, which makes a block
/// win over an unblock published at the same instant.
#[derive(Debug, Clone)]
pub struct Directive {
    pub domain: CanonicalDomain,
    pub blocked: bool,
    pub effective_time: Option<DateTime<Utc>>,
    pub source: Arc<str>,
}

impl Directive {
    pub fn new(
        domain: CanonicalDomain,
        blocked: bool,
        effective_time: Option<DateTime<Utc>>,
        source: Arc<str>,
    ) -> Self {
        Self {
            domain,
            blocked,
            effective_time,
            source,
        }
    }

    pub fn block(domain: CanonicalDomain, at: DateTime<Utc>, source: &str) -> Self {
        Self::new(domain, true, Some(at), Arc::from(source))
    }

    pub fn unblock(domain: CanonicalDomain, at: DateTime<Utc>, source: &str) -> Self {
        Self::new(domain, false, Some(at), Arc::from(source))
    }

    /// A previously persisted domain: blocked, with no effective time.
    pub fn seeded(domain: CanonicalDomain) -> Self {
        Self::new(domain, true, None, Arc::from(SEED_SOURCE))
    }

    /// Effective time used for ordering; undated directives count as the
    /// Unix epoch.
    pub fn effective_or_epoch(&self) -> DateTime<Utc> {
        self.effective_time.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Greatest possible directive for `domain`; every directive for that
    /// domain sorts at or below it.
    pub fn upper_bound(domain: CanonicalDomain) -> Self {
        Self::new(domain, true, Some(DateTime::<Utc>::MAX_UTC), Arc::from(""))
    }

    fn key(&self) -> (&CanonicalDomain, DateTime<Utc>, bool) {
        (&self.domain, self.effective_or_epoch(), self.blocked)
    }
}

impl PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Directive {}

impl PartialOrd for Directive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Directive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let at = self.effective_or_epoch();
        write!(
            f,
            "[{} {} {}]",
            at.to_rfc3339(),
            if self.blocked { "+" } else { "-" },
            self.domain
        )
    }
}

/// Parses bulletin timestamps: RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC), or a bare date (midnight UTC).
pub fn parse_effective_time(s: &str) -> Result<DateTime<Utc>, DomainError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::InvalidEffectiveTime(s.to_string()))
}
