use blockdecree_domain::config::NormalizationConfig;
use blockdecree_domain::{CanonicalDomain, RejectionReason, MAX_DOMAIN_LENGTH};
use std::net::{IpAddr, Ipv6Addr};
use std::sync::Arc;

use super::validation_cache::ValidationCache;
use crate::ports::TldOracle;

const SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

#[derive(Debug, Clone)]
pub struct CanonicalizerSettings {
    pub service_subdomains: Vec<String>,
    pub source_domain: Option<String>,
    pub max_domain_length: usize,
}

impl Default for CanonicalizerSettings {
    fn default() -> Self {
        Self::from(&NormalizationConfig::default())
    }
}

impl From<&NormalizationConfig> for CanonicalizerSettings {
    fn from(cfg: &NormalizationConfig) -> Self {
        Self {
            service_subdomains: cfg.normalized_service_subdomains(),
            source_domain: cfg
                .source_domain
                .as_deref()
                .map(clean)
                .filter(|s| !s.is_empty()),
            max_domain_length: cfg.max_domain_length,
        }
    }
}

/// Accepted candidate: the canonical ASCII domain plus the lower-cased host
/// it was derived from, which the homograph resolver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalized {
    pub domain: CanonicalDomain,
    pub unicode_host: String,
}

impl Canonicalized {
    pub fn has_non_ascii(&self) -> bool {
        !self.unicode_host.is_ascii()
    }
}

/// Turns one raw candidate into a canonical domain or a rejection reason.
///
/// The steps run in a fixed order and the first failing one decides the
/// reason:
///
/// 1. [`clean`]: trim, drop one scheme prefix, drop whitespace, lower-case
/// 2. [`strip_service_label`]: drop one leading `www.`-style label
/// 3. [`host_part`]: cut at the first `/`, `:` or `?`
/// 4. `empty` / `too_long`
/// 5. `is_excluded_source`
/// 6. [`to_ascii`]: UTS #46 to punycode, `idn_conversion_failed`
/// 7. `is_ip_literal`
/// 8. oracle syntax check (`invalid_syntax`) then memoized TLD check
///    (`invalid_tld`)
pub struct DomainCanonicalizer {
    settings: CanonicalizerSettings,
    oracle: Arc<dyn TldOracle>,
    cache: Arc<ValidationCache>,
}

impl DomainCanonicalizer {
    pub fn new(
        settings: CanonicalizerSettings,
        oracle: Arc<dyn TldOracle>,
        cache: Arc<ValidationCache>,
    ) -> Self {
        Self {
            settings,
            oracle,
            cache,
        }
    }

    pub fn settings(&self) -> &CanonicalizerSettings {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<ValidationCache> {
        &self.cache
    }

    pub fn canonicalize(&self, raw: &str) -> Result<Canonicalized, RejectionReason> {
        let cleaned = clean(raw);
        let stripped = strip_service_label(&cleaned, &self.settings.service_subdomains);

        if is_ipv6_host(stripped) {
            return Err(RejectionReason::IsIpLiteral);
        }

        let host = host_part(stripped);
        self.check_length(host)?;

        if self.is_excluded_source(host) {
            return Err(RejectionReason::IsExcludedSource);
        }

        let ascii = to_ascii(host, self.settings.max_domain_length)?;

        if is_ip_literal(&ascii) {
            return Err(RejectionReason::IsIpLiteral);
        }

        self.validate_ascii(&ascii)?;

        Ok(Canonicalized {
            domain: CanonicalDomain::new(&ascii),
            unicode_host: host.to_string(),
        })
    }

    /// Syntax check followed by the memoized TLD lookup.
    pub fn validate_ascii(&self, ascii: &str) -> Result<(), RejectionReason> {
        if !self.oracle.is_valid_domain(ascii) {
            return Err(RejectionReason::InvalidSyntax);
        }
        let tld = match ascii.rfind('.') {
            Some(dot) if dot + 1 < ascii.len() => &ascii[dot + 1..],
            _ => return Err(RejectionReason::InvalidTld),
        };
        let known = self
            .cache
            .tld_valid_or_insert_with(tld, || self.oracle.is_known_tld(tld));
        if known {
            Ok(())
        } else {
            Err(RejectionReason::InvalidTld)
        }
    }

    pub fn is_excluded_source(&self, host: &str) -> bool {
        self.settings.source_domain.as_deref() == Some(host)
    }

    fn check_length(&self, host: &str) -> Result<(), RejectionReason> {
        if host.is_empty() {
            Err(RejectionReason::Empty)
        } else if host.len() > self.settings.max_domain_length {
            Err(RejectionReason::TooLong)
        } else {
            Ok(())
        }
    }
}

/// Step 1: trim, remove one leading scheme (case-insensitive), remove all
/// whitespace, lower-case.
pub fn clean(raw: &str) -> String {
    let mut text = raw.trim();
    for scheme in SCHEMES {
        let matches = text
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme));
        if matches {
            text = &text[scheme.len()..];
            break;
        }
    }
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Step 2: strips the first matching service label, whatever remains.
/// `www.ua` becomes `ua` and fails the syntax check later.
pub fn strip_service_label<'a>(text: &'a str, labels: &[String]) -> &'a str {
    labels
        .iter()
        .find_map(|label| {
            text.strip_prefix(label.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
        })
        .unwrap_or(text)
}

/// Steps 1 to 3 without any check: the lower-cased host a raw candidate
/// names.
pub fn candidate_host(raw: &str, labels: &[String]) -> String {
    host_part(strip_service_label(&clean(raw), labels)).to_string()
}

/// Step 3: the host portion of a cleaned candidate. A trailing root dot is
/// dropped.
pub fn host_part(text: &str) -> &str {
    let end = text.find(['/', ':', '?']).unwrap_or(text.len());
    text[..end].trim_end_matches('.')
}

/// Step 6: UTS #46 ToASCII with the length bound re-checked on the result.
pub fn to_ascii(host: &str, max_len: usize) -> Result<String, RejectionReason> {
    let ascii = idna::domain_to_ascii(host).map_err(|_| RejectionReason::IdnConversionFailed)?;
    if ascii.is_empty() || ascii.len() > max_len.min(MAX_DOMAIN_LENGTH) {
        return Err(RejectionReason::IdnConversionFailed);
    }
    Ok(ascii.to_ascii_lowercase())
}

/// Step 7: IPv4 or IPv6 literal, bracketed or not.
pub fn is_ip_literal(s: &str) -> bool {
    let s = s.trim_start_matches('[').trim_end_matches(']');
    s.parse::<IpAddr>().is_ok()
}

/// IPv6 literals have to be caught before step 3 cuts at the first `:`.
fn is_ipv6_host(text: &str) -> bool {
    if let Some(inner) = text.strip_prefix('[') {
        let end = inner.find(']').unwrap_or(inner.len());
        return inner[..end].parse::<Ipv6Addr>().is_ok();
    }
    let end = text.find(['/', '?']).unwrap_or(text.len());
    text[..end].parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["www".to_string(), "m".to_string(), "mail".to_string()]
    }

    #[test]
    fn test_clean_strips_scheme_whitespace_and_case() {
        assert_eq!(clean("  HTTPS://Www.Exa mple.UA/Path "), "www.example.ua/path");
        assert_eq!(clean("ftp://files.example.ua"), "files.example.ua");
        assert_eq!(clean("http://https://x.ua"), "https://x.ua");
    }

    #[test]
    fn test_clean_handles_short_and_unicode_input() {
        assert_eq!(clean("ht"), "ht");
        assert_eq!(clean("ПРИМЕР.УКР"), "пример.укр");
    }

    #[test]
    fn test_strip_service_label_only_one() {
        assert_eq!(strip_service_label("www.m.example.ua", &labels()), "m.example.ua");
        assert_eq!(strip_service_label("mail.example.ua/x", &labels()), "example.ua/x");
        assert_eq!(strip_service_label("wwwexample.ua", &labels()), "wwwexample.ua");
    }

    #[test]
    fn test_strip_service_label_leaves_single_label_remainder() {
        assert_eq!(strip_service_label("www.ua", &labels()), "ua");
        assert_eq!(strip_service_label("m.ua/path.html", &labels()), "ua/path.html");
    }

    #[test]
    fn test_candidate_host() {
        assert_eq!(candidate_host(" HTTP://WWW.Аре.UА/x ", &labels()), "аре.uа");
        assert_eq!(candidate_host("mail.example.ua:25", &labels()), "example.ua");
    }

    #[test]
    fn test_host_part() {
        assert_eq!(host_part("example.ua/path"), "example.ua");
        assert_eq!(host_part("example.ua:8080"), "example.ua");
        assert_eq!(host_part("example.ua?q=1"), "example.ua");
        assert_eq!(host_part("example.ua."), "example.ua");
        assert_eq!(host_part("/path"), "");
    }

    #[test]
    fn test_to_ascii_punycode() {
        assert_eq!(to_ascii("пример.укр", 255).unwrap(), "xn--e1afmkfd.xn--j1amh");
        assert_eq!(to_ascii("example.ua", 255).unwrap(), "example.ua");
    }

    #[test]
    fn test_to_ascii_length_bound() {
        let long = format!("{}.ua", "a".repeat(60));
        assert_eq!(to_ascii(&long, 20), Err(RejectionReason::IdnConversionFailed));
    }

    #[test]
    fn test_ip_literals() {
        assert!(is_ip_literal("192.0.2.1"));
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("[2001:db8::1]"));
        assert!(!is_ip_literal("example.ua"));
        assert!(!is_ip_literal("1.2.3"));
    }

    #[test]
    fn test_ipv6_host_detection() {
        assert!(is_ipv6_host("::1"));
        assert!(is_ipv6_host("[::1]:8080/x"));
        assert!(!is_ipv6_host("example.ua:443"));
    }
}
