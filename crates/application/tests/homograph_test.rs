use blockdecree_application::services::{DomainExtractor, HomographResolver};
use blockdecree_domain::{CanonicalDomain, RejectionReason, TextPreparation};
use std::sync::Arc;

mod helpers;
use helpers::canonicalizer;

// "аре" below is Cyrillic а, р, е.
const LOOKALIKE: &str = "аре.ua";
// Same name with the last letter of the TLD also Cyrillic.
const LOOKALIKE_TLD: &str = "аре.uа";

#[test]
fn test_cyrillic_lookalike_resolves_to_latin() {
    let c = canonicalizer(None);
    let plain = c.canonicalize(LOOKALIKE).unwrap();
    assert!(plain.domain.is_punycode());

    let resolver = HomographResolver::new(Arc::clone(&c));
    let variant = resolver.resolve(&plain.unicode_host, Some(&plain.domain));

    assert_eq!(variant, Some(CanonicalDomain::new("ape.ua")));
}

#[test]
fn test_ascii_input_has_no_variant() {
    let resolver = HomographResolver::new(canonicalizer(None));
    assert_eq!(
        resolver.resolve("ape.ua", Some(&CanonicalDomain::new("ape.ua"))),
        None
    );
}

#[test]
fn test_variant_with_unknown_tld_is_dropped() {
    let resolver = HomographResolver::new(canonicalizer(None));
    // skeleton "ape.ya"; "ya" is not a known TLD
    assert_eq!(
        resolver.resolve("аре.уа", None),
        None
    );
}

#[test]
fn test_variant_equal_to_source_domain_is_dropped() {
    let c = canonicalizer(Some("ape.ua"));
    let plain = c.canonicalize(LOOKALIKE).unwrap();
    let resolver = HomographResolver::new(c);
    assert_eq!(resolver.resolve(&plain.unicode_host, Some(&plain.domain)), None);
}

#[test]
fn test_skeleton_is_memoized_per_input() {
    let c = canonicalizer(None);
    let plain = c.canonicalize(LOOKALIKE).unwrap();
    let resolver = HomographResolver::new(Arc::clone(&c));

    resolver.resolve(&plain.unicode_host, Some(&plain.domain));
    resolver.resolve(&plain.unicode_host, Some(&plain.domain));

    assert_eq!(c.cache().skeleton_entries(), 1);
}

#[test]
fn test_extractor_emits_both_spellings() {
    let extractor = DomainExtractor::new(canonicalizer(None), 1_000);
    let outcome = extractor.extract("doc", TextPreparation::Raw, "Заблокувати аре.ua негайно");

    let domains: Vec<&str> = outcome.domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(outcome.accepted, 1);
    assert_eq!(outcome.homograph_variants, 1);
    assert_eq!(domains.len(), 2);
    assert!(domains.contains(&"ape.ua"));
    assert!(domains.iter().any(|d| d.starts_with("xn--")));
}

#[test]
fn test_resolves_without_an_accepted_plain_form() {
    let c = canonicalizer(None);
    assert!(c.canonicalize(LOOKALIKE_TLD).is_err());

    let resolver = HomographResolver::new(c);
    assert_eq!(
        resolver.resolve(LOOKALIKE_TLD, None),
        Some(CanonicalDomain::new("ape.ua"))
    );
}

#[test]
fn test_extractor_keeps_variant_of_rejected_lookalike_tld() {
    let extractor = DomainExtractor::new(canonicalizer(None), 1_000);
    let outcome = extractor.extract("doc", TextPreparation::Lines, LOOKALIKE_TLD);

    let domains: Vec<&str> = outcome.domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(domains, vec!["ape.ua"]);
    assert_eq!(outcome.accepted, 0);
    assert_eq!(outcome.homograph_variants, 1);
    assert_eq!(outcome.rejections.get(&RejectionReason::InvalidTld), Some(&1));
}

#[test]
fn test_rejected_ascii_candidate_gets_no_variant() {
    let extractor = DomainExtractor::new(canonicalizer(None), 1_000);
    let outcome = extractor.extract("doc", TextPreparation::Lines, "ape.zz");

    assert!(outcome.domains.is_empty());
    assert_eq!(outcome.homograph_variants, 0);
    assert_eq!(outcome.rejections.get(&RejectionReason::InvalidTld), Some(&1));
}
