//! blockdecree domain layer
pub mod canonical_domain;
pub mod config;
pub mod directive;
pub mod errors;
pub mod rejection;
pub mod source_document;

pub use canonical_domain::{CanonicalDomain, MAX_DOMAIN_LENGTH};
pub use config::{CliOverrides, Config};
pub use directive::{parse_effective_time, Directive, SEED_SOURCE};
pub use errors::DomainError;
pub use rejection::RejectionReason;
pub use source_document::{DocumentAction, SourceDocument, TextPreparation};
