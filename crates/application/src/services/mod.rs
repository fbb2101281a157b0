pub mod canonicalizer;
pub mod directive_store;
pub mod extraction;
pub mod homograph;
pub mod text_preparation;
pub mod title_classifier;
pub mod tokenizer;
pub mod validation_cache;

pub use canonicalizer::{Canonicalized, CanonicalizerSettings, DomainCanonicalizer};
pub use directive_store::DirectiveStore;
pub use extraction::{DomainExtractor, ExtractionOutcome};
pub use homograph::HomographResolver;
pub use text_preparation::prepare;
pub use title_classifier::TitleClassifier;
pub use tokenizer::{FragmentTokenizer, RawCandidate};
pub use validation_cache::ValidationCache;
