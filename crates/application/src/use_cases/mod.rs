pub mod consolidate_blocklist;

pub use consolidate_blocklist::{ConsolidateBlocklistUseCase, ConsolidationReport};
