mod blocklist_store;
mod document_source;
mod tld_oracle;

pub use blocklist_store::BlocklistStore;
pub use document_source::DocumentSource;
pub use tld_oracle::TldOracle;
