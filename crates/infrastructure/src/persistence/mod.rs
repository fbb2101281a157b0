pub mod file_blocklist_store;

pub use file_blocklist_store::FileBlocklistStore;
