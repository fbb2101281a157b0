pub mod persistence;
pub mod sources;
pub mod tld;
