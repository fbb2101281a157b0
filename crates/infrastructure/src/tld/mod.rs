pub mod psl_oracle;

pub use psl_oracle::PslTldOracle;
