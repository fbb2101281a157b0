//! blockdecree application layer: ports, normalization services and the
//! consolidation use case.
pub mod ports;
pub mod services;
pub mod use_cases;
