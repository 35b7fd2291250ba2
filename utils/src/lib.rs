//! Shared utilities for the re-issuance protocol.

pub mod logging;
pub mod stats;

pub use logging::{init_logging, init_tracing, LogFormat, LoggingError};
pub use stats::OutcomeCounter;
