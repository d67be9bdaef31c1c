//! # Error Types — Structured Error Hierarchy Root
//!
//! The foundational error type shared across the workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Domain crates define their own error families (period bookkeeping,
//! transition refusals, membership conflicts) close to the code that
//! raises them; this enum covers only the concerns `kayfabe-core`
//! itself owns.

use thiserror::Error;

/// Foundational errors for the roster engine.
#[derive(Error, Debug)]
pub enum KayfabeError {
    /// Timestamp parsing or construction failure.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
