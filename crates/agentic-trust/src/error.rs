//! Error types for the trust profile engine.
//!
//! Nearly every operation in this crate is total: missing evidence
//! domains fall back to neutral defaults, denominators are floored,
//! and verification functions return `false` rather than erroring.
//! The only fallible surface is snapshot serialization.

/// Trust engine error types.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error("Snapshot schema mismatch: expected {expected}, found {found}")]
    SchemaMismatch { expected: String, found: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, TrustError>;
