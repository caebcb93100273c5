//! AgenticTrust — evidence-based trust profiles for AI agents.
//!
//! Computes a multi-dimensional trust profile from heterogeneous
//! evidence records, packages it as a time-limited content-hash-bound
//! credential, evaluates caller-defined policies, and maintains a
//! tamper-evident hash-chained history of every computation.
//!
//! The crate is a synchronous in-process library: no I/O, no network,
//! no key material. Each [`TrustProfile`] is fully isolated and owned
//! by one controller instance.

pub mod credential;
pub mod dimension;
pub mod error;
pub mod evidence;
pub mod hashing;
pub mod policy;
pub mod profile;
pub mod score;
pub mod time;

// Re-export primary types
pub use error::{Result, TrustError};
pub use evidence::{
    ConsentRecord, DecisionTraceSummary, DomainSummaries, EvidenceCategory, EvidenceSource,
    HarmRecord, ReasoningProfile,
};
pub use profile::{ProfileSnapshot, TrustProfile, SNAPSHOT_SCHEMA};

// Re-export scoring types
pub use dimension::{DimensionScore, Trend, TrustDimension};
pub use score::{
    ChainVerification, EntityType, RecordChain, TrustLevel, TrustScoreRecord, GENESIS_HASH,
};

// Re-export credential and policy types
pub use credential::{CredentialVerification, TrustCredential};
pub use policy::{
    DimensionRequirement, PolicyFailure, PolicyReport, RequirementKind, TrustPolicy,
};
