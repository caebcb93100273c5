//! Trust score records — levels, the calculator, and the hash chain.

pub mod calculator;
pub mod chain;
pub mod record;

pub use calculator::{calculate_record, DEFAULT_VALIDITY_HOURS};
pub use chain::{
    canonical_payload, compute_record_hash, verify_record_chain, ChainVerification, GENESIS_HASH,
};
pub use record::{EntityType, RecordChain, TrustLevel, TrustScoreRecord};
