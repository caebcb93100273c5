//! Trust dimensions — the eight fixed facets of trustworthiness.

pub mod scoring;
pub mod types;

pub use scoring::{
    confidence_from_evidence, evidence_count_for, score_dimension, trend_from_history,
    NEUTRAL_SCORE, TREND_THRESHOLD,
};
pub use types::{DimensionScore, Trend, TrustDimension};
