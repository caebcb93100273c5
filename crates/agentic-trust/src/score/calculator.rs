//! Score calculator — assembles one immutable record from current
//! evidence, domain summaries, and prior history.
//!
//! The calculator leaves `hash` and `previous_hash` empty: the chain
//! layer fills them in, since hashing requires the finalized payload.

use std::collections::BTreeMap;

use crate::dimension::{
    confidence_from_evidence, evidence_count_for, score_dimension, trend_from_history,
    DimensionScore, TrustDimension,
};
use crate::evidence::{DomainSummaries, EvidenceSource};
use crate::hashing;

use super::record::{EntityType, RecordChain, TrustLevel, TrustScoreRecord};

/// Default validity window for freshly calculated records.
pub const DEFAULT_VALIDITY_HOURS: i64 = 24;

/// How many prior scores feed the trend comparison.
const TREND_LOOKBACK: usize = 3;

/// Calculate a new trust score record from the current state.
///
/// Evidence is copied verbatim (no mutation, no deduplication); the
/// overall score is the weight-sum of the eight dimension scores; the
/// expiry is `now + validity`.
pub fn calculate_record(
    entity_id: &str,
    entity_type: EntityType,
    evidence: &[EvidenceSource],
    summaries: &DomainSummaries,
    history: &RecordChain,
    validity: chrono::Duration,
) -> TrustScoreRecord {
    let now = crate::time::now_micros();

    let mut dimensions = Vec::with_capacity(TrustDimension::ALL.len());
    let mut overall_score = 0.0;

    for dimension in TrustDimension::ALL {
        let score = score_dimension(dimension, summaries);
        let evidence_count = evidence_count_for(dimension, evidence);
        let prior = prior_scores(history, dimension);

        overall_score += score * dimension.weight();
        dimensions.push(DimensionScore {
            dimension,
            score,
            confidence: confidence_from_evidence(evidence_count),
            evidence_count,
            trend: trend_from_history(score, &prior),
            last_updated: now,
        });
    }

    TrustScoreRecord {
        id: hashing::random_id("trec"),
        entity_id: entity_id.to_string(),
        entity_type,
        overall_score,
        level: TrustLevel::from_score(overall_score),
        dimensions,
        evidence: evidence.to_vec(),
        domain_scores: BTreeMap::new(),
        generated_at: now,
        valid_until: crate::time::expiry_micros(now, validity),
        hash: String::new(),
        previous_hash: String::new(),
    }
}

/// The dimension's scores from the most recent prior records, up to
/// [`TREND_LOOKBACK`] of them.
fn prior_scores(history: &RecordChain, dimension: TrustDimension) -> Vec<f64> {
    history
        .iter()
        .rev()
        .take(TREND_LOOKBACK)
        .filter_map(|r| r.dimension(dimension).map(|d| d.score))
        .collect()
}
