//! Hash chain — binding each record to its predecessor.
//!
//! Each record's hash commits to its own canonical payload and to the
//! previous record's hash, so the full history can be audited for
//! tampering or reordering. The canonical payload is order-independent:
//! dimension and evidence entries are sorted by a stable lexical key
//! before concatenation, so insertion order never affects the digest.

use crate::hashing;

use super::record::TrustScoreRecord;

/// Chain-link sentinel for the first record. Deliberately not a valid
/// digest output (wrong length, not hex), so it can never collide with a
/// real hash.
pub const GENESIS_HASH: &str = "genesis";

/// Result of walking a record chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainVerification {
    /// Did every link and every stored hash check out?
    pub valid: bool,
    /// Records examined, including a failing one. Lets callers tell a
    /// valid empty history apart from a valid long one.
    pub records_checked: usize,
}

/// Deterministic, order-independent serialization of a record's content
/// fields (everything except `hash` and `previous_hash`).
pub fn canonical_payload(record: &TrustScoreRecord) -> String {
    let mut dimension_parts: Vec<String> = record
        .dimensions
        .iter()
        .map(|d| {
            format!(
                "{}:{}:{}:{}:{}:{}",
                d.dimension.as_tag(),
                d.score,
                d.confidence,
                d.evidence_count,
                d.trend.as_tag(),
                d.last_updated,
            )
        })
        .collect();
    dimension_parts.sort();

    let mut evidence_parts: Vec<String> = record
        .evidence
        .iter()
        .map(|e| {
            format!(
                "{}:{}:{}:{}",
                e.category.as_tag(),
                e.source_id,
                e.timestamp,
                e.weight,
            )
        })
        .collect();
    evidence_parts.sort();

    // BTreeMap iteration is already key-sorted.
    let domain_parts: Vec<String> = record
        .domain_scores
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();

    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        record.id,
        record.entity_id,
        record.entity_type.as_tag(),
        record.overall_score,
        record.level.as_tag(),
        dimension_parts.join(","),
        evidence_parts.join(","),
        domain_parts.join(","),
        record.generated_at,
        record.valid_until,
    )
}

/// Compute a record's hash: digest of the chain link plus the canonical
/// payload. The record's `previous_hash` must already be set.
pub fn compute_record_hash(record: &TrustScoreRecord) -> String {
    hashing::sha256_hex(&format!(
        "{}:{}",
        record.previous_hash,
        canonical_payload(record)
    ))
}

/// Verify a full history, ordered oldest to newest.
///
/// Previous-hash pointers must form an unbroken chain from the genesis
/// sentinel, and every stored hash must equal the recomputed digest. Any
/// single mismatch invalidates the whole chain.
pub fn verify_record_chain(records: &[TrustScoreRecord]) -> ChainVerification {
    let mut expected_previous = GENESIS_HASH.to_string();

    for (index, record) in records.iter().enumerate() {
        let checked = index + 1;
        if record.previous_hash != expected_previous {
            return ChainVerification {
                valid: false,
                records_checked: checked,
            };
        }
        if compute_record_hash(record) != record.hash {
            return ChainVerification {
                valid: false,
                records_checked: checked,
            };
        }
        expected_previous = record.hash.clone();
    }

    ChainVerification {
        valid: true,
        records_checked: records.len(),
    }
}
