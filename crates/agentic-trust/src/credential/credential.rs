//! Credential type and issuance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::DimensionScore;
use crate::hashing;
use crate::score::TrustScoreRecord;

use super::verify::credential_content_payload;

/// A portable trust credential derived from exactly one score record.
///
/// All fields except `verification_hash` are bound by the hash;
/// verification is pure recomputation, no external key material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustCredential {
    pub id: String,
    pub entity_id: String,
    pub overall_score: f64,
    pub level: crate::score::TrustLevel,
    pub dimensions: Vec<DimensionScore>,
    pub domain_scores: BTreeMap<String, f64>,
    /// Unix epoch microseconds.
    pub generated_at: u64,
    /// Credential expiry — independent of the source record's own expiry.
    pub valid_until: u64,
    pub issuer: String,
    /// Content hash over all other fields.
    pub verification_hash: String,
}

/// Issue a credential from a score record.
///
/// Copies score, level, dimension scores, and domain scores from the
/// source record; assigns a fresh id and an expiry from the credential's
/// own validity window (which may be negative).
pub fn issue_credential(
    record: &TrustScoreRecord,
    issuer: &str,
    validity: chrono::Duration,
) -> TrustCredential {
    let now = crate::time::now_micros();

    let mut credential = TrustCredential {
        id: hashing::random_id("tcred"),
        entity_id: record.entity_id.clone(),
        overall_score: record.overall_score,
        level: record.level,
        dimensions: record.dimensions.clone(),
        domain_scores: record.domain_scores.clone(),
        generated_at: now,
        valid_until: crate::time::expiry_micros(now, validity),
        issuer: issuer.to_string(),
        verification_hash: String::new(),
    };
    credential.verification_hash = hashing::sha256_hex(&credential_content_payload(&credential));
    credential
}
