//! Credential verification — recompute-and-compare, plus expiry.
//!
//! Tamper-evidence and expiry are orthogonal checks: an expired
//! credential may still hash-verify, and acceptance requires both.

use super::credential::TrustCredential;

/// Result of checking a credential.
#[derive(Debug, Clone)]
pub struct CredentialVerification {
    /// Does the stored hash match the recomputed content hash?
    pub hash_valid: bool,
    /// Is the credential within its validity window?
    pub not_expired: bool,
    /// Overall acceptance.
    pub is_valid: bool,
    /// Verification timestamp.
    pub verified_at: u64,
}

/// Canonical serialization of a credential's content fields (everything
/// except `verification_hash`). Same ordering discipline as the record
/// payload: sorted dimension entries, key-sorted domain scores.
pub(super) fn credential_content_payload(credential: &TrustCredential) -> String {
    let mut dimension_parts: Vec<String> = credential
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

    let domain_parts: Vec<String> = credential
        .domain_scores
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();

    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}",
        credential.id,
        credential.entity_id,
        credential.overall_score,
        credential.level.as_tag(),
        dimension_parts.join(","),
        domain_parts.join(","),
        credential.generated_at,
        credential.valid_until,
        credential.issuer,
    )
}

/// Verify a credential's content hash. Never errors; any altered field
/// yields `false`.
pub fn verify_credential(credential: &TrustCredential) -> bool {
    crate::hashing::sha256_hex(&credential_content_payload(credential))
        == credential.verification_hash
}

/// Has the credential's validity window elapsed?
pub fn is_expired(credential: &TrustCredential) -> bool {
    crate::time::now_micros() > credential.valid_until
}

/// Combined hash and expiry check.
pub fn check_credential(credential: &TrustCredential) -> CredentialVerification {
    let hash_valid = verify_credential(credential);
    let not_expired = !is_expired(credential);
    CredentialVerification {
        hash_valid,
        not_expired,
        is_valid: hash_valid && not_expired,
        verified_at: crate::time::now_micros(),
    }
}
