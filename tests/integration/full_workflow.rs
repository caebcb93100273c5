//! Integration test: full end-to-end workflow.
//!
//! Tests the complete lifecycle:
//! 1. Accumulate evidence and domain summaries
//! 2. Calculate trust score records
//! 3. Verify the hash-chained history
//! 4. Issue and verify a credential
//! 5. Evaluate a policy
//! 6. Serialize, restore, and continue the profile

use agentic_trust::credential::{check_credential, is_expired, verify_credential};
use agentic_trust::policy::{RequirementKind, TrustPolicy};
use agentic_trust::{
    ConsentRecord, DecisionTraceSummary, EntityType, EvidenceCategory, EvidenceSource, HarmRecord,
    ReasoningProfile, Trend, TrustDimension, TrustLevel, TrustProfile,
};

#[test]
fn full_workflow_evidence_to_snapshot() {
    // ── Step 1: Accumulate evidence and summaries ───────────────────────
    let mut profile = TrustProfile::new("agent-alpha", EntityType::Agent);

    for i in 0..8 {
        profile.add_evidence(EvidenceSource::new(
            EvidenceCategory::DecisionTrace,
            format!("trace-batch-{i}"),
            0.9,
        ));
    }
    profile.add_evidence(EvidenceSource::new(
        EvidenceCategory::ExternalAttestation,
        "auditor-acme",
        1.0,
    ));

    profile.set_trace_summary(DecisionTraceSummary {
        total_traces: 10,
        verification_failures: 1,
        assumption_ratio: 0.5,
        alternatives_considered_avg: 2.0,
    });
    profile.set_reasoning_profile(ReasoningProfile {
        calibration: 0.9,
        bias_count: 0,
        growth_trajectory: 0.0,
        consistency: 0.8,
    });
    profile.set_consent_record(ConsentRecord {
        total_actions: 100,
        violations: 5,
        scope_creep_detected: false,
    });
    profile.set_harm_record(HarmRecord {
        total_incidents: 0,
        max_severity: 0.0,
        remediation_rate: 1.0,
    });

    // ── Step 2: Calculate ───────────────────────────────────────────────
    let record = profile.calculate().clone();

    assert!(record.id.starts_with("trec_"));
    assert_eq!(record.dimensions.len(), 8);
    for entry in &record.dimensions {
        assert!((0.0..=1.0).contains(&entry.score));
        assert!((0.0..=1.0).contains(&entry.confidence));
    }

    let accuracy = record.dimension(TrustDimension::Accuracy).unwrap();
    assert!((accuracy.score - 0.9).abs() < 1e-9);
    let consent = record.dimension(TrustDimension::ConsentCompliance).unwrap();
    assert!((consent.score - 0.965).abs() < 1e-9);
    let harm = record.dimension(TrustDimension::HarmRecord).unwrap();
    assert_eq!(harm.score, 1.0);

    let expected_overall: f64 = record
        .dimensions
        .iter()
        .map(|d| d.score * d.dimension.weight())
        .sum();
    assert!((record.overall_score - expected_overall).abs() < 1e-9);
    assert_eq!(record.level, TrustLevel::from_score(record.overall_score));

    // ── Step 3: Chain more records and verify history ───────────────────
    let second = profile.recalculate().clone();
    assert_eq!(second.previous_hash, record.hash);
    for (a, b) in record.dimensions.iter().zip(&second.dimensions) {
        assert_eq!(a.score, b.score, "unchanged profile must rescore equally");
        assert_eq!(b.trend, Trend::Stable);
    }

    let verification = profile.verify_history();
    assert!(verification.valid);
    assert_eq!(verification.records_checked, 2);

    // ── Step 4: Credential issue and verify ─────────────────────────────
    let credential = profile.generate_credential("verifier-hub", chrono::Duration::hours(12));
    assert!(credential.id.starts_with("tcred_"));
    assert_eq!(credential.entity_id, "agent-alpha");
    assert!(verify_credential(&credential));
    assert!(!is_expired(&credential));
    assert!(check_credential(&credential).is_valid);

    let mut tampered = credential.clone();
    tampered.overall_score = 1.0;
    assert!(!verify_credential(&tampered));

    // ── Step 5: Policy evaluation ───────────────────────────────────────
    let policy = TrustPolicy::new(0.6, TrustLevel::Established)
        .require_dimension(TrustDimension::HarmRecord, 0.8)
        .require_dimension(TrustDimension::ConsentCompliance, 0.9);
    let report = profile.check_policy(&policy);
    assert!(report.passed, "failures: {:?}", report.failures);

    let strict = TrustPolicy::new(0.99, TrustLevel::Exemplary)
        .require_dimension(TrustDimension::Transparency, 0.99);
    let strict_report = profile.check_policy(&strict);
    assert!(!strict_report.passed);
    assert_eq!(strict_report.failures.len(), 3);
    assert!(strict_report
        .failures
        .iter()
        .any(|f| f.requirement == RequirementKind::OverallScore));
    assert!(strict_report
        .failures
        .iter()
        .any(|f| f.requirement == RequirementKind::TrustLevel));

    // ── Step 6: Snapshot round trip and continuation ────────────────────
    let json = profile.to_json().expect("serialization should succeed");
    let mut restored = TrustProfile::from_json(&json).expect("round trip should succeed");

    assert_eq!(restored.entity_id(), profile.entity_id());
    assert_eq!(restored.history().len(), profile.history().len());
    assert!(restored.verify_history().valid);

    let continued = restored.calculate().clone();
    assert_eq!(continued.previous_hash, second.hash);
    assert!(restored.verify_history().valid);
    assert_eq!(restored.history().len(), 3);
}

#[test]
fn credential_usable_without_issuing_profile() {
    // A credential handed to a third party verifies with no history access.
    let mut profile = TrustProfile::new("agent-beta", EntityType::Agent);
    profile.set_consent_record(ConsentRecord {
        total_actions: 50,
        violations: 0,
        scope_creep_detected: false,
    });
    let credential = profile.generate_credential("issuer-1", chrono::Duration::hours(24));

    // Simulate transport: serialize, drop the profile, verify the copy.
    let wire = serde_json::to_string(&credential).unwrap();
    drop(profile);
    let received: agentic_trust::TrustCredential = serde_json::from_str(&wire).unwrap();
    assert!(verify_credential(&received));
    assert!(!is_expired(&received));
}
