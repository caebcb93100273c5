//! Stress test: run 100 isolated profiles, verify unique record ids,
//! independent histories, and independently verifiable credentials.

use std::collections::HashSet;

use agentic_trust::credential::verify_credential;
use agentic_trust::{EntityType, HarmRecord, TrustProfile};

#[test]
fn stress_100_isolated_profiles() {
    let mut ids = HashSet::new();
    let mut profiles = Vec::with_capacity(100);

    for i in 0..100 {
        let mut profile = TrustProfile::new(format!("agent-{i}"), EntityType::Agent);
        // Give each profile a distinct harm history
        profile.set_harm_record(HarmRecord {
            total_incidents: (i % 10) as u64,
            max_severity: (i % 7) as f64,
            remediation_rate: 0.5,
        });
        let record = profile.calculate();

        // Record ids must be globally unique
        assert!(
            ids.insert(record.id.clone()),
            "Duplicate record id: {}",
            record.id
        );

        profiles.push(profile);
    }

    assert_eq!(ids.len(), 100);

    // Each history is independent and valid on its own
    for (i, profile) in profiles.iter().enumerate() {
        let verification = profile.verify_history();
        assert!(verification.valid, "profile {i} failed chain verification");
        assert_eq!(verification.records_checked, 1);
        assert_eq!(profile.entity_id(), format!("agent-{i}"));
    }
}

#[test]
fn stress_100_credentials_verify_independently() {
    let credentials: Vec<_> = (0..100)
        .map(|i| {
            let mut profile = TrustProfile::new(format!("agent-{i}"), EntityType::Agent);
            profile.generate_credential("issuer-stress", chrono::Duration::hours(24))
        })
        .collect();

    let mut ids = HashSet::new();
    for credential in &credentials {
        assert!(ids.insert(credential.id.clone()));
        assert!(verify_credential(credential));
    }

    // Cross-contaminating hashes between credentials must fail
    let mut swapped = credentials[0].clone();
    swapped.verification_hash = credentials[1].verification_hash.clone();
    assert!(!verify_credential(&swapped));
}
