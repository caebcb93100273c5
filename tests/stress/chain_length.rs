//! Stress test: build a history of 1000 records, verify chain integrity,
//! and ensure tampering is detected anywhere in a long chain.

use std::time::Instant;

use agentic_trust::score::verify_record_chain;
use agentic_trust::{ConsentRecord, EntityType, TrustProfile, GENESIS_HASH};

#[test]
fn stress_record_chain_1000() {
    let mut profile = TrustProfile::new("chain-agent", EntityType::Agent);
    profile.set_consent_record(ConsentRecord {
        total_actions: 500,
        violations: 3,
        scope_creep_detected: false,
    });

    let start = Instant::now();
    for _ in 0..1000 {
        profile.calculate();
    }
    let build_elapsed = start.elapsed();
    assert_eq!(profile.history().len(), 1000);

    // Every link must point at its predecessor
    let records = profile.history().records();
    assert_eq!(records[0].previous_hash, GENESIS_HASH);
    for i in 1..records.len() {
        assert_eq!(
            records[i].previous_hash,
            records[i - 1].hash,
            "record {i} should chain to record {}",
            i - 1
        );
    }

    // Verify the full chain
    let verify_start = Instant::now();
    let verification = profile.verify_history();
    let verify_elapsed = verify_start.elapsed();

    assert!(verification.valid);
    assert_eq!(verification.records_checked, 1000);

    println!("Built 1000 records in {build_elapsed:?}, verified in {verify_elapsed:?}");
    assert!(
        build_elapsed.as_secs() < 30,
        "building 1000 records took too long: {build_elapsed:?}"
    );
    assert!(
        verify_elapsed.as_secs() < 10,
        "verifying 1000 records took too long: {verify_elapsed:?}"
    );
}

#[test]
fn stress_tamper_detected_at_any_depth() {
    let mut profile = TrustProfile::new("chain-agent", EntityType::Agent);
    for _ in 0..200 {
        profile.calculate();
    }
    let clean = profile.history().records().to_vec();
    assert!(verify_record_chain(&clean).valid);

    // Tamper with one record at several depths; each must break the chain.
    for index in [0, 1, 99, 198, 199] {
        let mut tampered = clean.clone();
        tampered[index].overall_score = 0.999;
        let result = verify_record_chain(&tampered);
        assert!(!result.valid, "tampering at index {index} went undetected");
        assert_eq!(result.records_checked, index + 1);
    }
}
