//! Trust profile controller.
//!
//! One `TrustProfile` owns all mutable state for one entity: the
//! evidence list, the four domain summary slots, and the hash-chained
//! history. Everything is synchronous and in-memory; concurrent use of
//! one instance requires external mutual exclusion, and instances share
//! no state with each other.

use log::debug;

use crate::credential::{issue_credential, TrustCredential};
use crate::dimension::{Trend, TrustDimension, TREND_THRESHOLD};
use crate::evidence::{
    ConsentRecord, DecisionTraceSummary, DomainSummaries, EvidenceSource, HarmRecord,
    ReasoningProfile,
};
use crate::policy::{evaluate_policy, PolicyReport, TrustPolicy};
use crate::score::{
    calculate_record, compute_record_hash, verify_record_chain, ChainVerification, EntityType,
    RecordChain, TrustScoreRecord, DEFAULT_VALIDITY_HOURS, GENESIS_HASH,
};

/// Stateful trust profile for one entity.
#[derive(Debug, Clone)]
pub struct TrustProfile {
    entity_id: String,
    entity_type: EntityType,
    evidence: Vec<EvidenceSource>,
    summaries: DomainSummaries,
    history: RecordChain,
    validity: chrono::Duration,
}

impl TrustProfile {
    /// Create an empty profile with the default 24-hour record validity.
    pub fn new(entity_id: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_type,
            evidence: Vec::new(),
            summaries: DomainSummaries::default(),
            history: RecordChain::new(),
            validity: chrono::Duration::hours(DEFAULT_VALIDITY_HOURS),
        }
    }

    /// Override the validity window used for future records.
    pub fn set_validity(&mut self, validity: chrono::Duration) {
        self.validity = validity;
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn evidence(&self) -> &[EvidenceSource] {
        &self.evidence
    }

    pub fn summaries(&self) -> &DomainSummaries {
        &self.summaries
    }

    /// Full hash-chained history, oldest to newest.
    pub fn history(&self) -> &RecordChain {
        &self.history
    }

    /// The most recent record, if any calculation has run.
    pub fn latest(&self) -> Option<&TrustScoreRecord> {
        self.history.latest()
    }

    // -----------------------------------------------------------------------
    // Evidence accumulation
    // -----------------------------------------------------------------------

    /// Add one evidence attestation. Allowed in any state; evidence is
    /// kept in insertion order and never deleted.
    pub fn add_evidence(&mut self, source: EvidenceSource) {
        debug!(
            "profile {}: evidence {} ({})",
            self.entity_id, source.source_id, source.category
        );
        self.evidence.push(source);
    }

    /// Set the decision-trace summary. Latest wins; no aggregation.
    pub fn set_trace_summary(&mut self, summary: DecisionTraceSummary) {
        self.summaries.trace = Some(summary);
    }

    /// Set the reasoning profile. Latest wins; no aggregation.
    pub fn set_reasoning_profile(&mut self, profile: ReasoningProfile) {
        self.summaries.reasoning = Some(profile);
    }

    /// Set the consent record. Latest wins; no aggregation.
    pub fn set_consent_record(&mut self, record: ConsentRecord) {
        self.summaries.consent = Some(record);
    }

    /// Set the harm record. Latest wins; no aggregation.
    pub fn set_harm_record(&mut self, record: HarmRecord) {
        self.summaries.harm = Some(record);
    }

    /// Reinstate evidence from a snapshot without re-stamping or logging.
    pub(crate) fn restore_evidence(&mut self, source: EvidenceSource) {
        self.evidence.push(source);
    }

    /// Reinstate a deserialized history verbatim.
    pub(crate) fn restore_history(&mut self, history: RecordChain) {
        self.history = history;
    }

    // -----------------------------------------------------------------------
    // Calculation
    // -----------------------------------------------------------------------

    /// Compute a new record from the current evidence and summaries and
    /// append it to the history. Past records are never updated in place.
    pub fn calculate(&mut self) -> &TrustScoreRecord {
        let mut record = calculate_record(
            &self.entity_id,
            self.entity_type,
            &self.evidence,
            &self.summaries,
            &self.history,
            self.validity,
        );
        record.previous_hash = self
            .history
            .latest()
            .map(|prev| prev.hash.clone())
            .unwrap_or_else(|| GENESIS_HASH.to_string());
        record.hash = compute_record_hash(&record);

        debug!(
            "profile {}: record {} score {:.4} level {}",
            self.entity_id, record.id, record.overall_score, record.level
        );
        self.history.append(record);
        self.history.latest().expect("record just appended")
    }

    /// Equivalent to [`TrustProfile::calculate`]: always appends a new
    /// record from the current state.
    pub fn recalculate(&mut self) -> &TrustScoreRecord {
        self.calculate()
    }

    // -----------------------------------------------------------------------
    // Integrity
    // -----------------------------------------------------------------------

    /// Audit the full history for tampering or reordering.
    pub fn verify_history(&self) -> ChainVerification {
        verify_record_chain(self.history.records())
    }

    // -----------------------------------------------------------------------
    // Credentials
    // -----------------------------------------------------------------------

    /// Issue a credential from the latest record.
    ///
    /// Runs an implicit calculation first if the history is empty, so a
    /// credential is never issued with no underlying record.
    pub fn generate_credential(
        &mut self,
        issuer: &str,
        validity: chrono::Duration,
    ) -> TrustCredential {
        if self.history.is_empty() {
            debug!(
                "profile {}: implicit calculation before credential issuance",
                self.entity_id
            );
            self.calculate();
        }
        let record = self.history.latest().expect("history is non-empty");
        issue_credential(record, issuer, validity)
    }

    // -----------------------------------------------------------------------
    // Policy
    // -----------------------------------------------------------------------

    /// Evaluate a policy against the latest record.
    pub fn check_policy(&self, policy: &TrustPolicy) -> PolicyReport {
        evaluate_policy(policy, self.history.latest())
    }

    // -----------------------------------------------------------------------
    // Trend
    // -----------------------------------------------------------------------

    /// Profile-level trend: the two most recent records' overall scores.
    /// Fewer than two records is stable by definition.
    pub fn trend(&self) -> Trend {
        self.pairwise_trend(|r| r.overall_score)
    }

    /// Per-dimension trend over the two most recent records.
    pub fn dimension_trend(&self, dimension: TrustDimension) -> Trend {
        self.pairwise_trend(|r| r.dimension(dimension).map(|d| d.score).unwrap_or(0.0))
    }

    fn pairwise_trend(&self, score_of: impl Fn(&TrustScoreRecord) -> f64) -> Trend {
        let records = self.history.records();
        if records.len() < 2 {
            return Trend::Stable;
        }
        let previous = score_of(&records[records.len() - 2]);
        let current = score_of(&records[records.len() - 1]);
        let diff = current - previous;
        if diff >= TREND_THRESHOLD {
            Trend::Improving
        } else if diff <= -TREND_THRESHOLD {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceCategory;
    use crate::score::TrustLevel;

    fn profile() -> TrustProfile {
        TrustProfile::new("agent-1", EntityType::Agent)
    }

    #[test]
    fn test_new_profile_is_empty() {
        let p = profile();
        assert!(p.latest().is_none());
        assert!(p.evidence().is_empty());
        assert_eq!(p.entity_id(), "agent-1");
        assert_eq!(p.entity_type(), EntityType::Agent);
    }

    #[test]
    fn test_calculate_appends_and_chains() {
        let mut p = profile();
        let first_hash = p.calculate().hash.clone();
        let second = p.recalculate().clone();
        assert_eq!(p.history().len(), 2);
        assert_eq!(second.previous_hash, first_hash);
        assert!(p.verify_history().valid);
    }

    #[test]
    fn test_recalculation_on_unchanged_profile() {
        let mut p = profile();
        p.set_consent_record(ConsentRecord {
            total_actions: 100,
            violations: 5,
            scope_creep_detected: false,
        });
        let first = p.calculate().clone();
        let second = p.calculate().clone();

        // Same inputs, identical dimension scores, stable trend.
        for (a, b) in first.dimensions.iter().zip(&second.dimensions) {
            assert_eq!(a.score, b.score);
            assert_eq!(b.trend, Trend::Stable);
        }
        assert_eq!(second.previous_hash, first.hash);
    }

    #[test]
    fn test_summary_overwrite_latest_wins() {
        let mut p = profile();
        p.set_consent_record(ConsentRecord {
            total_actions: 10,
            violations: 10,
            scope_creep_detected: true,
        });
        p.set_consent_record(ConsentRecord {
            total_actions: 100,
            violations: 0,
            scope_creep_detected: false,
        });
        let record = p.calculate();
        let consent = record
            .dimension(TrustDimension::ConsentCompliance)
            .unwrap();
        assert_eq!(consent.score, 1.0);
    }

    #[test]
    fn test_evidence_raises_confidence() {
        let mut p = profile();
        for i in 0..10 {
            p.add_evidence(EvidenceSource::new(
                EvidenceCategory::ConsentLedger,
                format!("consent-{i}"),
                1.0,
            ));
        }
        let record = p.calculate();
        let consent = record
            .dimension(TrustDimension::ConsentCompliance)
            .unwrap();
        assert_eq!(consent.evidence_count, 10);
        assert_eq!(consent.confidence, 0.6);
        // Harm ledger saw nothing.
        let harm = record.dimension(TrustDimension::HarmRecord).unwrap();
        assert_eq!(harm.evidence_count, 0);
        assert_eq!(harm.confidence, 0.0);
    }

    #[test]
    fn test_credential_triggers_implicit_calculation() {
        let mut p = profile();
        assert!(p.history().is_empty());
        let cred = p.generate_credential("issuer-1", chrono::Duration::hours(24));
        assert_eq!(p.history().len(), 1);
        assert_eq!(cred.entity_id, "agent-1");
        assert!(crate::credential::verify_credential(&cred));
    }

    #[test]
    fn test_policy_check_on_empty_history() {
        let p = profile();
        let policy = TrustPolicy::new(0.5, TrustLevel::Basic)
            .require_dimension(TrustDimension::Accuracy, 0.5);
        let report = p.check_policy(&policy);
        assert!(!report.passed);
        assert_eq!(report.failures.len(), 3);
    }

    #[test]
    fn test_trend_improving_on_better_evidence() {
        let mut p = profile();
        p.set_harm_record(HarmRecord {
            total_incidents: 10,
            max_severity: 5.0,
            remediation_rate: 0.0,
        });
        p.calculate();
        p.set_harm_record(HarmRecord {
            total_incidents: 0,
            max_severity: 0.0,
            remediation_rate: 1.0,
        });
        p.calculate();
        assert_eq!(p.dimension_trend(TrustDimension::HarmRecord), Trend::Improving);
        assert_eq!(p.trend(), Trend::Improving);
    }

    #[test]
    fn test_trend_stable_with_single_record() {
        let mut p = profile();
        p.calculate();
        assert_eq!(p.trend(), Trend::Stable);
        assert_eq!(p.dimension_trend(TrustDimension::Accuracy), Trend::Stable);
    }

    #[test]
    fn test_profiles_are_isolated() {
        let mut a = TrustProfile::new("agent-a", EntityType::Agent);
        let mut b = TrustProfile::new("agent-b", EntityType::Human);
        a.set_harm_record(HarmRecord {
            total_incidents: 10,
            max_severity: 6.0,
            remediation_rate: 0.0,
        });
        a.calculate();
        b.calculate();
        let a_harm = a.latest().unwrap().dimension(TrustDimension::HarmRecord);
        let b_harm = b.latest().unwrap().dimension(TrustDimension::HarmRecord);
        assert!(a_harm.unwrap().score < b_harm.unwrap().score);
    }
}
