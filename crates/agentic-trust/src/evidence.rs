//! Evidence model — attestations and per-domain summaries.
//!
//! Evidence arrives from four upstream producers (decision-trace logs,
//! the reasoning-consistency profiler, the consent/authorization ledger,
//! the harm/incident ledger) plus external attestations. The engine only
//! consumes already-summarized records; it never talks to the producers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Evidence sources
// ---------------------------------------------------------------------------

/// Category of an evidence attestation. Fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    DecisionTrace,
    ReasoningProfile,
    ConsentLedger,
    HarmLedger,
    ExternalAttestation,
}

impl EvidenceCategory {
    /// Stable tag used in canonical payloads.
    pub fn as_tag(&self) -> &'static str {
        match self {
            EvidenceCategory::DecisionTrace => "decision_trace",
            EvidenceCategory::ReasoningProfile => "reasoning_profile",
            EvidenceCategory::ConsentLedger => "consent_ledger",
            EvidenceCategory::HarmLedger => "harm_ledger",
            EvidenceCategory::ExternalAttestation => "external_attestation",
        }
    }
}

impl std::fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// One evidence attestation contributing to trust assessment.
///
/// Immutable once added; accumulated in insertion order; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub category: EvidenceCategory,
    pub source_id: String,
    /// Unix epoch microseconds.
    pub timestamp: u64,
    /// Relative weight in [0, 1].
    pub weight: f64,
}

impl EvidenceSource {
    /// Create an evidence source stamped with the current time.
    /// Weight is clamped to [0, 1].
    pub fn new(category: EvidenceCategory, source_id: impl Into<String>, weight: f64) -> Self {
        Self {
            category,
            source_id: source_id.into(),
            timestamp: crate::time::now_micros(),
            weight: weight.clamp(0.0, 1.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-domain summaries
// ---------------------------------------------------------------------------

/// Summary of decision-trace logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTraceSummary {
    pub total_traces: u64,
    pub verification_failures: u64,
    /// Ratio of traces with explicit assumptions recorded.
    pub assumption_ratio: f64,
    /// Average number of alternatives considered per decision.
    pub alternatives_considered_avg: f64,
}

/// Summary from the reasoning-consistency profiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningProfile {
    /// Calibration quality in [0, 1].
    pub calibration: f64,
    /// Number of detected biases.
    pub bias_count: u64,
    /// Trajectory of bias correction over time, in [0, 1].
    pub growth_trajectory: f64,
    /// Reasoning consistency in [0, 1].
    pub consistency: f64,
}

/// Summary from the consent/authorization ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub total_actions: u64,
    pub violations: u64,
    pub scope_creep_detected: bool,
}

/// Summary from the harm/incident ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmRecord {
    pub total_incidents: u64,
    /// Maximum incident severity on a 0-6 scale.
    pub max_severity: f64,
    /// Fraction of incidents remediated, in [0, 1].
    pub remediation_rate: f64,
}

/// The four optional per-domain summary slots.
///
/// Each slot holds only the most recently supplied summary — latest wins,
/// there is no running aggregate. An absent slot means the dependent
/// dimensions fall back to a neutral default score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSummaries {
    pub trace: Option<DecisionTraceSummary>,
    pub reasoning: Option<ReasoningProfile>,
    pub consent: Option<ConsentRecord>,
    pub harm: Option<HarmRecord>,
}
