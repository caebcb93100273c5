//! Data structures for dimension scores.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trust dimension
// ---------------------------------------------------------------------------

/// One of the eight fixed facets of trustworthiness.
///
/// The set is fixed and exhaustive: every computation produces exactly
/// eight dimension scores, in the order of [`TrustDimension::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustDimension {
    Accuracy,
    Consistency,
    Transparency,
    ConsentCompliance,
    HarmRecord,
    BiasAwareness,
    Calibration,
    ScopeAdherence,
}

impl TrustDimension {
    /// All dimensions in stable order.
    pub const ALL: [TrustDimension; 8] = [
        TrustDimension::Accuracy,
        TrustDimension::Consistency,
        TrustDimension::Transparency,
        TrustDimension::ConsentCompliance,
        TrustDimension::HarmRecord,
        TrustDimension::BiasAwareness,
        TrustDimension::Calibration,
        TrustDimension::ScopeAdherence,
    ];

    /// Stable tag used in canonical payloads and serialized forms.
    pub fn as_tag(&self) -> &'static str {
        match self {
            TrustDimension::Accuracy => "accuracy",
            TrustDimension::Consistency => "consistency",
            TrustDimension::Transparency => "transparency",
            TrustDimension::ConsentCompliance => "consent_compliance",
            TrustDimension::HarmRecord => "harm_record",
            TrustDimension::BiasAwareness => "bias_awareness",
            TrustDimension::Calibration => "calibration",
            TrustDimension::ScopeAdherence => "scope_adherence",
        }
    }

    /// Fixed aggregation weight. The table sums to exactly 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            TrustDimension::Accuracy => 0.20,
            TrustDimension::ConsentCompliance => 0.15,
            TrustDimension::Transparency => 0.15,
            TrustDimension::HarmRecord => 0.15,
            TrustDimension::Calibration => 0.10,
            TrustDimension::Consistency => 0.10,
            TrustDimension::ScopeAdherence => 0.10,
            TrustDimension::BiasAwareness => 0.05,
        }
    }
}

impl std::fmt::Display for TrustDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction a score is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Dimension score
// ---------------------------------------------------------------------------

/// Scored state of one trust dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: TrustDimension,
    /// Bounded score in [0, 1].
    pub score: f64,
    /// Confidence in [0, 1], derived from evidence volume.
    pub confidence: f64,
    /// Number of evidence sources backing this dimension.
    pub evidence_count: u64,
    pub trend: Trend,
    /// Unix epoch microseconds.
    pub last_updated: u64,
}
