//! Trust policies — caller-defined minimum requirements.
//!
//! Policies are evaluated, never enforced: the engine reports which
//! requirements a record misses and leaves the decision to the caller.
//! Evaluation collects every unmet requirement instead of stopping at
//! the first, and checking against an empty history produces a
//! deterministic, fully populated failure report rather than an error.

use serde::{Deserialize, Serialize};

use crate::dimension::TrustDimension;
use crate::score::{TrustLevel, TrustScoreRecord};

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Minimum score required for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRequirement {
    pub dimension: TrustDimension,
    pub min_score: f64,
}

/// A caller-supplied requirement set, checked against the latest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustPolicy {
    pub min_overall_score: f64,
    pub min_level: TrustLevel,
    pub dimension_requirements: Vec<DimensionRequirement>,
}

impl TrustPolicy {
    pub fn new(min_overall_score: f64, min_level: TrustLevel) -> Self {
        Self {
            min_overall_score,
            min_level,
            dimension_requirements: Vec::new(),
        }
    }

    /// Add a per-dimension minimum.
    pub fn require_dimension(mut self, dimension: TrustDimension, min_score: f64) -> Self {
        self.dimension_requirements.push(DimensionRequirement {
            dimension,
            min_score,
        });
        self
    }
}

// ---------------------------------------------------------------------------
// Evaluation report
// ---------------------------------------------------------------------------

/// Which requirement a failure belongs to.
///
/// Overall-score and trust-level misses get their own categories instead
/// of being attributed to an arbitrary dimension label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    OverallScore,
    TrustLevel,
    Dimension(TrustDimension),
}

/// One unmet requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyFailure {
    pub requirement: RequirementKind,
    pub required: f64,
    pub actual: f64,
}

/// Outcome of evaluating a policy.
#[derive(Debug, Clone)]
pub struct PolicyReport {
    pub passed: bool,
    pub failures: Vec<PolicyFailure>,
    /// Evaluation timestamp.
    pub checked_at: u64,
}

/// Evaluate a policy against the latest record, if any.
///
/// The required level is resolved to its numeric floor and compared
/// against the record's own overall score, not its discretized level.
/// With no record at all, every requirement is reported unmet with an
/// actual of 0.
pub fn evaluate_policy(policy: &TrustPolicy, record: Option<&TrustScoreRecord>) -> PolicyReport {
    let now = crate::time::now_micros();
    let mut failures = Vec::new();

    match record {
        None => {
            failures.push(PolicyFailure {
                requirement: RequirementKind::OverallScore,
                required: policy.min_overall_score,
                actual: 0.0,
            });
            failures.push(PolicyFailure {
                requirement: RequirementKind::TrustLevel,
                required: policy.min_level.floor(),
                actual: 0.0,
            });
            for req in &policy.dimension_requirements {
                failures.push(PolicyFailure {
                    requirement: RequirementKind::Dimension(req.dimension),
                    required: req.min_score,
                    actual: 0.0,
                });
            }
            PolicyReport {
                passed: false,
                failures,
                checked_at: now,
            }
        }
        Some(record) => {
            if record.overall_score < policy.min_overall_score {
                failures.push(PolicyFailure {
                    requirement: RequirementKind::OverallScore,
                    required: policy.min_overall_score,
                    actual: record.overall_score,
                });
            }

            let level_floor = policy.min_level.floor();
            if record.overall_score < level_floor {
                failures.push(PolicyFailure {
                    requirement: RequirementKind::TrustLevel,
                    required: level_floor,
                    actual: record.overall_score,
                });
            }

            for req in &policy.dimension_requirements {
                let actual = record
                    .dimension(req.dimension)
                    .map(|d| d.score)
                    .unwrap_or(0.0);
                if actual < req.min_score {
                    failures.push(PolicyFailure {
                        requirement: RequirementKind::Dimension(req.dimension),
                        required: req.min_score,
                        actual,
                    });
                }
            }

            PolicyReport {
                passed: failures.is_empty(),
                failures,
                checked_at: now,
            }
        }
    }
}
