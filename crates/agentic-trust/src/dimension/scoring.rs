//! Dimension scoring — pure functions from evidence summaries to scores.
//!
//! Each dimension is scored independently from the domain summaries, with
//! two deliberate exceptions: accuracy blends a calibration signal from
//! the reasoning profile, and scope adherence blends consent and trace
//! signals. A missing required input yields the neutral default 0.5.
//! Every score is clamped to [0, 1] after computation, and denominators
//! are floored to 1 so division by zero cannot occur.

use crate::evidence::{DomainSummaries, EvidenceCategory, EvidenceSource};

use super::types::{Trend, TrustDimension};

/// Neutral score used when a dimension's required input is absent.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Minimum score movement against recent history to count as a trend.
pub const TREND_THRESHOLD: f64 = 0.05;

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Score one dimension from the current domain summaries.
pub fn score_dimension(dimension: TrustDimension, summaries: &DomainSummaries) -> f64 {
    let score = match dimension {
        TrustDimension::Accuracy => score_accuracy(summaries),
        TrustDimension::Consistency => summaries
            .reasoning
            .as_ref()
            .map(|r| r.consistency)
            .unwrap_or(NEUTRAL_SCORE),
        TrustDimension::Transparency => score_transparency(summaries),
        TrustDimension::ConsentCompliance => score_consent_compliance(summaries),
        TrustDimension::HarmRecord => score_harm_record(summaries),
        TrustDimension::BiasAwareness => score_bias_awareness(summaries),
        TrustDimension::Calibration => summaries
            .reasoning
            .as_ref()
            .map(|r| r.calibration)
            .unwrap_or(NEUTRAL_SCORE),
        TrustDimension::ScopeAdherence => score_scope_adherence(summaries),
    };
    clamp01(score)
}

fn score_accuracy(summaries: &DomainSummaries) -> f64 {
    let trace = match &summaries.trace {
        Some(t) => t,
        None => return NEUTRAL_SCORE,
    };
    let total = trace.total_traces.max(1) as f64;
    let pass_rate = 1.0 - trace.verification_failures as f64 / total;
    let calibration = summaries
        .reasoning
        .as_ref()
        .map(|r| r.calibration)
        .unwrap_or(NEUTRAL_SCORE);
    pass_rate * 0.6 + calibration * 0.4
}

fn score_transparency(summaries: &DomainSummaries) -> f64 {
    let trace = match &summaries.trace {
        Some(t) => t,
        None => return NEUTRAL_SCORE,
    };
    trace.assumption_ratio.min(1.0) * 0.5 + (trace.alternatives_considered_avg / 5.0).min(1.0) * 0.5
}

fn score_consent_compliance(summaries: &DomainSummaries) -> f64 {
    let consent = match &summaries.consent {
        Some(c) => c,
        None => return NEUTRAL_SCORE,
    };
    let total = consent.total_actions.max(1) as f64;
    let compliance = 1.0 - consent.violations as f64 / total;
    let creep_factor = if consent.scope_creep_detected { 0.7 } else { 1.0 };
    compliance * 0.7 + creep_factor * 0.3
}

fn score_harm_record(summaries: &DomainSummaries) -> f64 {
    let harm = match &summaries.harm {
        Some(h) => h,
        None => return NEUTRAL_SCORE,
    };
    let severity_penalty = (harm.max_severity / 6.0) * 0.5;
    let incident_penalty = (harm.total_incidents as f64 / 10.0).min(1.0) * 0.3;
    let remediation_credit = harm.remediation_rate * 0.3;
    1.0 - severity_penalty - incident_penalty + remediation_credit
}

fn score_bias_awareness(summaries: &DomainSummaries) -> f64 {
    let reasoning = match &summaries.reasoning {
        Some(r) => r,
        None => return NEUTRAL_SCORE,
    };
    if reasoning.bias_count == 0 {
        // No detected bias is moderately trustworthy, not maximal:
        // absence of detection is not proof of absence of bias.
        0.7
    } else {
        // Detecting and correcting biases is rewarded; the raw count
        // itself carries no further penalty.
        (0.5 + reasoning.growth_trajectory * 0.5).min(1.0)
    }
}

fn score_scope_adherence(summaries: &DomainSummaries) -> f64 {
    if summaries.consent.is_none() && summaries.trace.is_none() {
        return NEUTRAL_SCORE;
    }
    // Derived from consent data alone; with only trace data present there
    // are zero recorded actions and zero violations.
    let (total_actions, violations, scope_creep) = match &summaries.consent {
        Some(c) => (c.total_actions, c.violations, c.scope_creep_detected),
        None => (0, 0, false),
    };
    let base = if violations == 0 && total_actions == 0 {
        1.0
    } else {
        1.0 - violations as f64 / total_actions.max(1) as f64
    };
    base * if scope_creep { 0.8 } else { 1.0 }
}

/// Map an evidence count to a confidence level. Monotonic step function,
/// shared across all dimensions.
pub fn confidence_from_evidence(count: u64) -> f64 {
    match count {
        0 => 0.0,
        1..=5 => 0.3,
        6..=20 => 0.6,
        21..=50 => 0.8,
        _ => 0.95,
    }
}

/// Count the evidence sources backing one dimension.
///
/// Each dimension counts the categories feeding its formula; external
/// attestations back every dimension.
pub fn evidence_count_for(dimension: TrustDimension, evidence: &[EvidenceSource]) -> u64 {
    evidence
        .iter()
        .filter(|e| category_backs(e.category, dimension))
        .count() as u64
}

fn category_backs(category: EvidenceCategory, dimension: TrustDimension) -> bool {
    match category {
        EvidenceCategory::ExternalAttestation => true,
        EvidenceCategory::DecisionTrace => matches!(
            dimension,
            TrustDimension::Accuracy | TrustDimension::Transparency | TrustDimension::ScopeAdherence
        ),
        EvidenceCategory::ReasoningProfile => matches!(
            dimension,
            TrustDimension::Accuracy
                | TrustDimension::Consistency
                | TrustDimension::BiasAwareness
                | TrustDimension::Calibration
        ),
        EvidenceCategory::ConsentLedger => matches!(
            dimension,
            TrustDimension::ConsentCompliance | TrustDimension::ScopeAdherence
        ),
        EvidenceCategory::HarmLedger => matches!(dimension, TrustDimension::HarmRecord),
    }
}

/// Classify the trend of a score against the same dimension's recent
/// history.
///
/// `prior` holds the dimension's last up-to-three scores; with fewer than
/// two prior observations the trend is stable by definition.
pub fn trend_from_history(current: f64, prior: &[f64]) -> Trend {
    if prior.len() < 2 {
        return Trend::Stable;
    }
    let mean = prior.iter().sum::<f64>() / prior.len() as f64;
    let diff = current - mean;
    if diff >= TREND_THRESHOLD {
        Trend::Improving
    } else if diff <= -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
