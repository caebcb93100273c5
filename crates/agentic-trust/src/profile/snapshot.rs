//! TSP-1.0 snapshot format — full-state serialization of a profile.
//!
//! The snapshot carries a fixed schema tag, the entity identity, the raw
//! evidence list, the four optional domain summaries, and the full
//! ordered history. Field names and nesting are part of the interchange
//! contract; deserialization rejects any other schema tag outright.
//!
//! Snapshot format (JSON):
//! ```json
//! {
//!     "schema": "TSP-1.0",
//!     "entity_id": "agent-1",
//!     "entity_type": "agent",
//!     "evidence": [ ... EvidenceSource ... ],
//!     "trace_summary": { ... } | null,
//!     "reasoning_profile": { ... } | null,
//!     "consent_record": { ... } | null,
//!     "harm_record": { ... } | null,
//!     "history": [ ... TrustScoreRecord ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrustError};
use crate::evidence::{
    ConsentRecord, DecisionTraceSummary, DomainSummaries, EvidenceSource, HarmRecord,
    ReasoningProfile,
};
use crate::score::{EntityType, RecordChain};

use super::controller::TrustProfile;

/// Schema tag for the current snapshot format.
pub const SNAPSHOT_SCHEMA: &str = "TSP-1.0";

/// Serializable snapshot of a profile's entire internal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub schema: String,
    pub entity_id: String,
    pub entity_type: EntityType,
    pub evidence: Vec<EvidenceSource>,
    pub trace_summary: Option<DecisionTraceSummary>,
    pub reasoning_profile: Option<ReasoningProfile>,
    pub consent_record: Option<ConsentRecord>,
    pub harm_record: Option<HarmRecord>,
    pub history: RecordChain,
}

impl TrustProfile {
    /// Capture the full internal state as a snapshot.
    pub fn to_snapshot(&self) -> ProfileSnapshot {
        let summaries = self.summaries();
        ProfileSnapshot {
            schema: SNAPSHOT_SCHEMA.to_string(),
            entity_id: self.entity_id().to_string(),
            entity_type: self.entity_type(),
            evidence: self.evidence().to_vec(),
            trace_summary: summaries.trace.clone(),
            reasoning_profile: summaries.reasoning.clone(),
            consent_record: summaries.consent.clone(),
            harm_record: summaries.harm.clone(),
            history: self.history().clone(),
        }
    }

    /// Restore a profile from a snapshot.
    ///
    /// A mismatched schema tag is a hard failure, never coerced. The
    /// record validity window is not part of the snapshot and resets to
    /// the default.
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Result<Self> {
        if snapshot.schema != SNAPSHOT_SCHEMA {
            return Err(TrustError::SchemaMismatch {
                expected: SNAPSHOT_SCHEMA.to_string(),
                found: snapshot.schema,
            });
        }
        let mut profile = TrustProfile::new(snapshot.entity_id, snapshot.entity_type);
        for source in snapshot.evidence {
            profile.restore_evidence(source);
        }
        if let Some(trace) = snapshot.trace_summary {
            profile.set_trace_summary(trace);
        }
        if let Some(reasoning) = snapshot.reasoning_profile {
            profile.set_reasoning_profile(reasoning);
        }
        if let Some(consent) = snapshot.consent_record {
            profile.set_consent_record(consent);
        }
        if let Some(harm) = snapshot.harm_record {
            profile.set_harm_record(harm);
        }
        profile.restore_history(snapshot.history);
        Ok(profile)
    }

    /// Serialize the full profile state to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_snapshot())
            .map_err(|e| TrustError::Serialization(e.to_string()))
    }

    /// Deserialize a profile from JSON produced by [`TrustProfile::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ProfileSnapshot =
            serde_json::from_str(json).map_err(|e| TrustError::Serialization(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }
}
