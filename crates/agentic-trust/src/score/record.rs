//! Data structures for trust score records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::DimensionScore;
use crate::evidence::EvidenceSource;

// ---------------------------------------------------------------------------
// Entity type
// ---------------------------------------------------------------------------

/// Kind of entity being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Agent,
    Human,
    System,
}

impl EntityType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            EntityType::Agent => "agent",
            EntityType::Human => "human",
            EntityType::System => "system",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Trust level
// ---------------------------------------------------------------------------

/// Discretized trust tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Untrusted,
    Provisional,
    Basic,
    Established,
    High,
    Exemplary,
}

impl TrustLevel {
    /// Map an overall score to a level. Highest matching floor wins.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            TrustLevel::Exemplary
        } else if score >= 0.75 {
            TrustLevel::High
        } else if score >= 0.6 {
            TrustLevel::Established
        } else if score >= 0.4 {
            TrustLevel::Basic
        } else if score >= 0.2 {
            TrustLevel::Provisional
        } else {
            TrustLevel::Untrusted
        }
    }

    /// Numeric floor of this level's score band.
    pub fn floor(&self) -> f64 {
        match self {
            TrustLevel::Untrusted => 0.0,
            TrustLevel::Provisional => 0.2,
            TrustLevel::Basic => 0.4,
            TrustLevel::Established => 0.6,
            TrustLevel::High => 0.75,
            TrustLevel::Exemplary => 0.9,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            TrustLevel::Untrusted => "untrusted",
            TrustLevel::Provisional => "provisional",
            TrustLevel::Basic => "basic",
            TrustLevel::Established => "established",
            TrustLevel::High => "high",
            TrustLevel::Exemplary => "exemplary",
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Trust score record
// ---------------------------------------------------------------------------

/// One immutable trust profile snapshot.
///
/// Created only by the calculator and finalized by the hash chain; never
/// mutated after being appended to a profile's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScoreRecord {
    pub id: String,
    pub entity_id: String,
    pub entity_type: EntityType,
    /// Weighted sum of the eight dimension scores, in [0, 1].
    pub overall_score: f64,
    pub level: TrustLevel,
    /// Exactly eight entries, one per dimension, in stable order.
    pub dimensions: Vec<DimensionScore>,
    /// Evidence used for this computation, copied verbatim.
    pub evidence: Vec<EvidenceSource>,
    /// Reserved for future per-domain breakdowns; currently always empty.
    pub domain_scores: BTreeMap<String, f64>,
    /// Unix epoch microseconds.
    pub generated_at: u64,
    pub valid_until: u64,
    /// Digest of the chain link plus this record's canonical payload.
    pub hash: String,
    /// Hash of the immediately preceding record, or the genesis sentinel.
    pub previous_hash: String,
}

impl TrustScoreRecord {
    /// Look up the score entry for one dimension.
    pub fn dimension(&self, dimension: crate::dimension::TrustDimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}

// ---------------------------------------------------------------------------
// Record chain
// ---------------------------------------------------------------------------

/// Append-only sequence of trust score records.
///
/// Appends are the only mutation; records are immutable once appended and
/// never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordChain(Vec<TrustScoreRecord>);

impl RecordChain {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a finalized record to the end of the chain.
    pub fn append(&mut self, record: TrustScoreRecord) {
        self.0.push(record);
    }

    /// The most recently appended record.
    pub fn latest(&self) -> Option<&TrustScoreRecord> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrustScoreRecord> {
        self.0.iter()
    }

    /// Full history, ordered oldest to newest.
    pub fn records(&self) -> &[TrustScoreRecord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RecordChain {
    type Item = &'a TrustScoreRecord;
    type IntoIter = std::slice::Iter<'a, TrustScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
