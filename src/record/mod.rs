//! Serializable snapshots of analysis results.
//!
//! A record is the handoff format for anything downstream of the analyzers,
//! such as renderers or report writers. Records carry a format version that is
//! checked on load.

use crate::analysis::{PatternAnalysis, RoleAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::RecordError;

/// Version identifier for record format
pub const RECORD_VERSION: u32 = 1;

/// Result carried by a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Roles(RoleAnalysis),
    Structure(PatternAnalysis),
}

impl Outcome {
    /// Whether the recorded analysis accepted the sentence.
    pub fn accepted(&self) -> bool {
        match self {
            Self::Roles(analysis) => analysis.accepted,
            Self::Structure(analysis) => analysis.accepted,
        }
    }
}

impl From<RoleAnalysis> for Outcome {
    fn from(analysis: RoleAnalysis) -> Self {
        Self::Roles(analysis)
    }
}

impl From<PatternAnalysis> for Outcome {
    fn from(analysis: PatternAnalysis) -> Self {
        Self::Structure(analysis)
    }
}

/// Snapshot of one analysed sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Record format version
    pub version: u32,

    /// Unique record identifier
    pub id: String,

    /// When the record was created
    pub timestamp: DateTime<Utc>,

    /// Sentence as given to the analyzer
    pub sentence: String,

    pub outcome: Outcome,
}

impl AnalysisRecord {
    /// Snapshot `outcome` under a fresh id and the current time.
    pub fn new(sentence: impl Into<String>, outcome: impl Into<Outcome>) -> Self {
        Self {
            version: RECORD_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            sentence: sentence.into(),
            outcome: outcome.into(),
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Decode JSON, refusing other format versions.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: Self = serde_json::from_str(json)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        record.check_version()
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, RecordError> {
        bincode::serialize(self).map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Decode bincode bytes, refusing other format versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, RecordError> {
        let record: Self = bincode::deserialize(bytes)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        record.check_version()
    }

    fn check_version(self) -> Result<Self, RecordError> {
        if self.version != RECORD_VERSION {
            log::warn!(
                "refusing record {} with version {}",
                self.id,
                self.version
            );
            return Err(RecordError::UnsupportedVersion {
                found: self.version,
                supported: RECORD_VERSION,
            });
        }
        Ok(self)
    }
}
