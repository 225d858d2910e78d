//! Failures while saving or loading analysis records.

use thiserror::Error;

/// Why a record could not be written or read back.
///
/// Encoding failures carry the message of the underlying serde_json or
/// bincode error.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record could not be encoded
    #[error("cannot encode analysis record: {0}")]
    SerializationFailed(String),

    /// The input is not a well-formed record
    #[error("cannot decode analysis record: {0}")]
    DeserializationFailed(String),

    /// The record was written with a different format version
    #[error("analysis record has format version {found}, this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
