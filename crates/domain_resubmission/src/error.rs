//! Resubmission domain errors

use thiserror::Error;

/// Per-record normalization failures
///
/// Every variant is caught at the record boundary and recorded as a
/// rejection; none of them aborts a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unparsable date: {0}")]
    UnparsableDate(String),
}

/// Run-level pipeline failures
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The batch names a source with no registered adapter, so no record
    /// can be processed at all.
    #[error("unknown source system: {0}")]
    UnknownSource(String),
}
