//! Boundary errors for record ingestion, artifact export, and runner setup.

use thiserror::Error;

/// Errors reading record files or writing run artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors turning runner settings into a pipeline configuration.
#[derive(Debug, Error)]
pub enum RunnerConfigError {
    #[error(transparent)]
    Mode(#[from] domain_resubmission::classifier::ParseModeError),

    #[error("invalid reference date: {0}")]
    ReferenceDate(#[from] chrono::ParseError),
}
