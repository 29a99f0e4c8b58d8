//! Run artifact export.
//!
//! A completed run produces four files in the artifacts directory:
//!
//! - `resubmission_candidates.json`: pretty JSON array of candidates
//! - `resubmission_metrics.json`: pretty JSON metrics document
//! - `rejections.log.jsonl`: one compact JSON object per rejected record
//! - `rejections.json`: the same rejections as a pretty JSON array

use std::fs;
use std::path::{Path, PathBuf};

use domain_resubmission::PipelineOutcome;

use crate::error::ExportError;

pub const CANDIDATES_FILE: &str = "resubmission_candidates.json";
pub const METRICS_FILE: &str = "resubmission_metrics.json";
pub const REJECTIONS_LOG_FILE: &str = "rejections.log.jsonl";
pub const REJECTIONS_FILE: &str = "rejections.json";

/// Paths of the artifacts written for one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub candidates: PathBuf,
    pub metrics: PathBuf,
    pub rejections_log: PathBuf,
    pub rejections: PathBuf,
}

/// Writes run artifacts into a target directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes all artifacts for a completed run, creating the directory
    /// if needed. Existing artifacts from a previous run are overwritten.
    pub fn write_all(&self, outcome: &PipelineOutcome) -> Result<ArtifactPaths, ExportError> {
        fs::create_dir_all(&self.dir)?;

        let candidates = self.dir.join(CANDIDATES_FILE);
        fs::write(&candidates, serde_json::to_vec_pretty(&outcome.candidates)?)?;

        let metrics = self.dir.join(METRICS_FILE);
        fs::write(&metrics, serde_json::to_vec_pretty(&outcome.metrics)?)?;

        let rejections_log = self.dir.join(REJECTIONS_LOG_FILE);
        let mut lines = String::new();
        for rejection in &outcome.rejections {
            lines.push_str(&serde_json::to_string(rejection)?);
            lines.push('\n');
        }
        fs::write(&rejections_log, lines)?;

        let rejections = self.dir.join(REJECTIONS_FILE);
        fs::write(&rejections, serde_json::to_vec_pretty(&outcome.rejections)?)?;

        tracing::info!(
            dir = %self.dir.display(),
            candidates = outcome.candidates.len(),
            rejections = outcome.rejections.len(),
            "run artifacts written"
        );

        Ok(ArtifactPaths {
            candidates,
            metrics,
            rejections_log,
            rejections,
        })
    }
}
