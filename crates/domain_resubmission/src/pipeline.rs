//! Batch pipeline aggregation
//!
//! Drives an ordered batch of raw records through normalization,
//! classification, eligibility, and recommendation lookup, isolating
//! per-record failures so one bad record never aborts the run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use core_kernel::RunId;

use crate::claim::RawRecord;
use crate::classifier::Classifier;
use crate::config::PipelineConfig;
use crate::eligibility;
use crate::error::{NormalizeError, PipelineError};

/// A claim flagged for resubmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub claim_id: String,
    pub resubmission_reason: String,
    pub source_system: String,
    pub recommended_changes: String,
}

/// A raw record that failed normalization, kept with its failure
///
/// The error stays typed inside the run and is rendered to a human-readable
/// reason string only when the rejection is serialized at the artifact
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub raw: RawRecord,
    pub error: NormalizeError,
}

impl Serialize for Rejection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Rejection", 2)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("reason", &self.error.to_string())?;
        state.end()
    }
}

/// Per-source counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetrics {
    pub processed: u64,
    pub flagged: u64,
    pub rejected: u64,
}

/// Aggregate counters for one run
///
/// Invariants: `processed == accepted + rejected` and
/// `accepted == flagged + excluded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub processed: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub flagged: u64,
    pub excluded: u64,
    pub by_source: BTreeMap<String, SourceMetrics>,
    pub generated_at: DateTime<Utc>,
}

/// The immutable result of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub run_id: RunId,
    pub source_system: String,
    pub candidates: Vec<Candidate>,
    pub metrics: RunMetrics,
    pub rejections: Vec<Rejection>,
}

/// The batch pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline over an ordered batch from one source.
    ///
    /// Records are processed independently in arrival order and candidate
    /// order matches input order among eligible records. Per-record failures
    /// become rejections and processing continues; the only run-level
    /// failure is a source tag with no registered adapter.
    pub fn run<I>(&self, rows: I, source: &str) -> Result<PipelineOutcome, PipelineError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let adapter = self
            .config
            .adapters
            .get(source)
            .ok_or_else(|| PipelineError::UnknownSource(source.to_string()))?;

        let run_id = RunId::new();
        let mode = self.config.classifier.mode;
        tracing::info!(%run_id, source, %mode, "starting resubmission run");

        let classifier = Classifier::new(&self.config.classifier);

        let mut tally = Tally::default();
        let mut candidates = Vec::new();
        let mut rejections = Vec::new();

        for raw in rows {
            tally.processed += 1;
            match adapter.apply(&raw, &self.config.normalize) {
                Ok(claim) => {
                    tally.accepted += 1;
                    let classification =
                        classifier.classify(claim.denial_reason.as_deref(), mode);
                    let decision =
                        eligibility::evaluate(&claim, &classification, self.config.reference_date);
                    match decision.eligibility_reason {
                        Some(reason) => {
                            tally.flagged += 1;
                            let recommended =
                                self.config.recommendations.recommend(&reason).to_string();
                            candidates.push(Candidate {
                                claim_id: claim.claim_id,
                                resubmission_reason: reason,
                                source_system: source.to_string(),
                                recommended_changes: recommended,
                            });
                        }
                        None => {
                            tally.excluded += 1;
                            tracing::debug!(
                                claim_id = %claim.claim_id,
                                exclusion = decision.exclusion_reason.as_deref().unwrap_or(""),
                                "claim excluded"
                            );
                        }
                    }
                }
                Err(error) => {
                    tally.rejected += 1;
                    tracing::debug!(%error, "record rejected");
                    rejections.push(Rejection { raw, error });
                }
            }
        }

        let metrics = tally.finalize(source);
        tracing::info!(
            %run_id,
            processed = metrics.processed,
            flagged = metrics.flagged,
            rejected = metrics.rejected,
            "resubmission run complete"
        );

        Ok(PipelineOutcome {
            run_id,
            source_system: source.to_string(),
            candidates,
            metrics,
            rejections,
        })
    }
}

/// Counters accumulated incrementally across a run, stamped once at the end
#[derive(Debug, Default)]
struct Tally {
    processed: u64,
    accepted: u64,
    rejected: u64,
    flagged: u64,
    excluded: u64,
}

impl Tally {
    fn finalize(self, source: &str) -> RunMetrics {
        let mut by_source = BTreeMap::new();
        by_source.insert(
            source.to_string(),
            SourceMetrics {
                processed: self.processed,
                flagged: self.flagged,
                rejected: self.rejected,
            },
        );
        RunMetrics {
            processed: self.processed,
            accepted: self.accepted,
            rejected: self.rejected,
            flagged: self.flagged,
            excluded: self.excluded,
            by_source,
            generated_at: Utc::now(),
        }
    }
}
