//! Runner configuration, loaded from `PIPELINE_*` environment variables.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_resubmission::{ClassifierConfig, ClassifierMode, PipelineConfig};

use crate::error::RunnerConfigError;

/// Settings for one invocation of the runner binary.
///
/// Every field has a default, so the binary works out of the box; the
/// environment overrides individual fields (`PIPELINE_SOURCE=beta`, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Path to a JSON array of raw records.
    pub input_path: String,
    /// Source tag selecting the adapter for the whole batch.
    pub source: String,
    /// Directory the run artifacts are written into.
    pub artifacts_dir: String,
    /// Classifier mode name (`rules`, `heuristic`, `rules+heuristic`, `mock-model`).
    pub classifier_mode: String,
    /// As-of date for the age gate, `YYYY-MM-DD`.
    pub reference_date: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let defaults = PipelineConfig::default();
        Self {
            input_path: "claims.json".to_string(),
            source: "alpha".to_string(),
            artifacts_dir: "artifacts".to_string(),
            classifier_mode: defaults.classifier.mode.to_string(),
            reference_date: defaults.reference_date.format("%Y-%m-%d").to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Loads settings from the environment on top of the defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&RunnerConfig::default())?)
            .add_source(config::Environment::with_prefix("PIPELINE"))
            .build()?
            .try_deserialize()
    }

    /// Builds the immutable pipeline configuration for this run.
    pub fn pipeline_config(&self) -> Result<PipelineConfig, RunnerConfigError> {
        let mode = ClassifierMode::from_str(&self.classifier_mode)?;
        let reference_date = NaiveDate::parse_from_str(&self.reference_date, "%Y-%m-%d")?;
        Ok(PipelineConfig {
            classifier: ClassifierConfig {
                mode,
                ..ClassifierConfig::default()
            },
            reference_date,
            ..PipelineConfig::default()
        })
    }
}
