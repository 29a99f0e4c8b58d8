//! Pipeline configuration
//!
//! One explicit, immutable configuration value constructed up front and
//! passed into the pipeline; components never consult process-wide state.

use chrono::NaiveDate;

use crate::adapter::AdapterRegistry;
use crate::classifier::ClassifierConfig;
use crate::recommend::RecommendationTable;

/// Options consumed by field normalization
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Acronyms preserved verbatim by denial-reason title casing
    pub acronyms: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            acronyms: vec!["NPI".to_string()],
        }
    }
}

/// Complete configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub classifier: ClassifierConfig,
    pub normalize: NormalizeOptions,
    pub recommendations: RecommendationTable,
    /// As-of date for age gating; never wall-clock "now"
    pub reference_date: NaiveDate,
    pub adapters: AdapterRegistry,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            normalize: NormalizeOptions::default(),
            recommendations: RecommendationTable::default(),
            reference_date: NaiveDate::from_ymd_opt(2025, 7, 30).unwrap(),
            adapters: AdapterRegistry::builtin(),
        }
    }
}
