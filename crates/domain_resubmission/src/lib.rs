//! Claims Resubmission Domain
//!
//! This crate implements the resubmission decision core: canonicalizing raw
//! claim records from upstream systems, classifying denial reasons into a
//! closed taxonomy, deciding resubmission eligibility, and aggregating a
//! batch into candidates, metrics, and rejections.
//!
//! # Record Flow
//!
//! ```text
//! RawRecord -> SourceAdapter -> NormalizedClaim -> Classifier
//!           -> EligibilityDecision -> RecommendationTable -> PipelineOutcome
//! ```

pub mod adapter;
pub mod claim;
pub mod classifier;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod pipeline;
pub mod recommend;

pub use adapter::{AdapterRegistry, FieldMap, SourceAdapter};
pub use claim::{ClaimStatus, NormalizedClaim, RawRecord};
pub use classifier::{Classification, Classifier, ClassifierConfig, ClassifierMode, ReasonLabel};
pub use config::{NormalizeOptions, PipelineConfig};
pub use eligibility::{evaluate, EligibilityDecision};
pub use error::{NormalizeError, PipelineError};
pub use pipeline::{Candidate, Pipeline, PipelineOutcome, Rejection, RunMetrics, SourceMetrics};
pub use recommend::RecommendationTable;
