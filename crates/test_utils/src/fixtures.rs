//! Pre-built batches and configurations.

use domain_resubmission::{PipelineConfig, RawRecord};

use crate::builders::AlphaRecordBuilder;

/// The default configuration used across the suite.
pub fn default_config() -> PipelineConfig {
    PipelineConfig::default()
}

/// A batch with one eligible, one excluded, and one rejected record.
pub fn mixed_alpha_batch() -> Vec<RawRecord> {
    vec![
        AlphaRecordBuilder::new().build(),
        AlphaRecordBuilder::new()
            .with_claim_id("A200")
            .with_denial_reason("Authorization expired")
            .build(),
        AlphaRecordBuilder::new()
            .with_claim_id("A300")
            .with_submitted_at("not-a-date")
            .build(),
    ]
}

/// A batch where every record is eligible under the default configuration.
pub fn eligible_alpha_batch(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            AlphaRecordBuilder::new()
                .with_claim_id(format!("A{i:03}"))
                .build()
        })
        .collect()
}
