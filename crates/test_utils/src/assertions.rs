//! Assertion helpers for run outcomes.

use domain_resubmission::{PipelineOutcome, RunMetrics};

/// Asserts the cross-batch counter invariants hold.
pub fn assert_metrics_consistent(metrics: &RunMetrics) {
    assert_eq!(
        metrics.processed,
        metrics.accepted + metrics.rejected,
        "processed == accepted + rejected"
    );
    assert_eq!(
        metrics.accepted,
        metrics.flagged + metrics.excluded,
        "accepted == flagged + excluded"
    );
}

/// Asserts collections line up with the counters and candidates are complete.
pub fn assert_outcome_consistent(outcome: &PipelineOutcome) {
    assert_metrics_consistent(&outcome.metrics);
    assert_eq!(outcome.candidates.len() as u64, outcome.metrics.flagged);
    assert_eq!(outcome.rejections.len() as u64, outcome.metrics.rejected);
    for candidate in &outcome.candidates {
        assert!(!candidate.claim_id.is_empty(), "candidate claim_id set");
        assert!(
            !candidate.resubmission_reason.is_empty(),
            "candidate reason set"
        );
        assert!(
            !candidate.recommended_changes.is_empty(),
            "candidate recommendation set"
        );
    }
}
