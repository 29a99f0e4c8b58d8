//! End-to-end tests for the batch pipeline

use domain_resubmission::{
    Pipeline, PipelineConfig, PipelineError, RawRecord,
};
use proptest::prelude::*;

fn record(entries: &[(&str, Option<&str>)]) -> RawRecord {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect()
}

fn alpha_record(
    claim_id: &str,
    patient_id: Option<&str>,
    denial_reason: Option<&str>,
    status: &str,
    submitted_at: &str,
) -> RawRecord {
    record(&[
        ("claim_id", Some(claim_id)),
        ("patient_id", patient_id),
        ("procedure_code", Some("99213")),
        ("denial_reason", denial_reason),
        ("status", Some(status)),
        ("submitted_at", Some(submitted_at)),
    ])
}

fn pipeline() -> Pipeline {
    Pipeline::new(PipelineConfig::default())
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_scenario_a_retryable_denied_claim_becomes_candidate() {
    let rows = vec![alpha_record(
        "A123",
        Some("P001"),
        Some("Incorrect NPI"),
        "denied",
        "2025-07-01",
    )];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    assert_eq!(outcome.candidates.len(), 1);
    let candidate = &outcome.candidates[0];
    assert_eq!(candidate.claim_id, "A123");
    assert_eq!(candidate.resubmission_reason, "Incorrect NPI");
    assert_eq!(candidate.source_system, "alpha");
    assert_eq!(candidate.recommended_changes, "Review NPI number and resubmit");

    assert_eq!(outcome.metrics.processed, 1);
    assert_eq!(outcome.metrics.accepted, 1);
    assert_eq!(outcome.metrics.flagged, 1);
    assert_eq!(outcome.metrics.rejected, 0);
    assert!(outcome.rejections.is_empty());
}

#[test]
fn test_scenario_b_non_retryable_claim_is_excluded() {
    let rows = vec![alpha_record(
        "A123",
        Some("P001"),
        Some("Authorization expired"),
        "denied",
        "2025-07-01",
    )];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.metrics.accepted, 1);
    assert_eq!(outcome.metrics.excluded, 1);
    assert_eq!(outcome.metrics.flagged, 0);
}

#[test]
fn test_scenario_c_missing_patient_is_excluded_by_rules() {
    let rows = vec![alpha_record(
        "A123",
        None,
        Some("Incorrect NPI"),
        "denied",
        "2025-07-01",
    )];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.metrics.excluded, 1);
}

#[test]
fn test_scenario_d_unparsable_date_is_rejected() {
    let rows = vec![alpha_record(
        "A123",
        Some("P001"),
        Some("Incorrect NPI"),
        "denied",
        "not-a-date",
    )];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.metrics.rejected, 1);
    assert_eq!(outcome.metrics.accepted, 0);
    assert_eq!(outcome.rejections.len(), 1);
    assert_eq!(
        outcome.rejections[0].error.to_string(),
        "unparsable date: not-a-date"
    );
}

// ============================================================================
// Batch behavior
// ============================================================================

#[test]
fn test_mixed_batch_isolates_failures_and_preserves_order() {
    let rows = vec![
        alpha_record("A1", Some("P1"), Some("Incorrect NPI"), "denied", "2025-07-01"),
        alpha_record("A2", Some("P2"), Some("unclear"), "denied", "2025-07-01"),
        alpha_record("A3", Some("P3"), Some("Missing modifier"), "denied", "bogus"),
        alpha_record("A4", Some("P4"), Some("missing mod"), "denied", "2025-07-02"),
        alpha_record("A5", Some("P5"), Some("Incorrect NPI"), "approved", "2025-07-01"),
        alpha_record("A6", Some("P6"), Some("wrong npi"), "denied", "2025-07-03"),
    ];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    // Candidate order matches input order among eligible records
    let ids: Vec<&str> = outcome
        .candidates
        .iter()
        .map(|c| c.claim_id.as_str())
        .collect();
    assert_eq!(ids, vec!["A1", "A4", "A6"]);

    assert_eq!(outcome.metrics.processed, 6);
    assert_eq!(outcome.metrics.rejected, 1);
    assert_eq!(outcome.metrics.accepted, 5);
    assert_eq!(outcome.metrics.flagged, 3);
    assert_eq!(outcome.metrics.excluded, 2);
}

#[test]
fn test_metrics_by_source_counts_the_run() {
    let rows = vec![
        alpha_record("A1", Some("P1"), Some("Incorrect NPI"), "denied", "2025-07-01"),
        alpha_record("A2", Some("P2"), Some("Incorrect NPI"), "denied", "oops"),
    ];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    let per_source = &outcome.metrics.by_source["alpha"];
    assert_eq!(per_source.processed, 2);
    assert_eq!(per_source.flagged, 1);
    assert_eq!(per_source.rejected, 1);
    assert_eq!(outcome.metrics.by_source.len(), 1);
}

#[test]
fn test_beta_source_maps_through_its_adapter() {
    let rows = vec![record(&[
        ("id", Some("B9")),
        ("member", Some("P5")),
        ("code", Some("99444")),
        ("error_msg", Some("prior auth required")),
        ("status", Some("denied")),
        ("date", Some("2025-07-10")),
    ])];
    let outcome = pipeline().run(rows, "beta").unwrap();

    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].claim_id, "B9");
    assert_eq!(outcome.candidates[0].source_system, "beta");
    assert_eq!(
        outcome.candidates[0].recommended_changes,
        "Obtain prior authorization and include reference number"
    );
}

#[test]
fn test_unknown_source_fails_the_whole_run() {
    let rows = vec![alpha_record(
        "A1",
        Some("P1"),
        Some("Incorrect NPI"),
        "denied",
        "2025-07-01",
    )];
    let err = pipeline().run(rows, "gamma").unwrap_err();
    assert!(matches!(err, PipelineError::UnknownSource(source) if source == "gamma"));
}

#[test]
fn test_unknown_status_is_rejected_not_accepted() {
    let rows = vec![alpha_record(
        "A1",
        Some("P1"),
        Some("Incorrect NPI"),
        "pending",
        "2025-07-01",
    )];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    assert_eq!(outcome.metrics.rejected, 1);
    assert_eq!(outcome.metrics.accepted, 0);
    assert_eq!(
        outcome.rejections[0].error.to_string(),
        "unknown status: pending"
    );
}

#[test]
fn test_missing_claim_id_is_rejected_with_original_record() {
    let raw = alpha_record("  ", Some("P1"), None, "denied", "2025-07-01");
    let outcome = pipeline().run(vec![raw.clone()], "alpha").unwrap();

    assert_eq!(outcome.rejections.len(), 1);
    assert_eq!(outcome.rejections[0].raw, raw);
}

#[test]
fn test_rejection_serializes_raw_and_reason() {
    let rows = vec![alpha_record("A1", None, None, "denied", "junk")];
    let outcome = pipeline().run(rows, "alpha").unwrap();

    let json = serde_json::to_value(&outcome.rejections[0]).unwrap();
    assert_eq!(json["reason"], "unparsable date: junk");
    assert_eq!(json["raw"]["claim_id"], "A1");
    assert!(json["raw"]["patient_id"].is_null());
}

#[test]
fn test_empty_batch_yields_empty_outcome() {
    let outcome = pipeline().run(Vec::new(), "alpha").unwrap();
    assert_eq!(outcome.metrics.processed, 0);
    assert!(outcome.candidates.is_empty());
    assert!(outcome.rejections.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn arbitrary_record_strategy() -> impl Strategy<Value = RawRecord> {
    let key = prop_oneof![
        Just("claim_id".to_string()),
        Just("patient_id".to_string()),
        Just("denial_reason".to_string()),
        Just("status".to_string()),
        Just("submitted_at".to_string()),
        "[a-z_]{1,12}",
    ];
    let value = proptest::option::of("\\PC{0,24}");
    proptest::collection::btree_map(key, value, 0..8)
}

proptest! {
    /// Arbitrarily malformed batches never error and always balance.
    #[test]
    fn prop_metrics_invariants_hold_for_any_batch(
        rows in proptest::collection::vec(arbitrary_record_strategy(), 0..32)
    ) {
        let expected = rows.len() as u64;
        let outcome = pipeline().run(rows, "alpha").unwrap();
        let metrics = &outcome.metrics;

        prop_assert_eq!(metrics.processed, expected);
        prop_assert_eq!(metrics.processed, metrics.accepted + metrics.rejected);
        prop_assert_eq!(metrics.accepted, metrics.flagged + metrics.excluded);
        prop_assert_eq!(outcome.candidates.len() as u64, metrics.flagged);
        prop_assert_eq!(outcome.rejections.len() as u64, metrics.rejected);
    }
}
