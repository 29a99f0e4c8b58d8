//! Tests for resubmission eligibility evaluation

use chrono::{NaiveDate, TimeZone, Utc};
use domain_resubmission::classifier::Classification;
use domain_resubmission::eligibility::{evaluate, AMBIGUOUS_EXCLUSION, NOT_ELIGIBLE_BY_RULES};
use domain_resubmission::{ClaimStatus, EligibilityDecision, NormalizedClaim, ReasonLabel};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 30).unwrap()
}

fn denied_claim(submitted: &str) -> NormalizedClaim {
    let date = NaiveDate::parse_from_str(submitted, "%Y-%m-%d").unwrap();
    NormalizedClaim {
        claim_id: "A123".to_string(),
        patient_id: Some("P001".to_string()),
        procedure_code: Some("99213".to_string()),
        denial_reason: Some("Incorrect NPI".to_string()),
        status: ClaimStatus::Denied,
        submitted_at: Utc
            .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()),
        source_system: "alpha".to_string(),
    }
}

fn retryable() -> Classification {
    Classification::retryable("Incorrect NPI")
}

fn assert_exactly_one_reason(decision: &EligibilityDecision) {
    assert_eq!(decision.eligible, decision.eligibility_reason.is_some());
    assert_eq!(decision.eligible, decision.exclusion_reason.is_none());
}

#[test]
fn test_denied_old_retryable_claim_is_eligible() {
    let decision = evaluate(&denied_claim("2025-07-01"), &retryable(), reference_date());
    assert!(decision.eligible);
    assert_eq!(decision.eligibility_reason.as_deref(), Some("Incorrect NPI"));
    assert_exactly_one_reason(&decision);
}

#[test]
fn test_approved_claim_is_excluded_by_rules() {
    let mut claim = denied_claim("2025-07-01");
    claim.status = ClaimStatus::Approved;
    let decision = evaluate(&claim, &retryable(), reference_date());
    assert!(!decision.eligible);
    assert_eq!(decision.exclusion_reason.as_deref(), Some(NOT_ELIGIBLE_BY_RULES));
    assert_exactly_one_reason(&decision);
}

#[test]
fn test_missing_patient_is_excluded_by_rules_regardless_of_reason() {
    let mut claim = denied_claim("2025-07-01");
    claim.patient_id = None;
    let decision = evaluate(&claim, &retryable(), reference_date());
    assert_eq!(decision.exclusion_reason.as_deref(), Some(NOT_ELIGIBLE_BY_RULES));

    // Same exclusion code even when classification is non-retryable
    let decision = evaluate(
        &claim,
        &Classification::non_retryable("Authorization expired"),
        reference_date(),
    );
    assert_eq!(decision.exclusion_reason.as_deref(), Some(NOT_ELIGIBLE_BY_RULES));
}

#[test]
fn test_age_gate_is_strictly_more_than_seven_days() {
    // Exactly seven days old: not eligible
    let decision = evaluate(&denied_claim("2025-07-23"), &retryable(), reference_date());
    assert_eq!(decision.exclusion_reason.as_deref(), Some(NOT_ELIGIBLE_BY_RULES));

    // Eight days old: eligible
    let decision = evaluate(&denied_claim("2025-07-22"), &retryable(), reference_date());
    assert!(decision.eligible);
}

#[test]
fn test_non_retryable_claim_is_excluded_under_its_canonical_reason() {
    let decision = evaluate(
        &denied_claim("2025-07-01"),
        &Classification::non_retryable("Authorization expired"),
        reference_date(),
    );
    assert!(!decision.eligible);
    assert_eq!(decision.exclusion_reason.as_deref(), Some("Authorization expired"));
    assert_exactly_one_reason(&decision);
}

#[test]
fn test_ambiguous_claim_is_excluded_as_ambiguous() {
    let decision = evaluate(
        &denied_claim("2025-07-01"),
        &Classification::ambiguous(),
        reference_date(),
    );
    assert_eq!(decision.exclusion_reason.as_deref(), Some(AMBIGUOUS_EXCLUSION));
}

#[test]
fn test_unknown_label_is_excluded_as_ambiguous() {
    let classification = Classification {
        label: ReasonLabel::Unknown,
        canonical_reason: None,
    };
    let decision = evaluate(&denied_claim("2025-07-01"), &classification, reference_date());
    assert_eq!(decision.exclusion_reason.as_deref(), Some(AMBIGUOUS_EXCLUSION));
}

#[test]
fn test_retryable_without_canonical_reason_is_not_eligible() {
    let classification = Classification {
        label: ReasonLabel::Retryable,
        canonical_reason: None,
    };
    let decision = evaluate(&denied_claim("2025-07-01"), &classification, reference_date());
    assert!(!decision.eligible);
    assert_eq!(decision.exclusion_reason.as_deref(), Some(AMBIGUOUS_EXCLUSION));
}
