//! Eligibility evaluation for resubmission
//!
//! Combines a canonical claim with its classification into a binary
//! decision. The reference date comes from configuration, never wall-clock
//! time, so runs are reproducible against historical input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::claim::{ClaimStatus, NormalizedClaim};
use crate::classifier::{Classification, ReasonLabel};

/// Exclusion code for claims failing the gating conditions
pub const NOT_ELIGIBLE_BY_RULES: &str = "Not eligible by rules";

/// Exclusion code for claims whose classification carries no canonical reason
pub const AMBIGUOUS_EXCLUSION: &str = "Ambiguous";

/// Minimum claim age in days before resubmission is considered
const MIN_AGE_DAYS: i64 = 7;

/// Outcome of evaluating one claim
///
/// Exactly one of `eligibility_reason`/`exclusion_reason` is set, matching
/// the `eligible` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub eligibility_reason: Option<String>,
    pub exclusion_reason: Option<String>,
}

impl EligibilityDecision {
    fn eligible(reason: String) -> Self {
        Self {
            eligible: true,
            eligibility_reason: Some(reason),
            exclusion_reason: None,
        }
    }

    fn excluded(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            eligibility_reason: None,
            exclusion_reason: Some(reason.into()),
        }
    }
}

/// Decides whether a claim is a resubmission candidate.
///
/// A claim is eligible when it was denied, names a patient, is more than
/// seven days old relative to `reference_date`, and its denial reason
/// classified as retryable with a canonical reason. Claims failing any of
/// the first three conditions are excluded as "Not eligible by rules"
/// regardless of classification; claims passing them but not retryable are
/// excluded under the non-retryable canonical reason, or "Ambiguous" when
/// the classifier produced none.
pub fn evaluate(
    claim: &NormalizedClaim,
    classification: &Classification,
    reference_date: NaiveDate,
) -> EligibilityDecision {
    let age_days = (reference_date - claim.submitted_at.date_naive()).num_days();
    let gated = claim.status == ClaimStatus::Denied
        && claim.patient_id.is_some()
        && age_days > MIN_AGE_DAYS;

    if !gated {
        return EligibilityDecision::excluded(NOT_ELIGIBLE_BY_RULES);
    }

    match (classification.label, classification.canonical_reason.as_deref()) {
        (ReasonLabel::Retryable, Some(reason)) if !reason.is_empty() => {
            EligibilityDecision::eligible(reason.to_string())
        }
        (ReasonLabel::NonRetryable, Some(reason)) => EligibilityDecision::excluded(reason),
        _ => EligibilityDecision::excluded(AMBIGUOUS_EXCLUSION),
    }
}
