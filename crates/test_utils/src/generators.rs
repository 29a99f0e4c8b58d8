//! Property-based record strategies.

use domain_resubmission::RawRecord;
use proptest::prelude::*;

use crate::builders::AlphaRecordBuilder;

/// Denial reasons mixing vocabulary hits, near-misses, and free text.
pub fn denial_reason_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Incorrect NPI".to_string()),
        Just("Missing modifier".to_string()),
        Just("Prior auth required".to_string()),
        Just("Authorization expired".to_string()),
        Just("Incorrect provider type".to_string()),
        Just("missing modifer".to_string()),
        "[A-Za-z ]{0,32}",
    ]
}

/// Status values, valid and otherwise.
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("approved".to_string()),
        Just("denied".to_string()),
        Just("DENIED".to_string()),
        "[a-z]{3,10}",
    ]
}

/// Submitted-at text in the accepted shapes plus garbage.
pub fn submitted_at_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("2025-07-01".to_string()),
        Just("2025-07-10T10:00:00Z".to_string()),
        Just("2025-07-28 14:30:00".to_string()),
        Just("07/03/2025".to_string()),
        "[a-z-]{1,12}",
    ]
}

/// Alpha-shaped records of varying validity.
pub fn alpha_record_strategy() -> impl Strategy<Value = RawRecord> {
    (
        "[A-Z][0-9]{2,5}",
        proptest::option::of("[A-Z][0-9]{2,4}"),
        proptest::option::of(denial_reason_strategy()),
        status_strategy(),
        submitted_at_strategy(),
    )
        .prop_map(|(claim_id, patient, reason, status, submitted)| {
            let mut builder = AlphaRecordBuilder::new()
                .with_claim_id(claim_id)
                .with_status(status)
                .with_submitted_at(submitted);
            builder = match patient {
                Some(p) => builder.with_patient_id(p),
                None => builder.without_patient_id(),
            };
            builder = match reason {
                Some(r) => builder.with_denial_reason(r),
                None => builder.without_denial_reason(),
            };
            builder.build()
        })
}
