//! Raw-record builders for the built-in sources.
//!
//! Defaults describe a denied, retryable claim old enough to pass the age
//! gate under the default configuration, so a plain `build()` produces an
//! eligible record and tests tweak only the field under test.

use domain_resubmission::RawRecord;

fn collect(entries: [(&str, Option<String>); 6]) -> RawRecord {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Builder for `alpha`-shaped raw records.
#[derive(Debug, Clone)]
pub struct AlphaRecordBuilder {
    claim_id: Option<String>,
    patient_id: Option<String>,
    procedure_code: Option<String>,
    denial_reason: Option<String>,
    status: Option<String>,
    submitted_at: Option<String>,
}

impl Default for AlphaRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaRecordBuilder {
    pub fn new() -> Self {
        Self {
            claim_id: Some("A123".to_string()),
            patient_id: Some("P001".to_string()),
            procedure_code: Some("99213".to_string()),
            denial_reason: Some("Incorrect NPI".to_string()),
            status: Some("denied".to_string()),
            submitted_at: Some("2025-07-01".to_string()),
        }
    }

    pub fn with_claim_id(mut self, value: impl Into<String>) -> Self {
        self.claim_id = Some(value.into());
        self
    }

    pub fn without_claim_id(mut self) -> Self {
        self.claim_id = None;
        self
    }

    pub fn with_patient_id(mut self, value: impl Into<String>) -> Self {
        self.patient_id = Some(value.into());
        self
    }

    pub fn without_patient_id(mut self) -> Self {
        self.patient_id = None;
        self
    }

    pub fn with_denial_reason(mut self, value: impl Into<String>) -> Self {
        self.denial_reason = Some(value.into());
        self
    }

    pub fn without_denial_reason(mut self) -> Self {
        self.denial_reason = None;
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_submitted_at(mut self, value: impl Into<String>) -> Self {
        self.submitted_at = Some(value.into());
        self
    }

    pub fn build(self) -> RawRecord {
        collect([
            ("claim_id", self.claim_id),
            ("patient_id", self.patient_id),
            ("procedure_code", self.procedure_code),
            ("denial_reason", self.denial_reason),
            ("status", self.status),
            ("submitted_at", self.submitted_at),
        ])
    }
}

/// Builder for `beta`-shaped raw records.
#[derive(Debug, Clone)]
pub struct BetaRecordBuilder {
    id: Option<String>,
    member: Option<String>,
    code: Option<String>,
    error_msg: Option<String>,
    status: Option<String>,
    date: Option<String>,
}

impl Default for BetaRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BetaRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: Some("B987".to_string()),
            member: Some("P010".to_string()),
            code: Some("99214".to_string()),
            error_msg: Some("Incorrect provider type".to_string()),
            status: Some("denied".to_string()),
            date: Some("2025-07-01T00:00:00".to_string()),
        }
    }

    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn with_member(mut self, value: impl Into<String>) -> Self {
        self.member = Some(value.into());
        self
    }

    pub fn without_member(mut self) -> Self {
        self.member = None;
        self
    }

    pub fn with_error_msg(mut self, value: impl Into<String>) -> Self {
        self.error_msg = Some(value.into());
        self
    }

    pub fn without_error_msg(mut self) -> Self {
        self.error_msg = None;
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_date(mut self, value: impl Into<String>) -> Self {
        self.date = Some(value.into());
        self
    }

    pub fn build(self) -> RawRecord {
        collect([
            ("id", self.id),
            ("member", self.member),
            ("code", self.code),
            ("error_msg", self.error_msg),
            ("status", self.status),
            ("date", self.date),
        ])
    }
}
