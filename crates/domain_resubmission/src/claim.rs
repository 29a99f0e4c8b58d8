//! Canonical claim shape shared by every source adapter

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// A raw upstream record: source-specific field names mapped to nullable
/// string values. One per input row, never mutated.
pub type RawRecord = BTreeMap<String, Option<String>>;

/// Claim status after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Approved,
    Denied,
}

impl ClaimStatus {
    /// Parses a status value, case- and whitespace-insensitively.
    pub fn parse(value: &str) -> Result<Self, NormalizeError> {
        match value.trim().to_lowercase().as_str() {
            "approved" => Ok(ClaimStatus::Approved),
            "denied" => Ok(ClaimStatus::Denied),
            _ => Err(NormalizeError::UnknownStatus(value.trim().to_string())),
        }
    }
}

/// A claim in canonical shape, produced by a source adapter
///
/// `claim_id` is non-empty once this type exists, and `submitted_at` always
/// carries an explicit UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedClaim {
    pub claim_id: String,
    pub patient_id: Option<String>,
    pub procedure_code: Option<String>,
    /// Title-cased denial reason, allow-listed acronyms preserved
    pub denial_reason: Option<String>,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    pub source_system: String,
}
