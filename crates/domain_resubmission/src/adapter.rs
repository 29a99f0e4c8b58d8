//! Source adapters
//!
//! Each upstream system registers an adapter declaring how its field names
//! map onto the canonical claim shape and which canonical fields are
//! required. Adding a source means registering an adapter; nothing in the
//! normalizer branches on source tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use core_kernel::{normalize_field, parse_timestamp, title_case_reason};

use crate::claim::{ClaimStatus, NormalizedClaim, RawRecord};
use crate::config::NormalizeOptions;
use crate::error::NormalizeError;

/// Canonical field names accepted in `required_fields`
pub mod fields {
    pub const CLAIM_ID: &str = "claim_id";
    pub const PATIENT_ID: &str = "patient_id";
    pub const PROCEDURE_CODE: &str = "procedure_code";
    pub const DENIAL_REASON: &str = "denial_reason";
}

/// Mapping from canonical claim fields to one source's field names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    pub claim_id: String,
    pub patient_id: String,
    pub procedure_code: String,
    pub denial_reason: String,
    pub status: String,
    pub submitted_at: String,
}

/// Field mapping and validation rules for one upstream system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceAdapter {
    /// Source tag this adapter serves
    pub source: String,
    pub field_map: FieldMap,
    /// Canonical field names that must survive normalization
    pub required_fields: Vec<String>,
}

impl SourceAdapter {
    /// The `alpha` source already uses canonical field names.
    pub fn alpha() -> Self {
        Self {
            source: "alpha".to_string(),
            field_map: FieldMap {
                claim_id: "claim_id".to_string(),
                patient_id: "patient_id".to_string(),
                procedure_code: "procedure_code".to_string(),
                denial_reason: "denial_reason".to_string(),
                status: "status".to_string(),
                submitted_at: "submitted_at".to_string(),
            },
            required_fields: vec![fields::CLAIM_ID.to_string()],
        }
    }

    /// The `beta` source delivers terse field names.
    pub fn beta() -> Self {
        Self {
            source: "beta".to_string(),
            field_map: FieldMap {
                claim_id: "id".to_string(),
                patient_id: "member".to_string(),
                procedure_code: "code".to_string(),
                denial_reason: "error_msg".to_string(),
                status: "status".to_string(),
                submitted_at: "date".to_string(),
            },
            required_fields: vec![fields::CLAIM_ID.to_string()],
        }
    }

    /// Converts one raw record into a canonical claim.
    pub fn apply(
        &self,
        raw: &RawRecord,
        options: &NormalizeOptions,
    ) -> Result<NormalizedClaim, NormalizeError> {
        let claim_id = self.lookup(raw, &self.field_map.claim_id);
        let patient_id = self.lookup(raw, &self.field_map.patient_id);
        let procedure_code = self.lookup(raw, &self.field_map.procedure_code);
        let denial_reason = self
            .lookup(raw, &self.field_map.denial_reason)
            .and_then(|text| title_case_reason(&text, &options.acronyms));

        let status_text = self.lookup(raw, &self.field_map.status).unwrap_or_default();
        let status = ClaimStatus::parse(&status_text)?;

        let submitted_text = self
            .lookup(raw, &self.field_map.submitted_at)
            .unwrap_or_default();
        let submitted_at = parse_timestamp(&submitted_text)
            .map_err(|_| NormalizeError::UnparsableDate(submitted_text.clone()))?;

        for name in &self.required_fields {
            let present = match name.as_str() {
                fields::CLAIM_ID => claim_id.is_some(),
                fields::PATIENT_ID => patient_id.is_some(),
                fields::PROCEDURE_CODE => procedure_code.is_some(),
                fields::DENIAL_REASON => denial_reason.is_some(),
                _ => true,
            };
            if !present {
                return Err(NormalizeError::MissingRequiredField(name.clone()));
            }
        }

        // claim_id is required whether or not the registration lists it
        let claim_id = claim_id
            .ok_or_else(|| NormalizeError::MissingRequiredField(fields::CLAIM_ID.to_string()))?;

        Ok(NormalizedClaim {
            claim_id,
            patient_id,
            procedure_code,
            denial_reason,
            status,
            submitted_at,
            source_system: self.source.clone(),
        })
    }

    fn lookup(&self, raw: &RawRecord, field: &str) -> Option<String> {
        raw.get(field)
            .and_then(|value| value.as_deref())
            .and_then(normalize_field)
    }
}

/// Registered table of source adapters keyed by source tag
#[derive(Debug, Clone)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, SourceAdapter>,
}

impl AdapterRegistry {
    /// Creates an empty registry
    pub fn empty() -> Self {
        Self {
            adapters: BTreeMap::new(),
        }
    }

    /// Registry with the built-in `alpha` and `beta` adapters
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(SourceAdapter::alpha());
        registry.register(SourceAdapter::beta());
        registry
    }

    /// Registers an adapter, replacing any existing one for the same source
    pub fn register(&mut self, adapter: SourceAdapter) {
        self.adapters.insert(adapter.source.clone(), adapter);
    }

    /// Looks up the adapter for a source tag
    pub fn get(&self, source: &str) -> Option<&SourceAdapter> {
        self.adapters.get(source)
    }

    /// Registered source tags, in sorted order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
