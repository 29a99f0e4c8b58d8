//! Remediation recommendations for canonical denial reasons

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fallback when a canonical reason has no mapped template
pub const FALLBACK_RECOMMENDATION: &str = "Review claim details and resubmit if appropriate";

static DEFAULT_TEMPLATES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "Missing modifier".to_string(),
            "Add the appropriate billing modifier and resubmit".to_string(),
        ),
        (
            "Incorrect NPI".to_string(),
            "Review NPI number and resubmit".to_string(),
        ),
        (
            "Prior auth required".to_string(),
            "Obtain prior authorization and include reference number".to_string(),
        ),
    ])
});

/// Static table mapping canonical reasons to remediation instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTable {
    templates: BTreeMap<String, String>,
    fallback: String,
}

impl RecommendationTable {
    pub fn new(templates: BTreeMap<String, String>, fallback: impl Into<String>) -> Self {
        Self {
            templates,
            fallback: fallback.into(),
        }
    }

    /// Looks up the remediation for a canonical reason.
    ///
    /// Unmapped reasons fall back to a generic instruction; there is no
    /// failure mode.
    pub fn recommend(&self, reason: &str) -> &str {
        self.templates
            .get(reason)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.clone(),
            fallback: FALLBACK_RECOMMENDATION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_reasons_have_specific_instructions() {
        let table = RecommendationTable::default();
        assert_eq!(table.recommend("Incorrect NPI"), "Review NPI number and resubmit");
        assert_eq!(
            table.recommend("Prior auth required"),
            "Obtain prior authorization and include reference number"
        );
    }

    #[test]
    fn test_unmapped_reason_falls_back() {
        let table = RecommendationTable::default();
        assert_eq!(table.recommend("Authorization expired"), FALLBACK_RECOMMENDATION);
        assert_eq!(table.recommend(""), FALLBACK_RECOMMENDATION);
    }
}
