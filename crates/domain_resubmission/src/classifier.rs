//! Denial-reason classification
//!
//! Maps free-text denial reasons onto a closed taxonomy under a selectable
//! strategy. Classification is a pure function of `(text, mode)`: no I/O, no
//! shared mutable state, identical input always yields identical output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::normalized_similarity;

/// Classification labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonLabel {
    Retryable,
    NonRetryable,
    Ambiguous,
    Unknown,
}

/// Outcome of classifying one denial reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: ReasonLabel,
    /// Fixed-vocabulary reason; `Some` only for retryable/non-retryable
    pub canonical_reason: Option<String>,
}

impl Classification {
    pub fn retryable(reason: impl Into<String>) -> Self {
        Self {
            label: ReasonLabel::Retryable,
            canonical_reason: Some(reason.into()),
        }
    }

    pub fn non_retryable(reason: impl Into<String>) -> Self {
        Self {
            label: ReasonLabel::NonRetryable,
            canonical_reason: Some(reason.into()),
        }
    }

    pub fn ambiguous() -> Self {
        Self {
            label: ReasonLabel::Ambiguous,
            canonical_reason: None,
        }
    }
}

/// Classification strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifierMode {
    #[serde(rename = "rules")]
    Rules,
    #[serde(rename = "heuristic")]
    Heuristic,
    #[serde(rename = "rules+heuristic")]
    RulesPlusHeuristic,
    #[serde(rename = "mock-model")]
    MockModel,
}

impl ClassifierMode {
    pub const ALL: [ClassifierMode; 4] = [
        ClassifierMode::Rules,
        ClassifierMode::Heuristic,
        ClassifierMode::RulesPlusHeuristic,
        ClassifierMode::MockModel,
    ];

    fn runs_rules(self) -> bool {
        matches!(self, ClassifierMode::Rules | ClassifierMode::RulesPlusHeuristic)
    }

    fn runs_heuristic(self) -> bool {
        matches!(self, ClassifierMode::Heuristic | ClassifierMode::RulesPlusHeuristic)
    }
}

impl fmt::Display for ClassifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassifierMode::Rules => "rules",
            ClassifierMode::Heuristic => "heuristic",
            ClassifierMode::RulesPlusHeuristic => "rules+heuristic",
            ClassifierMode::MockModel => "mock-model",
        };
        f.write_str(name)
    }
}

/// Error for unrecognized mode names
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown classifier mode: {0}")]
pub struct ParseModeError(String);

impl FromStr for ClassifierMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rules" => Ok(ClassifierMode::Rules),
            "heuristic" => Ok(ClassifierMode::Heuristic),
            "rules+heuristic" => Ok(ClassifierMode::RulesPlusHeuristic),
            "mock-model" => Ok(ClassifierMode::MockModel),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Acceptance threshold for normalized edit similarity (1.0 = identical)
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.82;

static DEFAULT_RETRYABLE: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "Incorrect NPI".to_string(),
        "Missing modifier".to_string(),
        "Prior auth required".to_string(),
    ]
});

static DEFAULT_NON_RETRYABLE: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "Authorization expired".to_string(),
        "Incorrect provider type".to_string(),
    ]
});

static DEFAULT_SYNONYMS: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "prior authorization required".to_string(),
            "Prior auth required".to_string(),
        ),
        ("missing mod".to_string(), "Missing modifier".to_string()),
        ("wrong npi".to_string(), "Incorrect NPI".to_string()),
    ])
});

/// Classifier vocabulary and tuning
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Strategy the pipeline selects for this run
    pub mode: ClassifierMode,
    /// Canonical reasons a claim can be fixed and resubmitted for
    pub retryable: Vec<String>,
    /// Canonical reasons that rule resubmission out
    pub non_retryable: Vec<String>,
    /// Free-text phrase to retryable canonical reason
    pub synonyms: BTreeMap<String, String>,
    pub similarity_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::RulesPlusHeuristic,
            retryable: DEFAULT_RETRYABLE.clone(),
            non_retryable: DEFAULT_NON_RETRYABLE.clone(),
            synonyms: DEFAULT_SYNONYMS.clone(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// A configured classifier
///
/// Owns sorted copies of the reason sets so scans iterate in a fixed order
/// and results are reproducible for identical input.
#[derive(Debug, Clone)]
pub struct Classifier {
    retryable: Vec<String>,
    non_retryable: Vec<String>,
    synonyms: BTreeMap<String, String>,
    threshold: f64,
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let mut retryable = config.retryable.clone();
        retryable.sort();
        let mut non_retryable = config.non_retryable.clone();
        non_retryable.sort();
        Self {
            retryable,
            non_retryable,
            synonyms: config.synonyms.clone(),
            threshold: config.similarity_threshold,
        }
    }

    /// Classifies one denial reason under the selected strategy.
    ///
    /// Null, empty, and whitespace-only input is ambiguous in every mode,
    /// and anything the selected stages do not match falls through to
    /// ambiguous.
    pub fn classify(&self, reason: Option<&str>, mode: ClassifierMode) -> Classification {
        let Some(reason) = reason else {
            return Classification::ambiguous();
        };
        let raw = reason.trim();
        if raw.is_empty() {
            return Classification::ambiguous();
        }
        let lowered = raw.to_lowercase();

        if mode.runs_rules() {
            if let Some(hit) = self.match_rules(&lowered) {
                return hit;
            }
        }

        if mode.runs_heuristic() {
            if let Some(hit) = self.match_heuristic(&lowered) {
                return hit;
            }
        }

        if mode == ClassifierMode::MockModel {
            return mock_model_classify(raw);
        }

        Classification::ambiguous()
    }

    /// Containment match: retryable set, then non-retryable set, then the
    /// synonym table, in that fixed order.
    fn match_rules(&self, lowered: &str) -> Option<Classification> {
        for known in &self.retryable {
            if lowered.contains(&known.to_lowercase()) {
                return Some(Classification::retryable(known.clone()));
            }
        }
        for known in &self.non_retryable {
            if lowered.contains(&known.to_lowercase()) {
                return Some(Classification::non_retryable(known.clone()));
            }
        }
        for (phrase, canonical) in &self.synonyms {
            if lowered.contains(phrase.as_str()) {
                return Some(Classification::retryable(canonical.clone()));
            }
        }
        None
    }

    /// Fuzzy matching probes only the retryable set; first reason meeting
    /// the threshold wins.
    fn match_heuristic(&self, lowered: &str) -> Option<Classification> {
        for known in &self.retryable {
            if normalized_similarity(lowered, &known.to_lowercase()) >= self.threshold {
                return Some(Classification::retryable(known.clone()));
            }
        }
        None
    }
}

/// Deterministic stand-in for an external classification model
///
/// Buckets the sum of character codes modulo 10, so the same text always
/// maps to the same label. Exists to exercise classification consumers
/// without a real model behind them; a real model slots in as another
/// `ClassifierMode` without touching eligibility or aggregation.
pub fn mock_model_classify(text: &str) -> Classification {
    let bucket = text.chars().map(|c| c as u64).sum::<u64>() % 10;
    if bucket < 3 {
        return Classification::retryable("Prior auth required");
    }
    if bucket < 6 {
        return Classification::non_retryable("Authorization expired");
    }
    Classification::ambiguous()
}
