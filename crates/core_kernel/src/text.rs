//! Text normalization for loosely structured source fields
//!
//! Upstream systems deliver free-text fields with inconsistent casing and
//! whitespace. These helpers canonicalize field values before any
//! classification runs against them.

/// Normalizes a free-text field value.
///
/// Trims the input, collapses internal whitespace runs to single spaces, and
/// maps values that are empty after trimming to `None`. Applying this twice
/// yields the same result as applying it once.
pub fn normalize_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Title-cases a denial reason, preserving allow-listed acronyms.
///
/// Each word is capitalized with the remainder lowered, except words matching
/// an entry in `acronyms` (case-insensitive), which are rendered exactly as
/// the allow-list spells them ("npi" -> "NPI"). Returns `None` when the input
/// normalizes to nothing.
pub fn title_case_reason(value: &str, acronyms: &[String]) -> Option<String> {
    let text = normalize_field(value)?;
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            match acronyms.iter().find(|acronym| acronym.eq_ignore_ascii_case(word)) {
                Some(acronym) => acronym.clone(),
                None => capitalize(word),
            }
        })
        .collect();
    Some(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
