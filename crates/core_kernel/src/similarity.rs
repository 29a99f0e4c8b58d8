//! Normalized edit similarity for fuzzy reason matching
//!
//! The classifier's heuristic mode compares free-text denial reasons against
//! a fixed vocabulary. Similarity is Levenshtein distance normalized by the
//! longer input, so `1.0` means identical and `0.0` means nothing in common.

/// Computes normalized Levenshtein similarity between two strings.
///
/// Returns a value in `[0.0, 1.0]` where `1.0` means identical.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - distance as f64 / len_a.max(len_b) as f64
}

/// Levenshtein distance over chars, two-row dynamic programming.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=chars_b.len()).collect();
    let mut current = vec![0usize; chars_b.len() + 1];

    for (i, ca) in chars_a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in chars_b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[chars_b.len()]
}
