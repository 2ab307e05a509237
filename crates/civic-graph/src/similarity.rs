//! Fuzzy text matching for locations and descriptions
//!
//! Similarity is `1 - levenshtein / max_len` over normalized text, so it
//! always lies in [0, 1] and two empty strings are identical.

/// Lowercase, trim, and collapse whitespace/comma/period runs to single spaces
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Levenshtein distance over characters
///
/// Insertion, deletion and substitution each cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// Similarity of two strings in [0, 1], after normalization
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - edit_distance(&a, &b) as f64 / max_len as f64
}

/// Whether two locations refer to the same place
///
/// A blank location never matches anything. Exact normalized matches
/// short-circuit; otherwise similarity must reach `threshold`.
pub fn is_same_location(a: &str, b: &str, threshold: f64) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    // Checked after normalization, so whitespace-only locations are blank too
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    similarity(&a, &b) >= threshold
}

/// Whether two descriptions are similar (strictly above `threshold`)
pub fn is_similar_description(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) > threshold
}
