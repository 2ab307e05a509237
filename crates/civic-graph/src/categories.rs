//! Category relatedness table
//!
//! Lookup is forward-only: the source category must be a key exactly as
//! written, while the target is matched case-insensitively. "Water &
//! Sanitation" relates to "Waste Management", which relates to "Parks &
//! Recreation", but the first and last are not related to each other.

const RELATED_CATEGORIES: &[(&str, &[&str])] = &[
    ("Water & Sanitation", &["Roads & Transport", "Waste Management"]),
    ("Roads & Transport", &["Water & Sanitation", "Electricity"]),
    ("Electricity", &["Roads & Transport", "Public Safety"]),
    ("Waste Management", &["Water & Sanitation", "Parks & Recreation"]),
    ("Parks & Recreation", &["Waste Management", "Public Safety"]),
    ("Emergency Services", &["Public Safety", "Electricity"]),
    ("Public Safety", &["Emergency Services", "Electricity", "Parks & Recreation"]),
    ("Housing", &["Water & Sanitation", "Electricity"]),
];

/// Categories considered adjacent to `category`, if it is in the table
pub fn related_categories(category: &str) -> Option<&'static [&'static str]> {
    RELATED_CATEGORIES
        .iter()
        .find(|(source, _)| *source == category)
        .map(|(_, related)| *related)
}

/// Case-insensitive equality that also folds non-ASCII letters
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Whether `target` is listed as related to `source`
pub fn are_related(source: &str, target: &str) -> bool {
    if source.is_empty() || target.is_empty() {
        return false;
    }

    related_categories(source)
        .map(|related| related.iter().any(|c| eq_ignore_case(c, target)))
        .unwrap_or(false)
}
