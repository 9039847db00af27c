//! Search-text construction and keyword presence checks.

/// Join title and description with one space and lower-case the result.
///
/// Keywords spanning the join still match when the joined text happens to
/// contain them contiguously.
pub fn search_text(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

/// Keywords from `keywords` that occur anywhere in `text`, in list order.
///
/// `text` is expected to be lower-cased already. Each keyword appears at
/// most once in the result regardless of how often it occurs.
pub fn matched_keywords(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|k| text.contains(k))
        .collect()
}

/// Number of distinct keywords present in `text`.
pub fn count_present(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}
