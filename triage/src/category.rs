//! Category suggestion against a caller-supplied taxonomy.
//!
//! A candidate is scored by looking up its lower-cased name in the fixed
//! category keyword table and counting distinct keywords present in the
//! complaint text. Candidates whose names are not in the table (for
//! example after a rename) always score zero.

use crate::keywords::{category_keywords, CATEGORY_KEYWORDS, OTHER_CATEGORY};
use crate::text::{count_present, search_text};
use serde::{Deserialize, Serialize};

/// A category the complaint may be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCandidate {
    pub id: String,
    pub name: String,
    /// Shown to users; not used for scoring.
    #[serde(default)]
    pub description: String,
}

impl CategoryCandidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    fn is_other(&self) -> bool {
        self.name.to_lowercase() == OTHER_CATEGORY
    }
}

/// Score of one candidate for one complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub id: String,
    pub name: String,
    pub score: usize,
}

/// How the suggested id was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionFallback {
    /// A candidate scored above zero
    Matched,
    /// Nothing scored; used the candidate named "other"
    Other,
    /// Nothing scored and no "other"; used the first candidate
    First,
    /// No candidates supplied
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// Empty when no candidates were supplied
    pub id: String,
    pub score: usize,
    pub fallback: SuggestionFallback,
}

/// Score every candidate, preserving input order.
pub fn score_categories(
    title: &str,
    description: &str,
    candidates: &[CategoryCandidate],
) -> Vec<CategoryScore> {
    let text = search_text(title, description);
    candidates
        .iter()
        .map(|c| CategoryScore {
            id: c.id.clone(),
            name: c.name.clone(),
            score: count_present(&text, category_keywords(&c.name)),
        })
        .collect()
}

/// Suggest a category id for a complaint.
///
/// Returns an empty string only when `candidates` is empty.
pub fn suggest_category(
    title: &str,
    description: &str,
    candidates: &[CategoryCandidate],
) -> String {
    suggest_category_detailed(title, description, candidates).id
}

/// Suggest a category id and report how it was chosen.
pub fn suggest_category_detailed(
    title: &str,
    description: &str,
    candidates: &[CategoryCandidate],
) -> CategorySuggestion {
    let scores = score_categories(title, description, candidates);

    // Strictly greater keeps the earliest candidate on ties.
    let mut best: Option<&CategoryScore> = None;
    for s in &scores {
        if best.map_or(true, |b| s.score > b.score) {
            best = Some(s);
        }
    }

    if let Some(b) = best.filter(|b| b.score > 0) {
        return CategorySuggestion {
            id: b.id.clone(),
            score: b.score,
            fallback: SuggestionFallback::Matched,
        };
    }

    if let Some(other) = candidates
        .iter()
        .find(|c| c.is_other())
        .filter(|c| !c.id.is_empty())
    {
        return CategorySuggestion {
            id: other.id.clone(),
            score: 0,
            fallback: SuggestionFallback::Other,
        };
    }

    match candidates.first() {
        Some(first) => CategorySuggestion {
            id: first.id.clone(),
            score: 0,
            fallback: SuggestionFallback::First,
        },
        None => CategorySuggestion {
            id: String::new(),
            score: 0,
            fallback: SuggestionFallback::None,
        },
    }
}

/// The seeded campus taxonomy: one entry per keyword-table category plus
/// "Other", with slug ids.
pub fn default_catalog() -> Vec<CategoryCandidate> {
    let mut catalog: Vec<CategoryCandidate> = CATEGORY_KEYWORDS
        .iter()
        .map(|(name, _)| CategoryCandidate::new(slug(name), display_name(name), ""))
        .collect();
    catalog.push(CategoryCandidate::new(
        OTHER_CATEGORY,
        "Other",
        "Anything that does not fit another category",
    ));
    catalog
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn display_name(name: &str) -> String {
    name.split(' ')
        .map(|word| match word {
            "it" => "IT".to_string(),
            w => {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
