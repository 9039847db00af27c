//! Combined analysis for a complaint being filed.
//!
//! Runs the three heuristics against one complaint and resolves the
//! suggested category id back to its display name. Incomplete complaints
//! (blank title or description) are rejected instead of analyzed.

use crate::category::{suggest_category, CategoryCandidate};
use crate::error::{TriageError, TriageResult};
use crate::priority::{analyze_priority, PriorityLabel};
use crate::sentiment::{analyze_sentiment, SentimentLabel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Free text entered for a complaint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ComplaintText {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Workflow status of a complaint. New complaints start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Resolved => write!(f, "resolved"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Suggested triage values for a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintSuggestion {
    pub priority: PriorityLabel,
    /// Empty when the analyzer has no categories
    pub category_id: String,
    /// Empty when `category_id` is empty
    pub category_name: String,
    pub sentiment: SentimentLabel,
}

/// Analyzer bound to a category taxonomy.
#[derive(Debug, Clone, Default)]
pub struct ComplaintAnalyzer {
    candidates: Vec<CategoryCandidate>,
}

impl ComplaintAnalyzer {
    pub fn new(candidates: Vec<CategoryCandidate>) -> Self {
        Self { candidates }
    }

    /// Suggest priority, category and sentiment for one complaint.
    pub fn analyze(&self, title: &str, description: &str) -> TriageResult<ComplaintSuggestion> {
        if title.trim().is_empty() {
            return Err(TriageError::validation("complaint title is empty"));
        }
        if description.trim().is_empty() {
            return Err(TriageError::validation("complaint description is empty"));
        }

        let priority = analyze_priority(title, description);
        let category_id = suggest_category(title, description, &self.candidates);
        let category_name = self
            .candidates
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let sentiment = analyze_sentiment(&format!("{} {}", title, description));

        debug!(
            %priority,
            category = %category_id,
            %sentiment,
            "Analyzed complaint"
        );

        Ok(ComplaintSuggestion {
            priority,
            category_id,
            category_name,
            sentiment,
        })
    }

    /// Analyze each complaint independently, keeping input order.
    pub fn analyze_batch(&self, items: &[ComplaintText]) -> Vec<TriageResult<ComplaintSuggestion>> {
        items
            .iter()
            .map(|item| self.analyze(&item.title, &item.description))
            .collect()
    }
}
