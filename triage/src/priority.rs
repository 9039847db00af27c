//! Priority analysis from complaint text.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! ```text
//! Condition                                         | Label
//! --------------------------------------------------|--------
//! >= 2 urgent keywords, or "urgent"/"emergency"     | urgent
//! 1 urgent keyword, or >= 2 high keywords           | high
//! >= 1 low keyword                                  | low
//! anything else (including empty text)              | medium
//! ```

use crate::error::TriageError;
use crate::keywords::{HIGH_KEYWORDS, LOW_KEYWORDS, URGENT_KEYWORDS, URGENT_LITERALS};
use crate::text::{matched_keywords, search_text};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Triage urgency, ordered by severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLabel {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl PriorityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// All labels from least to most severe.
    pub fn all() -> [PriorityLabel; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Urgent]
    }
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorityLabel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(TriageError::validation(format!(
                "unknown priority '{}' (expected low, medium, high or urgent)",
                other
            ))),
        }
    }
}

/// Which decision rule produced the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityRule {
    /// Two or more urgent-tier keywords
    UrgentKeywords,
    /// Literal "urgent" or "emergency" with fewer than two urgent keywords
    UrgentLiteral,
    /// Exactly one urgent-tier keyword
    UrgentKeyword,
    /// Two or more high-tier keywords
    HighKeywords,
    /// At least one low-tier keyword
    LowKeywords,
    /// Nothing matched
    Default,
}

/// Priority label together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityAnalysis {
    pub label: PriorityLabel,
    pub rule: PriorityRule,
    pub urgent_matches: Vec<&'static str>,
    pub high_matches: Vec<&'static str>,
    pub low_matches: Vec<&'static str>,
}

impl PriorityAnalysis {
    /// Compact one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "priority={} rule={:?} urgent={} high={} low={}",
            self.label,
            self.rule,
            self.urgent_matches.len(),
            self.high_matches.len(),
            self.low_matches.len()
        )
    }
}

/// Suggest a priority for a complaint.
pub fn analyze_priority(title: &str, description: &str) -> PriorityLabel {
    analyze_priority_detailed(title, description).label
}

/// Suggest a priority and report which keywords and rule decided it.
pub fn analyze_priority_detailed(title: &str, description: &str) -> PriorityAnalysis {
    let text = search_text(title, description);

    let urgent_matches = matched_keywords(&text, URGENT_KEYWORDS);
    let high_matches = matched_keywords(&text, HIGH_KEYWORDS);
    let low_matches = matched_keywords(&text, LOW_KEYWORDS);
    let has_literal = URGENT_LITERALS.iter().any(|lit| text.contains(lit));

    let (label, rule) = if urgent_matches.len() >= 2 {
        (PriorityLabel::Urgent, PriorityRule::UrgentKeywords)
    } else if has_literal {
        (PriorityLabel::Urgent, PriorityRule::UrgentLiteral)
    } else if urgent_matches.len() == 1 {
        (PriorityLabel::High, PriorityRule::UrgentKeyword)
    } else if high_matches.len() >= 2 {
        (PriorityLabel::High, PriorityRule::HighKeywords)
    } else if !low_matches.is_empty() {
        (PriorityLabel::Low, PriorityRule::LowKeywords)
    } else {
        (PriorityLabel::Medium, PriorityRule::Default)
    };

    PriorityAnalysis {
        label,
        rule,
        urgent_matches,
        high_matches,
        low_matches,
    }
}
