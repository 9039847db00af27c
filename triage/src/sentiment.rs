//! Sentiment of free text by polarity keyword presence.

use crate::error::TriageError;
use crate::keywords::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::text::count_present;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(TriageError::validation(format!(
                "unknown sentiment '{}'",
                other
            ))),
        }
    }
}

/// Classify text as positive, neutral or negative.
///
/// Whichever polarity has strictly more keywords present wins; a tie,
/// including no keywords at all, is neutral.
pub fn analyze_sentiment(text: &str) -> SentimentLabel {
    let lower = text.to_lowercase();
    let positive = count_present(&lower, POSITIVE_WORDS);
    let negative = count_present(&lower, NEGATIVE_WORDS);

    match negative.cmp(&positive) {
        std::cmp::Ordering::Greater => SentimentLabel::Negative,
        std::cmp::Ordering::Less => SentimentLabel::Positive,
        std::cmp::Ordering::Equal => SentimentLabel::Neutral,
    }
}
