//! Report types and their text/JSON rendering.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use triage::{
    CategoryScore, CategorySuggestion, ComplaintStatus, ComplaintSuggestion, OutputFormat,
    PriorityAnalysis, SentimentLabel, TriageError,
};

/// Suggestion for a complaint about to be filed.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeReport {
    pub title: String,
    #[serde(flatten)]
    pub suggestion: ComplaintSuggestion,
    pub status: ComplaintStatus,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalyzeReport {
    pub fn new(title: &str, suggestion: ComplaintSuggestion) -> Self {
        Self {
            title: title.to_string(),
            suggestion,
            status: ComplaintStatus::Pending,
            analyzed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    #[serde(flatten)]
    pub suggestion: CategorySuggestion,
    /// Only present with --scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<CategoryScore>>,
}

/// One entry of a batch run; exactly one of `suggestion`/`error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<ComplaintSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchError {
    pub code: String,
    pub message: String,
}

impl BatchEntry {
    pub fn from_result(index: usize, result: Result<ComplaintSuggestion, TriageError>) -> Self {
        match result {
            Ok(s) => Self {
                index,
                suggestion: Some(s),
                error: None,
            },
            Err(e) => Self {
                index,
                suggestion: None,
                error: Some(BatchError {
                    code: e.code().to_string(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

pub fn render_analyze(report: &AnalyzeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let s = &report.suggestion;
            Ok(format!(
                "Title:     {}\nPriority:  {}\nCategory:  {} ({})\nSentiment: {}\nStatus:    {}",
                report.title,
                s.priority,
                display_or_dash(&s.category_name),
                display_or_dash(&s.category_id),
                s.sentiment,
                report.status
            ))
        }
    }
}

pub fn render_priority(
    analysis: &PriorityAnalysis,
    explain: bool,
    format: OutputFormat,
) -> Result<String> {
    match (format, explain) {
        (OutputFormat::Json, true) => Ok(serde_json::to_string_pretty(analysis)?),
        (OutputFormat::Json, false) => Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "priority": analysis.label }),
        )?),
        (OutputFormat::Text, false) => Ok(analysis.label.to_string()),
        (OutputFormat::Text, true) => Ok(format!(
            "{}\nrule:   {:?}\nurgent: {}\nhigh:   {}\nlow:    {}",
            analysis.label,
            analysis.rule,
            analysis.urgent_matches.join(", "),
            analysis.high_matches.join(", "),
            analysis.low_matches.join(", ")
        )),
    }
}

pub fn render_category(report: &CategoryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = display_or_dash(&report.suggestion.id).to_string();
            if let Some(scores) = &report.scores {
                for s in scores {
                    out.push_str(&format!("\n  {:>3}  {} ({})", s.score, s.name, s.id));
                }
            }
            Ok(out)
        }
    }
}

pub fn render_sentiment(label: SentimentLabel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "sentiment": label }),
        )?),
        OutputFormat::Text => Ok(label.to_string()),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| match (&e.suggestion, &e.error) {
                (Some(s), _) => format!(
                    "#{} {} {} {}",
                    e.index,
                    s.priority,
                    display_or_dash(&s.category_id),
                    s.sentiment
                ),
                (None, Some(err)) => format!("#{} error {}: {}", e.index, err.code, err.message),
                (None, None) => format!("#{} -", e.index),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
