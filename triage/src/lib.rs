//! Complaint Triage Library
//!
//! Keyword heuristics used by the campus complaint workflow to pre-fill a
//! new complaint before the student submits it:
//! - Priority analysis (`low` / `medium` / `high` / `urgent`)
//! - Category suggestion against a caller-supplied taxonomy
//! - Sentiment analysis (`positive` / `neutral` / `negative`)
//!
//! The scoring functions are pure and total. They match keywords by
//! substring presence on lower-cased text, never by token, and never count
//! a keyword twice.
//!
//! # Example
//!
//! ```
//! use triage::{analyze_priority, suggest_category, CategoryCandidate, PriorityLabel};
//!
//! let priority = analyze_priority("Fire in classroom", "Electrical wiring sparking");
//! assert_eq!(priority, PriorityLabel::Urgent);
//!
//! let categories = vec![CategoryCandidate::new("c1", "IT & Technology", "")];
//! let id = suggest_category("WiFi down", "laptop cannot reach network", &categories);
//! assert_eq!(id, "c1");
//! ```

pub mod analyzer;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod keywords;
pub mod priority;
pub mod sentiment;
pub mod text;

pub use analyzer::{ComplaintAnalyzer, ComplaintStatus, ComplaintSuggestion, ComplaintText};
pub use catalog::{load_candidates, parse_candidates, CatalogFormat};
pub use category::{
    default_catalog, score_categories, suggest_category, suggest_category_detailed,
    CategoryCandidate, CategoryScore, CategorySuggestion, SuggestionFallback,
};
pub use config::{OutputFormat, TriageConfig};
pub use error::{TriageError, TriageResult};
pub use priority::{
    analyze_priority, analyze_priority_detailed, PriorityAnalysis, PriorityLabel, PriorityRule,
};
pub use sentiment::{analyze_sentiment, SentimentLabel};
