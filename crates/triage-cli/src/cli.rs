use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use triage::OutputFormat;

/// Suggest priority, category and sentiment for campus complaints
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file (overrides TRIAGE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Category catalog, .json or .toml (overrides TRIAGE_CATEGORIES_PATH)
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    /// Output format: text or json (overrides TRIAGE_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full suggestion for a new complaint
    Analyze(ComplaintArgs),

    /// Priority label only
    Priority {
        #[command(flatten)]
        complaint: ComplaintArgs,

        /// Show matched keywords and the rule that fired
        #[arg(long, default_value_t = false)]
        explain: bool,
    },

    /// Suggested category id only
    Category {
        #[command(flatten)]
        complaint: ComplaintArgs,

        /// Show every candidate's score
        #[arg(long, default_value_t = false)]
        scores: bool,
    },

    /// Sentiment of arbitrary text
    Sentiment {
        #[arg(long, short)]
        text: String,
    },

    /// Analyze complaints from a JSON array or JSON-lines file ("-" for stdin)
    Batch {
        #[arg(long, short)]
        input: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ComplaintArgs {
    #[arg(long, short, default_value = "")]
    pub title: String,

    #[arg(long, short, default_value = "")]
    pub description: String,
}
