//! Complaint Triage CLI
//!
//! Runs the triage heuristics from a shell:
//!
//! ```bash
//! # Full suggestion against the built-in campus catalog
//! triage-cli analyze -t "Fire in classroom" -d "Electrical wiring sparking"
//!
//! # Custom catalog, JSON output
//! TRIAGE_CATEGORIES_PATH=./categories.toml triage-cli --format json category -t "WiFi down" --scores
//!
//! # Batch from stdin
//! cat complaints.jsonl | triage-cli batch --input -
//! ```

mod batch;
mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::process::ExitCode;
use tracing::{info, warn};
use triage::{
    analyze_priority_detailed, analyze_sentiment, default_catalog, load_candidates,
    score_categories, suggest_category_detailed, CategoryCandidate, ComplaintAnalyzer,
    TriageConfig, TriageError,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            if let Some(hint) = e
                .downcast_ref::<TriageError>()
                .and_then(TriageError::recovery_suggestion)
            {
                eprintln!("\nRecovery: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TriageConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.categories.clone() {
        config.categories_path = Some(path);
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let candidates = resolve_candidates(&config)?;
    let format = config.output_format;

    let rendered = match cli.command {
        Command::Analyze(args) => {
            let analyzer = ComplaintAnalyzer::new(candidates);
            let suggestion = analyzer.analyze(&args.title, &args.description)?;
            info!(
                priority = %suggestion.priority,
                category = %suggestion.category_id,
                "Complaint analyzed"
            );
            output::render_analyze(&output::AnalyzeReport::new(&args.title, suggestion), format)?
        }
        Command::Priority { complaint, explain } => {
            let analysis = analyze_priority_detailed(&complaint.title, &complaint.description);
            info!("{}", analysis.summary());
            output::render_priority(&analysis, explain, format)?
        }
        Command::Category { complaint, scores } => {
            let suggestion =
                suggest_category_detailed(&complaint.title, &complaint.description, &candidates);
            let scores = scores
                .then(|| score_categories(&complaint.title, &complaint.description, &candidates));
            output::render_category(&output::CategoryReport { suggestion, scores }, format)?
        }
        Command::Sentiment { text } => output::render_sentiment(analyze_sentiment(&text), format)?,
        Command::Batch { input } => {
            let items = batch::read_input(&input)?;
            let analyzer = ComplaintAnalyzer::new(candidates);
            let entries: Vec<output::BatchEntry> = analyzer
                .analyze_batch(&items)
                .into_iter()
                .enumerate()
                .map(|(i, r)| output::BatchEntry::from_result(i, r))
                .collect();
            let failed = entries.iter().filter(|e| e.error.is_some()).count();
            if failed > 0 {
                warn!(failed, total = entries.len(), "Some complaints could not be analyzed");
            }
            info!(total = entries.len(), "Batch complete");
            output::render_batch(&entries, format)?
        }
    };

    println!("{}", rendered);
    Ok(())
}

fn resolve_candidates(config: &TriageConfig) -> Result<Vec<CategoryCandidate>> {
    match &config.categories_path {
        Some(path) => Ok(load_candidates(path)
            .with_context(|| format!("Loading categories from {}", path.display()))?),
        None => {
            info!("No category catalog configured, using built-in campus catalog");
            Ok(default_catalog())
        }
    }
}
