//! Triage configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `TRIAGE_*` environment variables. Command-line flags are
//! layered on top by the binary.
//!
//! ```toml
//! categories_path = "/etc/triage/categories.json"
//! output_format = "json"
//! log_filter = "triage=debug"
//! ```

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "TRIAGE_CONFIG";
pub const CATEGORIES_PATH_ENV: &str = "TRIAGE_CATEGORIES_PATH";
pub const OUTPUT_FORMAT_ENV: &str = "TRIAGE_OUTPUT_FORMAT";
pub const LOG_FILTER_ENV: &str = "TRIAGE_LOG";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TriageError::config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Top-level triage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageConfig {
    /// Category catalog file (None = built-in campus catalog)
    pub categories_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            categories_path: None,
            output_format: OutputFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

/// Config file contents; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    categories_path: Option<PathBuf>,
    output_format: Option<OutputFormat>,
    log_filter: Option<String>,
}

impl TriageConfig {
    /// Load defaults, then the config file, then the process environment.
    ///
    /// `config_path` wins over `TRIAGE_CONFIG`. A missing file named by
    /// either is an error.
    pub fn load(config_path: Option<&Path>) -> TriageResult<Self> {
        let mut config = Self::default();

        let file = config_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));
        if let Some(path) = file {
            config.merge_file(&path)?;
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay keys present in a TOML config file.
    pub fn merge_file(&mut self, path: &Path) -> TriageResult<()> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TriageError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.merge_toml(&content)
    }

    /// Overlay keys present in TOML text.
    pub fn merge_toml(&mut self, content: &str) -> TriageResult<()> {
        let file: ConfigFile = toml::from_str(content)?;
        if let Some(path) = file.categories_path {
            self.categories_path = Some(path);
        }
        if let Some(format) = file.output_format {
            self.output_format = format;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Overlay `TRIAGE_*` variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> TriageResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATEGORIES_PATH_ENV).filter(|p| !p.is_empty()) {
            self.categories_path = Some(PathBuf::from(path));
        }
        if let Some(format) = lookup(OUTPUT_FORMAT_ENV) {
            self.output_format = format.parse()?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|f| !f.is_empty()) {
            self.log_filter = filter;
        }
        Ok(())
    }
}
