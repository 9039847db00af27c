//! Loading category candidates from disk.
//!
//! Two layouts are accepted:
//!
//! ```text
//! categories.json                      categories.toml
//! [                                    [[categories]]
//!   {"id": "1", "name": "Hostel"},     id = "1"
//!   ...                                name = "Hostel"
//! ]
//! ```

use crate::category::CategoryCandidate;
use crate::error::{TriageError, TriageResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// On-disk catalog encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> TriageResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(TriageError::unsupported_format(path)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default)]
    categories: Vec<CategoryCandidate>,
}

/// Parse catalog text. Ids must be non-empty and unique.
pub fn parse_candidates(
    content: &str,
    format: CatalogFormat,
) -> TriageResult<Vec<CategoryCandidate>> {
    let candidates = match format {
        CatalogFormat::Json => serde_json::from_str::<Vec<CategoryCandidate>>(content)?,
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(content)?.categories,
    };
    validate(&candidates)?;
    Ok(candidates)
}

/// Read a catalog file.
///
/// An empty catalog is allowed; suggestions against it are the empty id.
pub fn load_candidates(path: &Path) -> TriageResult<Vec<CategoryCandidate>> {
    let format = CatalogFormat::from_path(path)?;
    if !path.exists() {
        return Err(TriageError::catalog_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    let candidates = parse_candidates(&content, format)?;
    info!(
        path = %path.display(),
        count = candidates.len(),
        "Loaded category catalog"
    );
    Ok(candidates)
}

fn validate(candidates: &[CategoryCandidate]) -> TriageResult<()> {
    let mut seen = HashSet::new();
    for (index, c) in candidates.iter().enumerate() {
        if c.id.trim().is_empty() {
            return Err(TriageError::invalid_catalog(format!(
                "category #{} ('{}') has an empty id",
                index + 1,
                c.name
            )));
        }
        if !seen.insert(c.id.as_str()) {
            return Err(TriageError::invalid_catalog(format!(
                "duplicate category id '{}'",
                c.id
            )));
        }
        if c.name.trim().is_empty() {
            debug!(id = %c.id, "Category has an empty name and will never score");
        }
    }
    Ok(())
}
