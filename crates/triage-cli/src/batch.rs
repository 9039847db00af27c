//! Batch input: a JSON array of complaints, or one JSON object per line.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use triage::ComplaintText;

/// Read complaints from `path`, or stdin when `path` is "-".
pub fn read_input(path: &Path) -> Result<Vec<ComplaintText>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read complaints from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    parse(&content)
}

pub fn parse(content: &str) -> Result<Vec<ComplaintText>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Failed to parse complaint JSON array");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid complaint on line {}", n + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let items = parse(r#" [{"title":"a","description":"b"},{"title":"c"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "");
    }

    #[test]
    fn test_parse_lines() {
        let input = "{\"title\":\"a\",\"description\":\"b\"}\n\n{\"title\":\"c\",\"description\":\"d\"}\n";
        let items = parse(input).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "c");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse("{\"title\":\"a\"}\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complaints.jsonl");
        std::fs::write(&path, "{\"title\":\"Bus late\",\"description\":\"again\"}\n").unwrap();
        let items = read_input(&path).unwrap();
        assert_eq!(items[0].title, "Bus late");
    }
}
