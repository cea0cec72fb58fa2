//! Report rendering
//!
//! Turns a [`BatchResult`] into text for people or JSON for tools, and saves
//! rejection reports to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::validation::BatchResult;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

const ALL_VALID: &str = "All credit codes are valid.";

/// One-line count summary, e.g. `total: 3 | valid: 2 | invalid: 1`
pub fn summary_line(result: &BatchResult) -> String {
    format!(
        "total: {} | valid: {} | invalid: {}",
        result.total,
        result.valid.len(),
        result.invalid.len()
    )
}

/// Numbered list of rejected codes with their reasons
pub fn render_text(result: &BatchResult) -> String {
    if let Some(error) = &result.error {
        return format!("error: {error}\n");
    }

    if result.invalid.is_empty() {
        return format!("{ALL_VALID}\n");
    }

    let mut out = String::new();
    out.push_str("The following credit codes are invalid:\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for (n, entry) in result.invalid.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, entry.code));
        out.push_str(&format!("   reason: {}\n\n", entry.reason));
    }

    out
}

/// Pretty-printed JSON of the whole result
pub fn render_json(result: &BatchResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize validation result")
}

/// Render `result` in the requested format
pub fn render(result: &BatchResult, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(format!("{}\n{}", summary_line(result), render_text(result))),
        Format::Json => render_json(result).map(|json| json + "\n"),
    }
}

/// Save the rejection report to `path`
///
/// Nothing is written when there are no rejected codes, and a report left
/// at `path` by an earlier run is removed. The return value tells whether a
/// file was created.
pub fn write_rejections(path: &Path, result: &BatchResult) -> Result<bool> {
    if result.invalid.is_empty() {
        if path.is_file() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove stale report {:?}", path))?;
            log::warn!("No rejected codes, removed stale report {:?}", path);
        } else {
            log::info!("No rejected codes, skipping report {:?}", path);
        }
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {:?}", parent))?;
    }

    fs::write(path, render_text(result))
        .with_context(|| format!("Failed to write rejection report {:?}", path))?;
    log::info!(
        "Wrote {} rejected codes to {:?}",
        result.invalid.len(),
        path
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_summary_line() {
        let result = validate_batch("91350100M000100Y43 BAD");
        assert_eq!(summary_line(&result), "total: 2 | valid: 1 | invalid: 1");
    }

    #[test]
    fn test_render_text_lists_rejections() {
        let result = validate_batch("BAD\n91350100M000100Y44");
        let text = render_text(&result);

        assert!(text.starts_with("The following credit codes are invalid:\n"));
        assert!(text.contains(&"=".repeat(50)));
        assert!(text.contains("1. BAD\n   reason: length is not 18 characters.\n"));
        assert!(text.contains("2. 91350100M000100Y44\n   reason: check character mismatch, expected '3'\n"));
    }

    #[test]
    fn test_render_text_all_valid() {
        let result = validate_batch("91350100M000100Y43");
        assert_eq!(render_text(&result), "All credit codes are valid.\n");
    }

    #[test]
    fn test_render_text_empty_input() {
        let result = validate_batch("  ");
        assert_eq!(render_text(&result), "error: no valid codes found in input\n");
    }

    #[test]
    fn test_render_json() {
        let result = validate_batch("91350100M000100Y43,91350100M000100YIO");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result).expect("render json")).expect("parse json");

        assert_eq!(json["total"], 2);
        assert_eq!(json["valid"][0], "91350100M000100Y43");
        assert_eq!(json["invalid"][0]["index"], 1);
        assert_eq!(json["invalid"][0]["outcome"]["kind"], "invalid_character");
        assert_eq!(json["invalid"][0]["outcome"]["offending"][1], "O");
        assert_eq!(
            json["invalid"][0]["reason"],
            "contains invalid characters: I, O"
        );
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_render_text_format_includes_summary() {
        let result = validate_batch("91350100M000100Y43");
        let text = render(&result, Format::Text).expect("render");
        assert!(text.starts_with("total: 1 | valid: 1 | invalid: 0\n"));
    }
}
