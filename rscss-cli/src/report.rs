//! Printing diagnostics.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Style};
use rscss_lint::Diagnostic;
use serde::Serialize;

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic, grouped by file.
    Text,
    /// A JSON array with one entry per file.
    Json,
}

/// Diagnostics of one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The file as given on the command line.
    pub source: PathBuf,
    /// Everything reported for it.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Create a report for `path`.
    pub fn new(path: &Path, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            source: path.to_path_buf(),
            diagnostics,
        }
    }
}

/// `style` when `color` is on, the plain style otherwise.
#[must_use]
pub const fn paint(style: Style, color: bool) -> Style {
    if color { style } else { Style::new() }
}

/// The label printed before a fatal error.
#[must_use]
pub fn error_label(color: bool) -> String {
    "error:".style(paint(Style::new().red().bold(), color)).to_string()
}

/// Print every file with diagnostics, then a problem count.
pub fn print_text(reports: &[FileReport], color: bool) {
    let path_style = paint(Style::new().underline(), color);
    let position_style = paint(Style::new().dimmed(), color);
    let marker_style = paint(Style::new().red(), color);
    let rule_style = paint(Style::new().dimmed(), color);

    let mut total = 0;
    for report in reports.iter().filter(|report| !report.diagnostics.is_empty()) {
        println!("{}", report.source.display().style(path_style));
        for diagnostic in &report.diagnostics {
            println!(
                "  {}  {}  {}  {}",
                diagnostic.position.style(position_style),
                "error".style(marker_style),
                diagnostic.message,
                diagnostic.rule_name.style(rule_style),
            );
        }
        println!();
        total += report.diagnostics.len();
    }

    if total > 0 {
        let noun = if total == 1 { "problem" } else { "problems" };
        let summary = format!("{total} {noun}");
        println!("{}", summary.style(paint(Style::new().red().bold(), color)));
    }
}

/// Print all reports as pretty JSON.
pub fn print_json(reports: &[FileReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_label_without_color_is_plain() {
        assert_eq!(error_label(false), "error:");
    }

    #[test]
    fn test_error_label_with_color_is_styled() {
        let label = error_label(true);
        assert!(label.starts_with("\x1b["));
        assert!(label.contains("error:"));
    }
}
