//! Report rendering.
//!
//! JSON is the canonical format and serializes the report structures
//! directly. Markdown is a human-readable digest: smell type, line
//! range, and description, with details appended in verbose mode.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::core::{BatchReport, FileReport, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

pub fn render_file_report(
    report: &FileReport,
    format: OutputFormat,
    verbose: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_file_markdown(report, verbose)),
    }
}

pub fn render_batch_report(
    report: &BatchReport,
    format: OutputFormat,
    verbose: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_batch_markdown(report, verbose)),
    }
}

fn render_file_markdown(report: &FileReport, verbose: bool) -> String {
    let mut out = format!("# Code Smell Report: {}\n\n", report.file);

    if report.active_smells.is_empty() {
        out.push_str("✅ **No code smells detected!**\n");
        return out;
    }

    let names: Vec<&str> = report.active_smells.iter().map(|s| s.as_str()).collect();
    let _ = writeln!(out, "**Active Smells:** {}\n", names.join(", "));

    for smell in &report.detected {
        let _ = writeln!(out, "- **{}** — Lines {}", smell.smell_type, smell.lines);
        let _ = writeln!(out, "  {}\n", smell.description);

        if verbose && !smell.details.is_empty() {
            let _ = writeln!(out, "  *Details:* {}\n", smell.details);
        }
    }

    out
}

fn render_batch_markdown(report: &BatchReport, verbose: bool) -> String {
    let mut out = format!("# Code Smell Report: {}\n\n", report.directory);
    let _ = writeln!(
        out,
        "**Files analyzed:** {} | **Files with smells:** {}\n",
        report.total_files, report.files_with_smells
    );

    for file in &report.results {
        out.push_str(&render_file_markdown(file, verbose).replacen('#', "##", 1));
        out.push('\n');
    }

    out
}
