//! Output module for rendering discovery reports
//!
//! This module handles:
//! - Rendering reports as box-drawn tables
//! - Generating markdown summaries
//! - Computing and printing report statistics

mod markdown;
pub mod stats;
mod table;

pub use markdown::{format_markdown_summary, SummaryContext};
pub use stats::{format_statistics, print_statistics, DiscoveryStatistics};
pub use table::{format_grid, format_record_table, format_table_report};

use crate::config::OutputFormat;
use crate::crawler::DiscoveryReport;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders a report in the requested format
pub fn render_report(
    report: &DiscoveryReport,
    format: OutputFormat,
    context: &SummaryContext,
) -> String {
    match format {
        OutputFormat::Table => format_table_report(report),
        OutputFormat::Markdown => format_markdown_summary(report, context),
    }
}

/// Writes rendered output to a file, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::Write(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
    }

    std::fs::write(path, content)?;
    Ok(())
}
