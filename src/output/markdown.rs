//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of discovery
//! results, including statistics, per-sitemap URL lists, and failures.

use crate::crawler::{DiscoveryReport, RobotsStatus};
use crate::output::stats::DiscoveryStatistics;
use chrono::{DateTime, Utc};

/// Run details that are not part of the report itself
#[derive(Debug, Clone)]
pub struct SummaryContext {
    /// When the summary was generated
    pub generated_at: DateTime<Utc>,

    /// Hash of the configuration file, if one was loaded
    pub config_hash: Option<String>,
}

impl SummaryContext {
    /// Context stamped with the current time
    pub fn now(config_hash: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            config_hash,
        }
    }
}

/// Formats a discovery report as markdown
pub fn format_markdown_summary(report: &DiscoveryReport, context: &SummaryContext) -> String {
    let stats = DiscoveryStatistics::from_report(report);
    let mut md = String::new();

    md.push_str("# Sumi-Sitemap Discovery Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Origin**: {}\n", report.source));
    md.push_str(&format!(
        "- **Robots.txt**: {}\n",
        report.source.robots_url()
    ));
    md.push_str(&format!(
        "- **Robots Status**: {}\n",
        robots_status_label(&report.robots)
    ));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        context.generated_at.to_rfc3339()
    ));
    if let Some(hash) = &context.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!(
        "- **Sitemaps Declared**: {}\n",
        stats.sitemaps_declared
    ));
    md.push_str(&format!("- **Sitemaps Parsed**: {}\n", stats.sitemaps_parsed));
    md.push_str(&format!("- **Sitemaps Failed**: {}\n", stats.sitemaps_failed));
    md.push_str(&format!("- **Empty Sitemaps**: {}\n", stats.empty_sitemaps));
    md.push_str(&format!("- **Total URLs**: {}\n", stats.total_urls));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        stats.success_rate()
    ));

    // Per-sitemap breakdown
    if !report.records.is_empty() {
        md.push_str("## Sitemaps\n\n");
        md.push_str("| Sitemap | URLs |\n");
        md.push_str("|---------|------|\n");
        for record in &report.records {
            md.push_str(&format!("| {} | {} |\n", record.reference, record.len()));
        }
        md.push('\n');

        for record in &report.records {
            md.push_str(&format!("### {}\n\n", record.reference));
            if record.is_empty() {
                md.push_str("_No URLs listed._\n\n");
                continue;
            }
            for url in &record.urls {
                md.push_str(&format!("- {}\n", url));
            }
            md.push('\n');
        }
    }

    // Failures
    let errors = report.errors();
    if !errors.is_empty() {
        md.push_str("## Failures\n\n");
        md.push_str("| Kind | URL | Error |\n");
        md.push_str("|------|-----|-------|\n");
        for error in errors {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                error.kind(),
                error.url(),
                escape_table_cell(&error.to_string())
            ));
        }
        md.push('\n');
    }

    md
}

fn robots_status_label(status: &RobotsStatus) -> String {
    match status {
        RobotsStatus::Declared(0) => "fetched, no sitemaps declared".to_string(),
        RobotsStatus::Declared(count) => format!("fetched, {} sitemap(s) declared", count),
        RobotsStatus::Unavailable(error) => format!("unavailable ({})", error),
    }
}

fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
