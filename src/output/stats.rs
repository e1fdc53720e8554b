//! Statistics over a discovery report
//!
//! This module provides functionality for summarizing and displaying
//! discovery results.

use crate::crawler::DiscoveryReport;

/// Discovery statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryStatistics {
    /// Whether robots.txt was fetched
    pub robots_fetched: bool,

    /// Sitemaps declared in robots.txt
    pub sitemaps_declared: usize,

    /// Sitemaps fetched and parsed
    pub sitemaps_parsed: usize,

    /// Sitemaps skipped after a failure
    pub sitemaps_failed: usize,

    /// Parsed sitemaps that listed no URLs
    pub empty_sitemaps: usize,

    /// URLs across all parsed sitemaps
    pub total_urls: usize,

    /// URL count per parsed sitemap, in declaration order
    pub urls_per_sitemap: Vec<(String, usize)>,
}

impl DiscoveryStatistics {
    /// Computes statistics for a report
    pub fn from_report(report: &DiscoveryReport) -> Self {
        Self {
            robots_fetched: report.robots.is_fetched(),
            sitemaps_declared: report.robots.declared(),
            sitemaps_parsed: report.records.len(),
            sitemaps_failed: report.failures.len(),
            empty_sitemaps: report.records.iter().filter(|r| r.is_empty()).count(),
            total_urls: report.total_urls(),
            urls_per_sitemap: report
                .records
                .iter()
                .map(|r| (r.reference.to_string(), r.len()))
                .collect(),
        }
    }

    /// Percentage of declared sitemaps that parsed
    ///
    /// 100% when nothing was declared.
    pub fn success_rate(&self) -> f64 {
        if self.sitemaps_declared == 0 {
            return 100.0;
        }
        (self.sitemaps_parsed as f64 / self.sitemaps_declared as f64) * 100.0
    }
}

/// Formats statistics as plain text
pub fn format_statistics(stats: &DiscoveryStatistics) -> String {
    let mut out = String::from("=== Sitemap Statistics ===\n\n");

    out.push_str("Overview:\n");
    out.push_str(&format!(
        "  robots.txt: {}\n",
        if stats.robots_fetched {
            "fetched"
        } else {
            "unavailable"
        }
    ));
    out.push_str(&format!("  Sitemaps declared: {}\n", stats.sitemaps_declared));
    out.push_str(&format!("  Sitemaps parsed: {}\n", stats.sitemaps_parsed));
    out.push_str(&format!("  Sitemaps failed: {}\n", stats.sitemaps_failed));
    out.push_str(&format!("  Empty sitemaps: {}\n", stats.empty_sitemaps));
    out.push_str(&format!("  Total URLs: {}\n\n", stats.total_urls));

    if !stats.urls_per_sitemap.is_empty() {
        out.push_str("URLs per Sitemap:\n");
        // Largest first
        let mut counts: Vec<_> = stats.urls_per_sitemap.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        for (sitemap, count) in counts {
            let percentage = if stats.total_urls > 0 {
                (*count as f64 / stats.total_urls as f64) * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("  {}: {} ({:.1}%)\n", sitemap, count, percentage));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} sitemaps parsed)\n",
        stats.success_rate(),
        stats.sitemaps_parsed,
        stats.sitemaps_declared
    ));

    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DiscoveryStatistics) {
    print!("{}", format_statistics(stats));
}
