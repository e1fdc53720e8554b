//! Box-drawn table rendering
//!
//! Each sitemap renders as a `Sitemap: <url>` line followed by a grid with a
//! row index column and a `URL` column:
//!
//! ```text
//! Sitemap: https://example.com/sitemap.xml
//! ╒════╤══════════════════════╕
//! │    │ URL                  │
//! ╞════╪══════════════════════╡
//! │  0 │ https://example.com/ │
//! ╘════╧══════════════════════╛
//! ```

use crate::crawler::{DiscoveryReport, RobotsStatus};
use crate::sitemap::SitemapRecord;

const URL_HEADER: &str = "URL";

/// Renders a whole report as tables, one per parsed sitemap
///
/// Skipped sitemaps and an unavailable robots.txt are listed after the
/// tables so the output never silently drops them.
pub fn format_table_report(report: &DiscoveryReport) -> String {
    let mut out = String::new();

    for record in &report.records {
        out.push_str(&format_record_table(record));
        out.push('\n');
    }

    match &report.robots {
        RobotsStatus::Unavailable(error) => {
            out.push_str(&format!("robots.txt unavailable: {}\n", error));
        }
        RobotsStatus::Declared(0) => {
            out.push_str(&format!(
                "No sitemaps declared in {}\n",
                report.source.robots_url()
            ));
        }
        RobotsStatus::Declared(_) => {}
    }

    for failure in &report.failures {
        out.push_str(&format!(
            "Skipped sitemap {}: {}\n",
            failure.reference, failure.error
        ));
    }

    out
}

/// Renders one sitemap record as a heading plus grid
pub fn format_record_table(record: &SitemapRecord) -> String {
    let mut out = format!("Sitemap: {}\n", record.reference);
    out.push_str(&format_grid(&record.urls));
    out
}

/// Renders a list of URLs as an indexed grid
///
/// An empty list renders the header only.
pub fn format_grid(urls: &[String]) -> String {
    let index_width = urls
        .len()
        .checked_sub(1)
        .map(|last| last.to_string().len())
        .unwrap_or(0);
    let url_width = urls
        .iter()
        .map(|u| u.chars().count())
        .chain(std::iter::once(URL_HEADER.len()))
        .max()
        .unwrap_or(URL_HEADER.len());

    let border = |left: char, fill: char, mid: char, right: char| {
        format!(
            "{}{}{}{}{}\n",
            left,
            fill.to_string().repeat(index_width + 2),
            mid,
            fill.to_string().repeat(url_width + 2),
            right
        )
    };

    let mut out = border('╒', '═', '╤', '╕');
    out.push_str(&format!(
        "│ {:>iw$} │ {:<uw$} │\n",
        "",
        URL_HEADER,
        iw = index_width,
        uw = url_width
    ));

    if urls.is_empty() {
        out.push_str(&border('╘', '═', '╧', '╛'));
        return out;
    }

    out.push_str(&border('╞', '═', '╪', '╡'));

    for (index, url) in urls.iter().enumerate() {
        let padding = url_width - url.chars().count();
        out.push_str(&format!(
            "│ {:>iw$} │ {}{} │\n",
            index,
            url,
            " ".repeat(padding),
            iw = index_width
        ));

        if index + 1 < urls.len() {
            out.push_str(&border('├', '─', '┼', '┤'));
        }
    }

    out.push_str(&border('╘', '═', '╧', '╛'));
    out
}
