//! Crawler module for sitemap discovery
//!
//! This module contains the core discovery logic, including:
//! - HTTP fetching and failure classification
//! - Discovery coordination (robots.txt, then every declared sitemap)
//! - The report a run produces

mod coordinator;
mod fetcher;
mod report;

pub use coordinator::SitemapDiscovery;
pub use fetcher::{build_http_client, fetch_url, format_user_agent, FetchFailure};
pub use report::{DiscoveryReport, RobotsStatus, SitemapFailure};

use crate::config::Config;
use crate::url::SiteSource;
use crate::SumiError;

/// Runs a complete discovery for one site
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client from configuration
/// 2. Fetch robots.txt and extract sitemap references
/// 3. Fetch and parse every referenced sitemap
///
/// # Arguments
///
/// * `config` - The discovery configuration
/// * `source` - The site to survey
///
/// # Returns
///
/// * `Ok(DiscoveryReport)` - Discovery ran; the report may contain failures
/// * `Err(SumiError)` - The HTTP client could not be built
pub async fn discover(config: &Config, source: &SiteSource) -> Result<DiscoveryReport, SumiError> {
    let discovery = SitemapDiscovery::new(config)?;
    Ok(discovery.discover_all(source).await)
}
