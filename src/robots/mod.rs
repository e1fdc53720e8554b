//! Robots.txt handling module
//!
//! This module fetches a site's robots.txt and extracts the sitemap
//! declarations it contains.

mod parser;

pub use parser::{extract_sitemap_references, SitemapReference};

use crate::crawler::fetch_url;
use crate::url::SiteSource;
use crate::DiscoveryError;
use reqwest::Client;

/// Fetches robots.txt for a site and extracts its sitemap references
///
/// Each call fetches afresh and returns a new list; nothing is accumulated
/// between calls.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `source` - The site whose robots.txt is read
///
/// # Returns
///
/// * `Ok(Vec<SitemapReference>)` - Robots.txt was fetched; the list may be
///   empty if the site declares no sitemaps
/// * `Err(DiscoveryError::RobotsFetch)` - Robots.txt could not be fetched
pub async fn fetch_sitemap_references(
    client: &Client,
    source: &SiteSource,
) -> Result<Vec<SitemapReference>, DiscoveryError> {
    let url = source.robots_url();

    match fetch_url(client, &url).await {
        Ok(body) => {
            let references = extract_sitemap_references(&body);
            tracing::info!(
                "robots.txt at {} declares {} sitemap(s)",
                url,
                references.len()
            );
            Ok(references)
        }
        Err(reason) => {
            tracing::warn!("Error fetching robots.txt from {}: {}", url, reason);
            Err(DiscoveryError::RobotsFetch { url, reason })
        }
    }
}
