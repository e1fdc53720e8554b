//! Sitemap module
//!
//! This module fetches sitemap files and turns them into records pairing the
//! sitemap URL with the page URLs it lists.

mod parser;

pub use parser::extract_locations;

use crate::crawler::fetch_url;
use crate::robots::SitemapReference;
use crate::DiscoveryError;
use reqwest::Client;

/// One parsed sitemap
///
/// `urls` holds the `<loc>` values in document order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRecord {
    /// The sitemap this record was built from
    pub reference: SitemapReference,

    /// Page URLs listed by the sitemap
    pub urls: Vec<String>,
}

impl SitemapRecord {
    /// Number of URLs in the sitemap
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if the sitemap listed no URLs
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Fetches and parses one sitemap
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `reference` - The sitemap to fetch
///
/// # Returns
///
/// * `Ok(SitemapRecord)` - The sitemap was fetched and is well-formed XML
/// * `Err(DiscoveryError::SitemapFetch)` - Network failure or non-2xx status
/// * `Err(DiscoveryError::SitemapParse)` - Body is not well-formed XML
pub async fn fetch_sitemap(
    client: &Client,
    reference: &SitemapReference,
) -> Result<SitemapRecord, DiscoveryError> {
    let url = reference.as_str();

    let body = fetch_url(client, url)
        .await
        .map_err(|reason| DiscoveryError::SitemapFetch {
            url: url.to_string(),
            reason,
        })?;

    let urls = extract_locations(&body).map_err(|message| DiscoveryError::SitemapParse {
        url: url.to_string(),
        message,
    })?;

    tracing::debug!("Sitemap {} lists {} URL(s)", url, urls.len());

    Ok(SitemapRecord {
        reference: reference.clone(),
        urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_len() {
        let record = SitemapRecord {
            reference: SitemapReference::new("https://x/a.xml"),
            urls: vec!["https://x/1".to_string(), "https://x/2".to_string()],
        };
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_empty_record() {
        let record = SitemapRecord {
            reference: SitemapReference::new("https://x/a.xml"),
            urls: vec![],
        };
        assert!(record.is_empty());
    }
}
