//! Discovery coordinator - robots.txt to sitemap records
//!
//! This module contains the linear discovery pipeline:
//! - Fetch robots.txt and extract sitemap references
//! - Fan out one task per reference, bounded by a semaphore
//! - Merge results back by reference index so output order never depends
//!   on completion order

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::crawler::report::{DiscoveryReport, RobotsStatus, SitemapFailure};
use crate::robots::{fetch_sitemap_references, SitemapReference};
use crate::sitemap::{fetch_sitemap, SitemapRecord};
use crate::url::SiteSource;
use crate::{DiscoveryError, SumiError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Sitemap discovery for one configuration
///
/// Holds only an HTTP client and the concurrency bound. Every operation
/// builds its result from scratch, so calling them repeatedly never
/// accumulates state.
#[derive(Debug, Clone)]
pub struct SitemapDiscovery {
    client: Client,
    max_concurrent_sitemaps: usize,
}

impl SitemapDiscovery {
    /// Creates a discovery instance from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SitemapDiscovery)` - Ready to run
    /// * `Err(SumiError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, SumiError> {
        let client = build_http_client(&config.discovery, &config.user_agent)?;
        Ok(Self::with_client(
            client,
            config.discovery.max_concurrent_sitemaps as usize,
        ))
    }

    /// Creates a discovery instance around an existing client
    ///
    /// A bound of 0 is treated as 1.
    pub fn with_client(client: Client, max_concurrent_sitemaps: usize) -> Self {
        Self {
            client,
            max_concurrent_sitemaps: max_concurrent_sitemaps.max(1),
        }
    }

    /// Fetches robots.txt and returns the sitemap references it declares
    ///
    /// `Ok(vec![])` means the site declares no sitemaps; a fetch failure is
    /// `Err(DiscoveryError::RobotsFetch)`.
    pub async fn discover_sitemap_references(
        &self,
        source: &SiteSource,
    ) -> Result<Vec<SitemapReference>, DiscoveryError> {
        fetch_sitemap_references(&self.client, source).await
    }

    /// Fetches and parses one sitemap
    pub async fn parse_sitemap(
        &self,
        reference: &SitemapReference,
    ) -> Result<SitemapRecord, DiscoveryError> {
        fetch_sitemap(&self.client, reference).await
    }

    /// Fetches and parses every reference, preserving reference order
    ///
    /// Each reference is an independent task; a failed or panicked task only
    /// marks its own reference as failed.
    ///
    /// # Returns
    ///
    /// Successful records and failures, each in reference order
    pub async fn parse_sitemaps(
        &self,
        references: &[SitemapReference],
    ) -> (Vec<SitemapRecord>, Vec<SitemapFailure>) {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_sitemaps));
        let mut tasks = JoinSet::new();

        for (index, reference) in references.iter().enumerate() {
            let client = self.client.clone();
            let reference = reference.clone();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                // The semaphore is never closed, so the permit is always granted
                let _permit = semaphore.acquire_owned().await.ok();
                let outcome = fetch_sitemap(&client, &reference).await;
                (index, outcome)
            });
        }

        // Single accumulation point: slots are addressed by reference index
        let mut slots: Vec<Option<Result<SitemapRecord, DiscoveryError>>> =
            (0..references.len()).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => tracing::error!("Sitemap worker stopped: {}", e),
            }
        }

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (index, (reference, slot)) in references.iter().zip(slots).enumerate() {
            let outcome = slot.unwrap_or_else(|| {
                Err(DiscoveryError::Worker {
                    url: reference.to_string(),
                    message: "task did not complete".to_string(),
                })
            });

            match outcome {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!("Skipping sitemap {}: {}", reference, error);
                    failures.push(SitemapFailure {
                        index,
                        reference: reference.clone(),
                        error,
                    });
                }
            }
        }

        (records, failures)
    }

    /// Runs the whole pipeline for one site
    ///
    /// 1. Fetch robots.txt and extract sitemap references
    /// 2. Fetch and parse every referenced sitemap
    /// 3. Return records in declaration order plus per-sitemap failures
    ///
    /// Never fails as a whole: a robots.txt failure produces an empty report
    /// whose `robots` status says why.
    pub async fn discover_all(&self, source: &SiteSource) -> DiscoveryReport {
        tracing::info!("Discovering sitemaps for {}", source);
        let start_time = std::time::Instant::now();

        let references = match self.discover_sitemap_references(source).await {
            Ok(references) => references,
            Err(error) => {
                return DiscoveryReport {
                    source: source.clone(),
                    robots: RobotsStatus::Unavailable(error),
                    records: Vec::new(),
                    failures: Vec::new(),
                };
            }
        };

        let (records, failures) = self.parse_sitemaps(&references).await;

        let report = DiscoveryReport {
            source: source.clone(),
            robots: RobotsStatus::Declared(references.len()),
            records,
            failures,
        };

        tracing::info!(
            "Discovery completed: {} of {} sitemap(s) parsed, {} URL(s) in {:?}",
            report.records.len(),
            references.len(),
            report.total_urls(),
            start_time.elapsed()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_concurrency_clamped() {
        let discovery = SitemapDiscovery::with_client(Client::new(), 0);
        assert_eq!(discovery.max_concurrent_sitemaps, 1);
    }

    #[test]
    fn test_new_uses_configured_bound() {
        let mut config = Config::default();
        config.discovery.max_concurrent_sitemaps = 7;
        let discovery = SitemapDiscovery::new(&config).unwrap();
        assert_eq!(discovery.max_concurrent_sitemaps, 7);
    }

    #[tokio::test]
    async fn test_no_references_no_work() {
        let discovery = SitemapDiscovery::with_client(Client::new(), 2);
        let (records, failures) = discovery.parse_sitemaps(&[]).await;
        assert!(records.is_empty());
        assert!(failures.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_reference_fails_alone() {
        let discovery = SitemapDiscovery::with_client(Client::new(), 2);
        let references = vec![SitemapReference::new("not a url")];
        let (records, failures) = discovery.parse_sitemaps(&references).await;

        assert!(records.is_empty());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 0);
        assert!(matches!(
            failures[0].error,
            DiscoveryError::SitemapFetch { .. }
        ));
    }
}
