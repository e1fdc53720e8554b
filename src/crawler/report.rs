//! Discovery report types
//!
//! A report is plain in-memory data; rendering lives in [`crate::output`].

use crate::robots::SitemapReference;
use crate::sitemap::SitemapRecord;
use crate::url::SiteSource;
use crate::DiscoveryError;

/// Outcome of reading the site's robots.txt
///
/// Keeps "the site declares no sitemaps" apart from "robots.txt could not
/// be fetched", which would otherwise both look like an empty report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsStatus {
    /// Robots.txt was fetched and declared this many sitemaps (possibly 0)
    Declared(usize),

    /// Robots.txt could not be fetched
    Unavailable(DiscoveryError),
}

impl RobotsStatus {
    /// Returns true if robots.txt was fetched
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Declared(_))
    }

    /// Number of sitemap references robots.txt declared
    pub fn declared(&self) -> usize {
        match self {
            Self::Declared(count) => *count,
            Self::Unavailable(_) => 0,
        }
    }
}

/// A sitemap reference that was skipped, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapFailure {
    /// Position of the reference in robots.txt declaration order
    pub index: usize,

    /// The reference that failed
    pub reference: SitemapReference,

    /// What went wrong
    pub error: DiscoveryError,
}

/// Result of one discovery run against one site
///
/// `records` follows robots.txt declaration order and holds only sitemaps
/// that were fetched and parsed; skipped sitemaps appear in `failures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// The site that was surveyed
    pub source: SiteSource,

    /// How reading robots.txt went
    pub robots: RobotsStatus,

    /// Parsed sitemaps, in declaration order
    pub records: Vec<SitemapRecord>,

    /// Skipped sitemaps, in declaration order
    pub failures: Vec<SitemapFailure>,
}

impl DiscoveryReport {
    /// Total URLs across all parsed sitemaps
    pub fn total_urls(&self) -> usize {
        self.records.iter().map(SitemapRecord::len).sum()
    }

    /// Returns true if robots.txt was fetched and every sitemap parsed
    pub fn is_complete(&self) -> bool {
        self.robots.is_fetched() && self.failures.is_empty()
    }

    /// Every diagnostic in the report, robots failure first
    pub fn errors(&self) -> Vec<&DiscoveryError> {
        let mut errors = Vec::with_capacity(self.failures.len() + 1);
        if let RobotsStatus::Unavailable(error) = &self.robots {
            errors.push(error);
        }
        errors.extend(self.failures.iter().map(|f| &f.error));
        errors
    }
}
