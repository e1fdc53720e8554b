//! Sumi-Sitemap: A polite sitemap surveyor
//!
//! This crate fetches a site's robots.txt, discovers the sitemaps it declares,
//! and collects the page URLs each sitemap lists into an ordered report.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod sitemap;
pub mod url;

use thiserror::Error;

pub use crawler::FetchFailure;

/// Main error type for Sumi-Sitemap operations
#[derive(Debug, Error)]
pub enum SumiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// A recoverable failure of one discovery step
///
/// None of these abort a run: a robots failure yields an empty report that
/// still says why, and a sitemap failure skips only that sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("Failed to fetch robots.txt from {url}: {reason}")]
    RobotsFetch { url: String, reason: FetchFailure },

    #[error("Failed to fetch sitemap {url}: {reason}")]
    SitemapFetch { url: String, reason: FetchFailure },

    #[error("Failed to parse sitemap {url}: {message}")]
    SitemapParse { url: String, message: String },

    #[error("Sitemap worker for {url} stopped: {message}")]
    Worker { url: String, message: String },
}

impl DiscoveryError {
    /// The URL of the step that failed
    pub fn url(&self) -> &str {
        match self {
            Self::RobotsFetch { url, .. }
            | Self::SitemapFetch { url, .. }
            | Self::SitemapParse { url, .. }
            | Self::Worker { url, .. } => url,
        }
    }

    /// Short label for reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RobotsFetch { .. } => "robots-fetch",
            Self::SitemapFetch { .. } => "sitemap-fetch",
            Self::SitemapParse { .. } => "sitemap-parse",
            Self::Worker { .. } => "worker",
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Sumi-Sitemap operations
pub type Result<T> = std::result::Result<T, SumiError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{discover, DiscoveryReport, RobotsStatus, SitemapDiscovery, SitemapFailure};
pub use robots::SitemapReference;
pub use sitemap::SitemapRecord;
pub use url::SiteSource;
