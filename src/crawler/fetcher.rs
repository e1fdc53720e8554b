//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for discovery, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests for robots.txt and sitemap bodies
//! - Error classification
//!
//! Every fetch is attempted once; there is no retry logic.

use crate::config::{DiscoveryConfig, UserAgentConfig};
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::time::Duration;

/// Maximum redirect hops followed for a single fetch
const MAX_REDIRECTS: usize = 10;

/// Why a fetch produced no usable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Server answered with a non-2xx status
    HttpStatus(u16),
    /// Request or connect timeout elapsed
    Timeout,
    /// Connection could not be established
    Connect(String),
    /// Response arrived but its body could not be read
    Body(String),
    /// Anything else reqwest reports (bad URL, redirect loop, TLS, ...)
    Request(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP status {}", code),
            Self::Timeout => f.write_str("request timeout"),
            Self::Connect(e) => write!(f, "connection failed: {}", e),
            Self::Body(e) => write!(f, "failed to read body: {}", e),
            Self::Request(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            Self::Body(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Formats the user agent string sent with every request
///
/// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn format_user_agent(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `discovery` - Timeouts for the client
/// * `user_agent` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_sitemap::config::{DiscoveryConfig, UserAgentConfig};
/// use sumi_sitemap::crawler::build_http_client;
///
/// let discovery = DiscoveryConfig::default();
/// let client = build_http_client(&discovery, &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    discovery: &DiscoveryConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format_user_agent(user_agent))
        .timeout(Duration::from_secs(discovery.request_timeout_secs))
        .connect_timeout(Duration::from_secs(discovery.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body
///
/// Redirects are followed; when the final URL differs from the requested
/// one it is logged at debug level.
///
/// # Failure Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Non-2xx status | `HttpStatus(code)` |
/// | Timeout | `Timeout` |
/// | Connection refused / DNS | `Connect` |
/// | Body read or decode error | `Body` |
/// | Other (invalid URL, redirect limit, TLS) | `Request` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<String, FetchFailure> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        tracing::debug!("GET {} returned {}", url, status);
        return Err(FetchFailure::HttpStatus(status.as_u16()));
    }

    if response.url().as_str() != url {
        tracing::debug!("GET {} redirected to {}", url, response.url());
    }

    Ok(response.text().await?)
}
