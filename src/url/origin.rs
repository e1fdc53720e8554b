use crate::UrlError;
use std::fmt;
use url::Url;

/// The site a discovery run is pointed at
///
/// Holds the origin exactly as the caller gave it, minus trailing slashes,
/// so that derived URLs are plain concatenations (`origin + "/robots.txt"`).
/// A base path is kept if present; query strings and fragments are rejected
/// because they cannot be concatenated meaningfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteSource {
    origin: String,
    host: String,
}

impl SiteSource {
    /// Parses and validates a site origin
    ///
    /// # Examples
    ///
    /// ```
    /// use sumi_sitemap::url::SiteSource;
    ///
    /// let source = SiteSource::parse("https://Example.com/").unwrap();
    /// assert_eq!(source.as_str(), "https://Example.com");
    /// assert_eq!(source.robots_url(), "https://Example.com/robots.txt");
    /// assert_eq!(source.host(), "example.com");
    /// ```
    pub fn parse(origin: &str) -> Result<Self, UrlError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| UrlError::Parse(e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                url.scheme()
            )));
        }

        let host = url.host_str().ok_or(UrlError::MissingHost)?.to_lowercase();
        if host.is_empty() {
            return Err(UrlError::MissingHost);
        }

        if url.query().is_some() {
            return Err(UrlError::Malformed(format!(
                "Origin '{}' must not carry a query string",
                trimmed
            )));
        }

        if url.fragment().is_some() {
            return Err(UrlError::Malformed(format!(
                "Origin '{}' must not carry a fragment",
                trimmed
            )));
        }

        Ok(Self {
            origin: trimmed.to_string(),
            host,
        })
    }

    /// The origin string, without trailing slashes
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Lowercased host of the origin
    pub fn host(&self) -> &str {
        &self.host
    }

    /// URL of the site's robots file
    pub fn robots_url(&self) -> String {
        format!("{}/robots.txt", self.origin)
    }
}

impl fmt::Display for SiteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}
