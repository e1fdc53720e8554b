//! Robots.txt sitemap declaration parser
//!
//! Only `Sitemap:` declarations are read; allow/disallow groups and crawl
//! delays play no part in sitemap discovery.

use std::fmt;

/// Literal prefix a robots.txt line must start with (after trimming)
const SITEMAP_PREFIX: &str = "Sitemap:";

/// Separator between the directive and its value
const VALUE_SEPARATOR: &str = ": ";

/// A sitemap URL declared in a robots.txt file
///
/// The value is kept verbatim (after trimming); it is not validated or
/// normalized, and duplicates are not collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SitemapReference(String);

impl SitemapReference {
    /// Creates a reference from a URL string
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The referenced sitemap URL
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SitemapReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SitemapReference {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// Extracts sitemap references from a robots.txt body
///
/// # Extraction Rules
///
/// - A line counts when its trimmed text starts with the literal `Sitemap:`
///   (case-sensitive)
/// - The value is everything after the first `": "`, trimmed
/// - A declaration written without the space (`Sitemap:https://...`) falls
///   back to everything after the prefix
/// - Declarations with an empty value are skipped
/// - Output order matches file order
///
/// # Example
///
/// ```
/// use sumi_sitemap::robots::extract_sitemap_references;
///
/// let body = "User-agent: *\nDisallow: /admin\nSitemap: https://x/a.xml\n";
/// let refs = extract_sitemap_references(body);
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].as_str(), "https://x/a.xml");
/// ```
pub fn extract_sitemap_references(body: &str) -> Vec<SitemapReference> {
    body.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            let rest = trimmed.strip_prefix(SITEMAP_PREFIX)?;

            let value = match trimmed.split_once(VALUE_SEPARATOR) {
                Some((_, value)) => value,
                None => rest,
            }
            .trim();

            if value.is_empty() {
                None
            } else {
                Some(SitemapReference::new(value))
            }
        })
        .collect()
}
