//! URL handling module for Sumi-Sitemap
//!
//! This module validates the site origin a run is pointed at and derives the
//! URLs fetched from it.

mod origin;

pub use origin::SiteSource;
