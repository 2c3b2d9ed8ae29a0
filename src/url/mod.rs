//! URL handling module for the scraper
//!
//! This module decides which discovered URLs are eligible for crawling and maps
//! URLs to flat file names for the per-page artifacts.
//!
//! Scoping is deliberately a plain string-prefix test against the seed URL, and
//! the only canonicalization applied anywhere is fragment stripping.

mod filename;

use std::collections::HashSet;

pub use filename::derive_filename;

/// Returns the URL with any `#fragment` removed
///
/// # Examples
///
/// ```
/// use adk_docs_scraper::url::strip_fragment;
///
/// assert_eq!(strip_fragment("https://example.com/a#intro"), "https://example.com/a");
/// assert_eq!(strip_fragment("https://example.com/a"), "https://example.com/a");
/// ```
pub fn strip_fragment(url: &str) -> &str {
    match url.split_once('#') {
        Some((base, _)) => base,
        None => url,
    }
}

/// Returns the non-empty fragment of `url`, if any
fn fragment(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

/// Decides whether a discovered URL should be queued for crawling
///
/// A URL is rejected when:
/// 1. It does not start with `base_prefix`
/// 2. It is already in `visited`, exactly as written
/// 3. It carries a fragment and its fragment-stripped form is in `visited`
///
/// # Arguments
///
/// * `url` - The absolute URL that was discovered
/// * `base_prefix` - The seed URL every crawled URL must start with
/// * `visited` - Canonical URLs that have already been fetched
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use adk_docs_scraper::url::should_scrape;
///
/// let mut visited = HashSet::new();
/// visited.insert("https://example.com/docs/".to_string());
///
/// let base = "https://example.com/docs/";
/// assert!(should_scrape("https://example.com/docs/page2", base, &visited));
/// assert!(!should_scrape("https://example.com/docs/#install", base, &visited));
/// assert!(!should_scrape("https://other.com/x", base, &visited));
/// ```
pub fn should_scrape(url: &str, base_prefix: &str, visited: &HashSet<String>) -> bool {
    if !url.starts_with(base_prefix) {
        return false;
    }

    if visited.contains(url) {
        return false;
    }

    // Same-page anchors count as covered once the page itself is fetched
    if fragment(url).is_some() && visited.contains(strip_fragment(url)) {
        return false;
    }

    true
}
