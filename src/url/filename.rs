use super::strip_fragment;
use percent_encoding::percent_decode_str;
use url::Url;

/// Base name used for the site root and for anything without a path
const INDEX_NAME: &str = "index";

/// Derives a flat, filesystem-safe base name from a URL
///
/// # Derivation Steps
///
/// 1. Drop the fragment
/// 2. Take the percent-decoded path and trim leading/trailing `/`
/// 3. An empty path becomes `index`
/// 4. Join the remaining segments with `_`
/// 5. Drop everything after the last `.` (`page.html` → `page`)
///
/// Distinct URLs can map to the same name (`/docs` and `/docs/` both give
/// `docs`). Later writes overwrite earlier ones; no collision handling exists.
///
/// # Examples
///
/// ```
/// use adk_docs_scraper::url::derive_filename;
///
/// assert_eq!(derive_filename("https://example.com/"), "index");
/// assert_eq!(derive_filename("https://example.com/docs/get-started/"), "docs_get-started");
/// assert_eq!(derive_filename("https://example.com/docs/page.html#intro"), "docs_page");
/// ```
pub fn derive_filename(url: &str) -> String {
    // Unparseable input has no path component and falls through to `index`
    let path = Url::parse(strip_fragment(url))
        .map(|parsed| percent_decode_str(parsed.path()).decode_utf8_lossy().into_owned())
        .unwrap_or_default();

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return INDEX_NAME.to_string();
    }

    let name = trimmed.replace('/', "_");
    match name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}
