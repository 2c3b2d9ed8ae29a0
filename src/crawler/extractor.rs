//! HTML content extraction
//!
//! This module turns a fetched page into the pieces the crawler persists:
//! - Page title (from the `<title>` tag)
//! - Readable plain text of the primary content region
//! - Outbound links, resolved to absolute URLs

use crate::OutputError;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// A strategy for locating the primary content region of a page
#[derive(Debug, Clone, Copy)]
pub struct RegionStrategy {
    /// Short name used in trace logging
    pub name: &'static str,
    /// CSS selector; the first matching element wins
    pub selector: &'static str,
}

/// Content region strategies, tried in order
///
/// `div.md-content` is the content wrapper of MkDocs Material sites.
pub const REGION_STRATEGIES: &[RegionStrategy] = &[
    RegionStrategy {
        name: "main",
        selector: "main",
    },
    RegionStrategy {
        name: "content-body",
        selector: "div.md-content",
    },
    RegionStrategy {
        name: "article",
        selector: "article",
    },
    RegionStrategy {
        name: "body",
        selector: "body",
    },
];

/// Elements whose text never reaches the extracted output
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Plain text of the primary content region
    pub text: String,

    /// Every `<a href>` on the page as an absolute URL, in document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts title, text and links
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL the page was fetched from, used to resolve relative links
///
/// # Returns
///
/// * `Ok(ParsedPage)` - Successfully parsed page
/// * `Err(OutputError)` - `page_url` is not an absolute URL
///
/// # Example
///
/// ```
/// use adk_docs_scraper::crawler::parse_page;
///
/// let html = "<html><head><title>Intro</title></head><body><main>\
///     <p>Hello</p>\n<a href=\"page2\">Next</a></main></body></html>";
/// let parsed = parse_page(html, "https://example.com/docs/").unwrap();
/// assert_eq!(parsed.title.as_deref(), Some("Intro"));
/// assert_eq!(parsed.text, "Hello\nNext");
/// assert_eq!(parsed.links, vec!["https://example.com/docs/page2".to_string()]);
/// ```
pub fn parse_page(html: &str, page_url: &str) -> Result<ParsedPage, OutputError> {
    let base = Url::parse(page_url)
        .map_err(|e| OutputError::Extraction(format!("invalid page URL '{}': {}", page_url, e)))?;

    let document = Html::parse_document(html);

    Ok(ParsedPage {
        title: extract_title(&document),
        text: extract_text(&document),
        links: extract_links(&document, &base),
    })
}

/// Extracts the page title from the HTML document
///
/// An empty or whitespace-only title counts as absent.
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Picks the primary content region using [`REGION_STRATEGIES`]
///
/// Falls back to the document root when nothing matches, which only happens
/// for fragments without a `<body>`.
pub fn select_content_region(document: &Html) -> ElementRef<'_> {
    for strategy in REGION_STRATEGIES {
        let Ok(selector) = Selector::parse(strategy.selector) else {
            continue;
        };

        if let Some(region) = document.select(&selector).next() {
            tracing::trace!("Content region matched strategy '{}'", strategy.name);
            return region;
        }
    }

    document.root_element()
}

/// Extracts readable text from the primary content region
///
/// Text nodes are concatenated in document order with script and style
/// contents left out. The result is split into lines, each line further split
/// on double spaces, every fragment trimmed, empty fragments dropped, and the
/// rest joined with single newlines.
pub fn extract_text(document: &Html) -> String {
    let region = select_content_region(document);

    let mut raw = String::new();
    collect_text(region, &mut raw);

    normalize_text(&raw)
}

/// Appends every text node under `element`, skipping script/style subtrees
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if SKIPPED_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Line boundaries, including the vertical-tab/form-feed/separator family
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Applies the line / double-space splitting heuristic to raw text
pub fn normalize_text(raw: &str) -> String {
    raw.split(is_line_break)
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts all anchor targets as absolute URLs
///
/// Hrefs that cannot be resolved against `base` are skipped. No scheme
/// filtering happens here; prefix scoping takes care of `mailto:` and friends.
pub fn extract_links(document: &Html, base: &Url) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| match base.join(href) {
            Ok(absolute) => Some(absolute.to_string()),
            Err(e) => {
                tracing::debug!("Skipping unresolvable href '{}': {}", href, e);
                None
            }
        })
        .collect()
}
