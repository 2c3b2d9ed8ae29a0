//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML text extraction and link discovery
//! - The FIFO frontier
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod report;

pub use coordinator::{fetch_and_save, run_crawl, Coordinator, PageOutcome};
pub use extractor::{
    extract_links, extract_text, extract_title, normalize_text, parse_page,
    select_content_region, ParsedPage, RegionStrategy, REGION_STRATEGIES,
};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use report::CrawlReport;

use crate::config::Config;
use crate::ScraperError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Create the output directories
/// 2. Fetch pages breadth-first from the seed, within the seed prefix
/// 3. Save each page as HTML and as extracted text
/// 4. Write the consolidated document and the index
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; per-page failures are counted in the report
/// * `Err(ScraperError)` - Setup or post-processing failed
pub async fn crawl(config: Config) -> Result<CrawlReport, ScraperError> {
    run_crawl(config).await
}
