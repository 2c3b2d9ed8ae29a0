//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop and the per-page
//! fetch-and-save step:
//! - Owning the frontier and the visited set
//! - Fetching, extracting and persisting each page
//! - Filtering and enqueueing discovered links
//! - Running post-processing once the frontier is exhausted

use crate::config::Config;
use crate::crawler::extractor::parse_page;
use crate::crawler::frontier::Frontier;
use crate::crawler::report::CrawlReport;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::{post_process, OutputLayout};
use crate::url::{derive_filename, should_scrape, strip_fragment};
use crate::{ConfigError, OutputError, ScraperError};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// What happened to one frontier entry
#[derive(Debug)]
pub enum PageOutcome {
    /// The page was written to disk; `links` are the eligible discovered URLs
    Saved {
        url: String,
        title: String,
        links: Vec<String>,
    },

    /// The canonical URL had already been fetched
    AlreadyVisited,

    /// Non-success status or transport error; the URL is not marked visited
    Failed {
        url: String,
        status_code: Option<u16>,
        reason: String,
    },

    /// The page was fetched but could not be parsed or written
    Errored { url: String, error: OutputError },
}

impl PageOutcome {
    /// Discovered links, empty for anything but [`PageOutcome::Saved`]
    pub fn links(&self) -> &[String] {
        match self {
            Self::Saved { links, .. } => links,
            _ => &[],
        }
    }
}

/// Fetches one page, saves it in both forms, and reports eligible links
///
/// # Steps
///
/// 1. Strip the fragment; if that URL is already visited, stop
/// 2. GET it; on a non-success status or transport error, stop without
///    marking it visited
/// 3. Mark it visited, then extract the title (falling back to the URL path)
///    and the text
/// 4. Write `html/<name>.html` and `text/<name>.txt`
/// 5. Filter every resolved anchor through [`should_scrape`]
///
/// Failures after step 3 leave the URL visited and yield
/// [`PageOutcome::Errored`]. Nothing here returns an error to the caller.
pub async fn fetch_and_save(
    client: &Client,
    url: &str,
    layout: &OutputLayout,
    visited: &mut HashSet<String>,
    base_prefix: &str,
) -> PageOutcome {
    let fetch_target = strip_fragment(url);

    if visited.contains(fetch_target) {
        return PageOutcome::AlreadyVisited;
    }

    tracing::info!("Fetching {}", fetch_target);

    let body = match fetch_url(client, fetch_target).await {
        FetchResult::Success {
            final_url, body, ..
        } => {
            if final_url != fetch_target {
                tracing::debug!("{} redirected to {}", fetch_target, final_url);
            }
            body
        }
        FetchResult::HttpError { status_code } => {
            tracing::warn!(
                "Failed to fetch {}: Status code {}",
                fetch_target,
                status_code
            );
            return PageOutcome::Failed {
                url: fetch_target.to_string(),
                status_code: Some(status_code),
                reason: format!("HTTP {}", status_code),
            };
        }
        FetchResult::NetworkError { error } => {
            tracing::warn!("Failed to fetch {}: {}", fetch_target, error);
            return PageOutcome::Failed {
                url: fetch_target.to_string(),
                status_code: None,
                reason: error,
            };
        }
    };

    visited.insert(fetch_target.to_string());
    let visited: &HashSet<String> = visited;

    match save_page(fetch_target, &body, layout) {
        Ok((title, discovered)) => {
            tracing::info!("Saved {} to HTML and TXT formats", fetch_target);

            let links = discovered
                .into_iter()
                .filter(|link| should_scrape(link, base_prefix, visited))
                .collect();

            PageOutcome::Saved {
                url: fetch_target.to_string(),
                title,
                links,
            }
        }
        Err(error) => {
            tracing::error!("Error scraping {}: {}", url, error);
            PageOutcome::Errored {
                url: fetch_target.to_string(),
                error,
            }
        }
    }
}

/// Parses and persists a fetched page; returns its title and every anchor target
fn save_page(
    url: &str,
    body: &str,
    layout: &OutputLayout,
) -> Result<(String, Vec<String>), OutputError> {
    let parsed = parse_page(body, url)?;

    let title = match parsed.title {
        Some(title) => title,
        None => Url::parse(url)
            .map(|u| u.path().to_string())
            .map_err(|e| OutputError::Extraction(format!("invalid page URL '{}': {}", url, e)))?,
    };

    let name = derive_filename(url);
    layout.write_html(&name, body)?;
    layout.write_text(&name, &title, url, &parsed.text)?;

    Ok((title, parsed.links))
}

/// Main crawler coordinator structure
///
/// Owns all mutable crawl state. One coordinator performs one crawl; state is
/// never persisted, so a new run always starts over from the seed.
pub struct Coordinator {
    config: Config,
    /// Seed in its serialized URL form, also the crawl prefix
    seed_url: String,
    layout: OutputLayout,
    client: Client,
    frontier: Frontier,
    visited: HashSet<String>,
    delay: Duration,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScraperError)` - The seed is not a URL or the HTTP client could
    ///   not be built
    pub fn new(config: Config) -> Result<Self, ScraperError> {
        // Discovered links come out of `Url::join` in serialized form, so the
        // prefix they are compared against must be spelled the same way
        let seed_url = Url::parse(&config.crawl.seed_url)
            .map_err(|e| {
                ConfigError::InvalidUrl(format!("'{}': {}", config.crawl.seed_url, e))
            })?
            .to_string();

        let client = build_http_client()?;
        let layout = OutputLayout::new(&config.crawl.output_dir);
        let frontier = Frontier::with_seed(seed_url.clone());
        let delay = Duration::from_millis(config.crawl.delay_ms);

        Ok(Self {
            config,
            seed_url,
            layout,
            client,
            frontier,
            visited: HashSet::new(),
            delay,
        })
    }

    /// Canonical URLs fetched so far
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// URLs still waiting to be fetched
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs the crawl loop to completion, then post-processes
    ///
    /// Per-page failures are logged and counted; only directory setup and
    /// post-processing errors abort the run.
    pub async fn run(&mut self) -> Result<CrawlReport, ScraperError> {
        let seed = self.config.crawl.seed_url.clone();
        let prefix = self.seed_url.clone();
        let mut report = CrawlReport::new(&seed);

        tracing::info!(
            "Starting to scrape {} to {}",
            prefix,
            self.layout.root().display()
        );
        self.layout.create()?;

        while let Some(current) = self.frontier.pop() {
            // Exact match, fragment included
            if self.visited.contains(&current) {
                tracing::debug!("Skipping already visited {}", current);
                report.pages_skipped += 1;
                continue;
            }

            let outcome = fetch_and_save(
                &self.client,
                &current,
                &self.layout,
                &mut self.visited,
                &prefix,
            )
            .await;
            report.record(&outcome);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            for link in outcome.links() {
                if self.visited.contains(link) {
                    continue;
                }
                if self.frontier.push(link.clone()) {
                    tracing::debug!("Queued {}", link);
                    report.links_enqueued += 1;
                }
            }

            tracing::trace!(
                "{} visited, {} in frontier",
                self.visited.len(),
                self.frontier.len()
            );
        }

        tracing::info!("Frontier is empty, building consolidated output");
        let artifacts = post_process(&self.layout, &self.config.output, &seed)?;
        report.pages_indexed = artifacts.page_count;

        report.finish();
        report.log_summary();

        Ok(report)
    }
}

/// Runs a complete crawl with the given configuration
///
/// # Example
///
/// ```no_run
/// use adk_docs_scraper::config::Config;
/// use adk_docs_scraper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::default()).await?;
/// println!("Saved {} pages", report.pages_saved);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, ScraperError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
