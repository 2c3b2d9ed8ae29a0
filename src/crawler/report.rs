//! End-of-run crawl statistics

use crate::crawler::PageOutcome;
use chrono::{DateTime, Utc};

/// Counters collected over one crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub seed_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Pages written to `html/` and `text/`
    pub pages_saved: u64,

    /// Non-success status or transport error; these URLs stay unvisited
    pub pages_failed: u64,

    /// Fetched but failed during parsing or writing
    pub pages_errored: u64,

    /// Frontier pops skipped because the URL was already fetched
    pub pages_skipped: u64,

    /// Links appended to the frontier
    pub links_enqueued: u64,

    /// Text files included in the consolidated document and index
    pub pages_indexed: usize,
}

impl CrawlReport {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            started_at: Utc::now(),
            finished_at: None,
            pages_saved: 0,
            pages_failed: 0,
            pages_errored: 0,
            pages_skipped: 0,
            links_enqueued: 0,
            pages_indexed: 0,
        }
    }

    /// Counts one page outcome
    pub fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Saved { .. } => self.pages_saved += 1,
            PageOutcome::AlreadyVisited => self.pages_skipped += 1,
            PageOutcome::Failed { .. } => self.pages_failed += 1,
            PageOutcome::Errored { .. } => self.pages_errored += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration, if the run has finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Total fetch attempts that reached the network
    pub fn pages_attempted(&self) -> u64 {
        self.pages_saved + self.pages_failed + self.pages_errored
    }

    /// Emits the report through tracing
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl of {} finished: {} saved, {} failed, {} errored, {} links enqueued",
            self.seed_url,
            self.pages_saved,
            self.pages_failed,
            self.pages_errored,
            self.links_enqueued
        );
        if let Some(duration) = self.duration() {
            tracing::info!(
                "Started {}, took {:.2}s",
                self.started_at.to_rfc3339(),
                duration.num_milliseconds() as f64 / 1000.0
            );
        }
    }
}
