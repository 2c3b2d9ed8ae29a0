//! Crawl frontier
//!
//! A strict FIFO queue of URLs awaiting fetch. The queue never holds the same
//! URL twice at once; whether a URL was already fetched is the visited set's
//! business, not the frontier's.

use std::collections::{HashSet, VecDeque};

/// FIFO queue of pending URLs with O(1) membership checks
#[derive(Debug, Default)]
pub struct Frontier {
    /// Pending URLs in discovery order
    queue: VecDeque<String>,

    /// Mirror of `queue` for membership tests
    queued: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding just the seed URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.push(seed);
        frontier
    }

    /// Appends `url` to the back of the queue
    ///
    /// Returns false (and leaves the queue untouched) if `url` is already queued.
    pub fn push(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.queued.contains(&url) {
            return false;
        }
        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Removes and returns the earliest-inserted URL
    pub fn pop(&mut self) -> Option<String> {
        let url = self.queue.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Returns true if `url` is currently waiting in the queue
    pub fn contains(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    /// Number of pending URLs
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true when nothing is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
