//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A config file is optional: [`Config::default`] reproduces the stock crawl of
//! the ADK documentation site.
//!
//! # Example
//!
//! ```no_run
//! use adk_docs_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Crawling from: {}", config.crawl.seed_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, OutputConfig, DEFAULT_SEED_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_seed_url};
