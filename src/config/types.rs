use serde::Deserialize;

/// Seed used when neither the CLI nor a config file names one
pub const DEFAULT_SEED_URL: &str = "https://google.github.io/adk-docs/";

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Starting URL; also the string prefix every crawled URL must share
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Root directory for all crawl artifacts
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// Fixed pause after every fetch (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            output_dir: "./adk_docs".to_string(),
            delay_ms: 200,
        }
    }
}

/// Post-processing artifact configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the consolidated text document, inside the output dir
    #[serde(rename = "consolidated-file")]
    pub consolidated_file: String,

    /// File name of the markdown index, inside the output dir
    #[serde(rename = "index-file")]
    pub index_file: String,

    /// Heading written at the top of the consolidated document
    #[serde(rename = "consolidated-heading")]
    pub consolidated_heading: String,

    /// Heading written at the top of the index
    #[serde(rename = "index-heading")]
    pub index_heading: String,

    /// Paragraph written under the index heading
    #[serde(rename = "index-blurb")]
    pub index_blurb: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            consolidated_file: "adk_docs_consolidated.txt".to_string(),
            index_file: "index.md".to_string(),
            consolidated_heading: "GOOGLE ADK DOCUMENTATION".to_string(),
            index_heading: "Google ADK Documentation Index".to_string(),
            index_blurb: "This index contains links to all scraped ADK documentation pages."
                .to_string(),
        }
    }
}
