//! Consolidated document generation
//!
//! Concatenates every saved text file into one document for offline reading.

use crate::config::OutputConfig;
use crate::output::layout::OutputLayout;
use crate::output::read_saved_page;
use crate::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Width of the separator line written before each page
pub const SEPARATOR_WIDTH: usize = 80;

/// The separator line placed before each page block
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Formats the consolidated document from saved page contents
///
/// Pages appear in the order given; each block is preceded by a blank line
/// pair, the separator, and another blank line.
pub fn format_consolidated<'a, I>(config: &OutputConfig, seed_url: &str, pages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut doc = String::new();
    doc.push_str(&format!("# {}\n\n", config.consolidated_heading));
    doc.push_str(&format!("Source: {}\n\n", seed_url));

    let separator = separator();
    for content in pages {
        doc.push_str(&format!("\n\n{}\n\n", separator));
        doc.push_str(content);
    }

    doc
}

/// Writes the consolidated document for `file_names` to `output_path`
pub fn generate_consolidated(
    layout: &OutputLayout,
    file_names: &[String],
    config: &OutputConfig,
    seed_url: &str,
    output_path: &Path,
) -> OutputResult<()> {
    let contents = file_names
        .iter()
        .map(|name| read_saved_page(&layout.text_dir().join(name)))
        .collect::<Result<Vec<_>, _>>()?;

    let doc = format_consolidated(config, seed_url, contents.iter().map(String::as_str));

    let mut file = File::create(output_path).map_err(|e| OutputError::io(output_path, e))?;
    file.write_all(doc.as_bytes())
        .map_err(|e| OutputError::io(output_path, e))?;

    Ok(())
}
