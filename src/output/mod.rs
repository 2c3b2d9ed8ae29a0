//! Output module for crawl artifacts
//!
//! This module handles:
//! - The `html/` and `text/` directory layout and per-page writes
//! - Post-processing: the consolidated text document and the markdown index

mod consolidated;
mod layout;
mod markdown;

pub use consolidated::{format_consolidated, generate_consolidated, separator, SEPARATOR_WIDTH};
pub use layout::{format_text_document, OutputLayout, HTML_DIR, TEXT_DIR};
pub use markdown::{
    collect_index_entries, format_markdown_index, generate_markdown_index, title_from_text,
    IndexEntry, TITLE_PREFIX,
};

use crate::config::OutputConfig;
use crate::OutputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the artifacts written by [`post_process`]
#[derive(Debug, Clone)]
pub struct PostProcessOutput {
    /// The consolidated text document
    pub consolidated_path: PathBuf,

    /// The markdown index
    pub index_path: PathBuf,

    /// Number of text files included in both
    pub page_count: usize,
}

/// Lists the `.txt` files in `text_dir`, sorted by file name
pub fn list_text_files(text_dir: &Path) -> Result<Vec<String>, OutputError> {
    let entries = fs::read_dir(text_dir).map_err(|e| OutputError::io(text_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| OutputError::io(text_dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| OutputError::io(entry.path(), e))?
            .is_file();
        if !is_file {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(".txt") => names.push(name),
            Ok(_) => {}
            Err(name) => {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", name);
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Reads a saved text file
pub(crate) fn read_saved_page(path: &Path) -> Result<String, OutputError> {
    fs::read_to_string(path).map_err(|e| OutputError::io(path, e))
}

/// Builds the consolidated document and the index from the saved text files
///
/// Both artifacts list pages in file-name order, not crawl order.
///
/// # Arguments
///
/// * `layout` - The output layout the crawl wrote into
/// * `config` - Artifact names and headings
/// * `seed_url` - Written into the consolidated header
pub fn post_process(
    layout: &OutputLayout,
    config: &OutputConfig,
    seed_url: &str,
) -> Result<PostProcessOutput, OutputError> {
    let file_names = list_text_files(layout.text_dir())?;

    let consolidated_path = layout.root().join(&config.consolidated_file);
    generate_consolidated(layout, &file_names, config, seed_url, &consolidated_path)?;

    let index_path = layout.root().join(&config.index_file);
    generate_markdown_index(layout, &file_names, config, &index_path)?;

    tracing::info!("Created index at {}", index_path.display());
    tracing::info!(
        "Created consolidated documentation at {}",
        consolidated_path.display()
    );

    Ok(PostProcessOutput {
        consolidated_path,
        index_path,
        page_count: file_names.len(),
    })
}
