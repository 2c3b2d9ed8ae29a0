//! Markdown index generation
//!
//! The index lists every saved page as a markdown link from its title to its
//! text file, relative to the output root.

use crate::config::OutputConfig;
use crate::output::layout::OutputLayout;
use crate::output::read_saved_page;
use crate::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prefix of the first line of every saved text file
pub const TITLE_PREFIX: &str = "Title: ";

/// One line of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Title recovered from the text file, or the file name
    pub title: String,

    /// Path of the text file relative to the output root
    pub relative_path: PathBuf,
}

/// Recovers a page title from the contents of its text file
///
/// Uses the first line with the `Title: ` prefix removed; if the prefix is
/// missing the file name stands in.
pub fn title_from_text(content: &str, file_name: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim();
    match first_line.strip_prefix(TITLE_PREFIX) {
        Some(title) => title.to_string(),
        None => file_name.to_string(),
    }
}

/// Builds index entries for the given text files, preserving their order
pub fn collect_index_entries(
    layout: &OutputLayout,
    file_names: &[String],
) -> OutputResult<Vec<IndexEntry>> {
    let mut entries = Vec::with_capacity(file_names.len());

    for file_name in file_names {
        let path = layout.text_dir().join(file_name);
        let content = read_saved_page(&path)?;
        let relative_path = path
            .strip_prefix(layout.root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        entries.push(IndexEntry {
            title: title_from_text(&content, file_name),
            relative_path,
        });
    }

    Ok(entries)
}

/// Formats index entries as a markdown document
pub fn format_markdown_index(entries: &[IndexEntry], config: &OutputConfig) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", config.index_heading));
    md.push_str(&format!("{}\n\n", config.index_blurb));

    for entry in entries {
        md.push_str(&format!(
            "- [{}]({})\n",
            entry.title,
            entry.relative_path.display()
        ));
    }

    md
}

/// Writes the markdown index for `file_names` to `output_path`
pub fn generate_markdown_index(
    layout: &OutputLayout,
    file_names: &[String],
    config: &OutputConfig,
    output_path: &Path,
) -> OutputResult<()> {
    let entries = collect_index_entries(layout, file_names)?;
    let markdown = format_markdown_index(&entries, config);

    let mut file = File::create(output_path).map_err(|e| OutputError::io(output_path, e))?;
    file.write_all(markdown.as_bytes())
        .map_err(|e| OutputError::io(output_path, e))?;

    Ok(())
}
