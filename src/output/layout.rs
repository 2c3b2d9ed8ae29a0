//! Output directory layout and per-page writers

use crate::OutputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory holding raw HTML copies
pub const HTML_DIR: &str = "html";

/// Subdirectory holding extracted text files
pub const TEXT_DIR: &str = "text";

/// Resolved paths of every directory a crawl writes into
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    html_dir: PathBuf,
    text_dir: PathBuf,
}

impl OutputLayout {
    /// Computes the layout under `root` without touching the filesystem
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            html_dir: root.join(HTML_DIR),
            text_dir: root.join(TEXT_DIR),
            root,
        }
    }

    /// Creates the root, `html/` and `text/` directories if absent
    pub fn create(&self) -> Result<(), OutputError> {
        for dir in [&self.root, &self.html_dir, &self.text_dir] {
            fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn html_dir(&self) -> &Path {
        &self.html_dir
    }

    pub fn text_dir(&self) -> &Path {
        &self.text_dir
    }

    /// Path of the HTML copy for a derived base name
    pub fn html_path(&self, name: &str) -> PathBuf {
        self.html_dir.join(format!("{}.html", name))
    }

    /// Path of the text file for a derived base name
    pub fn text_path(&self, name: &str) -> PathBuf {
        self.text_dir.join(format!("{}.txt", name))
    }

    /// Writes the raw HTML for a page, overwriting any previous file
    pub fn write_html(&self, name: &str, html: &str) -> Result<PathBuf, OutputError> {
        let path = self.html_path(name);
        fs::write(&path, html).map_err(|e| OutputError::io(&path, e))?;
        Ok(path)
    }

    /// Writes the text rendering for a page, overwriting any previous file
    pub fn write_text(
        &self,
        name: &str,
        title: &str,
        url: &str,
        text: &str,
    ) -> Result<PathBuf, OutputError> {
        let path = self.text_path(name);
        fs::write(&path, format_text_document(title, url, text))
            .map_err(|e| OutputError::io(&path, e))?;
        Ok(path)
    }
}

/// Renders a text file: `Title:` line, `URL:` line, blank line, body
pub fn format_text_document(title: &str, url: &str, text: &str) -> String {
    format!("Title: {}\nURL: {}\n\n{}", title, url, text)
}
