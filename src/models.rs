use crate::markers::{Marker, MARKERS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A finished annotation block, ready to be reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Marker that opened the block
    pub marker: Marker,

    /// Line the marker was found on (1-indexed)
    pub line_number: usize,

    /// Text after the keyword plus continuation lines, cut at the closing token
    pub text: String,
}

/// Everything found in a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as it was resolved from the command line
    pub path: PathBuf,

    /// Total number of lines in the file
    pub line_count: usize,

    /// Annotation blocks in the order they were closed
    pub annotations: Vec<Annotation>,
}

impl FileReport {
    /// Report for a file that was not scanned (not decodable as text)
    pub fn skipped(path: PathBuf) -> Self {
        Self {
            path,
            line_count: 0,
            annotations: Vec::new(),
        }
    }

    /// Whether any marker opened a block in this file
    pub fn found(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Field width used to right-align line numbers across the file
    pub fn number_width(&self) -> usize {
        self.line_count.to_string().len()
    }
}

/// Which parts of an annotation line are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub numbers: bool,
    pub symbols: bool,
    pub keywords: bool,
    pub filenames: bool,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            numbers: true,
            symbols: true,
            keywords: true,
            filenames: true,
            color: true,
        }
    }
}

/// Configuration for the tofi scanner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Show line numbers
    #[serde(default = "default_true")]
    pub numbers: bool,

    /// Show marker symbols
    #[serde(default = "default_true")]
    pub symbols: bool,

    /// Show marker keywords
    #[serde(default = "default_true")]
    pub keywords: bool,

    /// Show a filename header when several files are scanned
    #[serde(default = "default_true")]
    pub filenames: bool,

    /// Colorize symbols, keywords and numbers
    #[serde(default = "default_true")]
    pub color: bool,

    /// Marker keywords to report
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Honor .gitignore and hidden-file rules when walking directories
    #[serde(default)]
    pub respect_ignore: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numbers: true,
            symbols: true,
            keywords: true,
            filenames: true,
            color: true,
            markers: default_markers(),
            respect_ignore: false,
        }
    }
}

impl Config {
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions {
            numbers: self.numbers,
            symbols: self.symbols,
            keywords: self.keywords,
            filenames: self.filenames,
            color: self.color,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_markers() -> Vec<String> {
    MARKERS.iter().map(|marker| marker.keyword.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::find_marker;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.markers.len(), MARKERS.len());
        assert!(config.markers.contains(&"TODO".to_string()));
        assert!(config.numbers && config.symbols && config.keywords && config.filenames);
        assert!(!config.respect_ignore);
        assert_eq!(config.display(), DisplayOptions::default());
    }

    #[test]
    fn test_number_width() {
        let mut report = FileReport::skipped(PathBuf::from("a.rs"));
        assert_eq!(report.number_width(), 1);

        report.line_count = 9;
        assert_eq!(report.number_width(), 1);

        report.line_count = 120;
        assert_eq!(report.number_width(), 3);
    }

    #[test]
    fn test_found() {
        let mut report = FileReport::skipped(PathBuf::from("a.rs"));
        assert!(!report.found());

        report.annotations.push(Annotation {
            marker: find_marker("TODO").unwrap(),
            line_number: 1,
            text: " x".to_string(),
        });
        assert!(report.found());
    }
}
