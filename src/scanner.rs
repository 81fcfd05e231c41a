use crate::classifier::{classify, continuation, Classified};
use crate::markers::{closing_tokens, Marker};
use crate::models::{Annotation, FileReport};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// The block currently collecting continuation lines
#[derive(Debug, Clone)]
struct AnnotationBlock {
    marker: Marker,
    token: &'static str,
    line_number: usize,
    text: String,
}

impl AnnotationBlock {
    fn open(found: Classified, line_number: usize) -> Self {
        Self {
            marker: found.marker,
            token: found.token,
            line_number,
            text: found.text,
        }
    }

    fn close(self) -> Annotation {
        Annotation {
            marker: self.marker,
            line_number: self.line_number,
            text: truncate_at_close(self.text, self.token),
        }
    }
}

#[derive(Debug, Default)]
enum BlockState {
    #[default]
    Idle,
    Active(AnnotationBlock),
}

/// Cut block comment text at the first closing token of its opener
pub fn truncate_at_close(mut text: String, token: &str) -> String {
    for close in closing_tokens(token) {
        if let Some(idx) = text.find(*close) {
            text.truncate(idx);
        }
    }
    text
}

/// Line-by-line state machine for a single file
#[derive(Debug)]
pub struct FileScanner<'a> {
    markers: &'a [Marker],
    state: BlockState,
    line_number: usize,
    annotations: Vec<Annotation>,
}

impl<'a> FileScanner<'a> {
    pub fn new(markers: &'a [Marker]) -> Self {
        Self {
            markers,
            state: BlockState::Idle,
            line_number: 0,
            annotations: Vec::new(),
        }
    }

    /// Feed the next line (without its line terminator)
    pub fn feed(&mut self, line: &str) {
        self.line_number += 1;

        let opened = classify(line, self.markers);
        if !opened.is_empty() {
            for found in opened {
                self.flush();
                self.state = BlockState::Active(AnnotationBlock::open(found, self.line_number));
            }
            return;
        }

        let ended = match &mut self.state {
            BlockState::Active(block) => match continuation(line, block.token) {
                Some(text) => {
                    block.text.push_str(&text);
                    false
                }
                None => true,
            },
            BlockState::Idle => false,
        };

        if ended {
            self.flush();
        }
    }

    /// Close the pending block and return every annotation of the file
    pub fn finish(mut self) -> Vec<Annotation> {
        self.flush();
        self.annotations
    }

    fn flush(&mut self) {
        if let BlockState::Active(block) = std::mem::take(&mut self.state) {
            self.annotations.push(block.close());
        }
    }
}

/// Scan in-memory file contents
pub fn scan_str(path: &Path, contents: &str, markers: &[Marker]) -> FileReport {
    let mut scanner = FileScanner::new(markers);
    let mut line_count = 0;

    for line in split_lines(contents) {
        scanner.feed(line);
        line_count += 1;
    }

    FileReport {
        path: path.to_path_buf(),
        line_count,
        annotations: scanner.finish(),
    }
}

/// Split on `\r\n`, `\n` and a bare `\r`, dropping the terminators
fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &rest[..idx];
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Scan a single file; files that are not valid UTF-8 yield an empty report
pub fn scan_file(path: &Path, markers: &[Marker]) -> Result<FileReport> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let contents = match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(_) => {
            debug!("Skipping {}: not valid UTF-8", path.display());
            return Ok(FileReport::skipped(path.to_path_buf()));
        }
    };

    Ok(scan_str(path, &contents, markers))
}

/// Scan files in parallel, keeping the input order in the result
pub fn scan_files(files: &[PathBuf], markers: &[Marker]) -> Result<Vec<FileReport>> {
    files
        .par_iter()
        .map(|path| scan_file(path, markers))
        .collect()
}

/// Expand files and directories into a flat list sorted by full path string
pub fn collect_files(paths: &[PathBuf], respect_ignore: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk_directory(path, respect_ignore));
        }
    }

    // Compare raw strings, not path components, so `a-b` sorts before `a/b`
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

fn walk_directory(path: &Path, respect_ignore: bool) -> Vec<PathBuf> {
    let mut walker = WalkBuilder::new(path);
    walker.standard_filters(respect_ignore);

    let mut files = Vec::new();
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Symlinked directories are not followed, but they are not files either
        if entry.path().is_dir() {
            continue;
        }

        files.push(entry.into_path());
    }

    files
}
