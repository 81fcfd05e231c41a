//! Tofi - Print TODOs, FIXMEs & Co.
//!
//! Scans source files for annotation markers (BUG, FIXME, HACK, NOTE, OPTIMIZE,
//! TODO, XXX) written in comments and prints each one, together with the comment
//! lines that continue it.
//!
//! # Features
//!
//! - Language-agnostic: recognizes `//`, `#`, `/* */`, `/** */`, `--`, `;`, `%`
//!   and quote-style comments by a lexical heuristic, no parsing involved
//! - Follows multi-line comments and joins them into a single output line
//! - Colorized output with optional line numbers, symbols, keywords and headers
//! - Terminal or JSON output
//!
//! # Example
//!
//! ```rust
//! use tofi::markers::MARKERS;
//! use tofi::scanner::scan_str;
//! use std::path::Path;
//!
//! let report = scan_str(Path::new("main.rs"), "// TODO fix\n// more here\n", &MARKERS);
//! assert_eq!(report.annotations[0].text, " fix more here");
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod markers;
pub mod models;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use error::TofiError;
pub use markers::{Marker, MARKERS};
pub use models::{Annotation, Config, DisplayOptions, FileReport};
