//! Fixed registries: the marker keywords we report and the comment tokens
//! the classifier recognizes around them.

use colored::Color;
use serde::Serialize;

/// Display color of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Yellow,
    Blue,
    Violet,
}

impl MarkerColor {
    pub fn as_color(self) -> Color {
        match self {
            MarkerColor::Red => Color::BrightRed,
            MarkerColor::Yellow => Color::BrightYellow,
            MarkerColor::Blue => Color::BrightBlue,
            MarkerColor::Violet => Color::BrightMagenta,
        }
    }
}

/// A recognized annotation keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// Keyword searched for in each line (exact substring)
    pub keyword: &'static str,

    /// Glyph printed in front of the keyword
    pub symbol: &'static str,

    #[serde(skip)]
    pub color: MarkerColor,
}

/// All markers, in the order they are tried on each line
pub const MARKERS: [Marker; 7] = [
    Marker { keyword: "BUG", symbol: "☢", color: MarkerColor::Red },
    Marker { keyword: "FIXME", symbol: "☠", color: MarkerColor::Red },
    Marker { keyword: "HACK", symbol: "✄", color: MarkerColor::Yellow },
    Marker { keyword: "NOTE", symbol: "✐", color: MarkerColor::Yellow },
    Marker { keyword: "OPTIMIZE", symbol: "↻", color: MarkerColor::Yellow },
    Marker { keyword: "TODO", symbol: "✓", color: MarkerColor::Blue },
    Marker { keyword: "XXX", symbol: "✗", color: MarkerColor::Violet },
];

/// Comment openers, in match priority (`/**` must win over `/*`)
pub const OPENING_TOKENS: [&str; 9] = ["/**", "/*", "//", "#", "''", "\"\"", ";", "%", "--"];

/// Leading words that mark a comment continuation line (` * more text`)
pub const CONTINUATION_PREFIXES: [&str; 1] = ["*"];

/// Closing tokens of a block-style opener, empty for line comments
pub fn closing_tokens(opening: &str) -> &'static [&'static str] {
    match opening {
        "/**" => &["**/", "*/"],
        "/*" => &["*/"],
        _ => &[],
    }
}

/// Block comments keep going until a closing token, line comments do not
pub fn is_block_token(opening: &str) -> bool {
    !closing_tokens(opening).is_empty()
}

/// Look up a marker by keyword (case-insensitive)
pub fn find_marker(keyword: &str) -> Option<Marker> {
    MARKERS
        .iter()
        .find(|marker| marker.keyword.eq_ignore_ascii_case(keyword))
        .copied()
}
