use crate::markers::{is_block_token, Marker, CONTINUATION_PREFIXES, OPENING_TOKENS};

/// Width of the window, before a keyword, searched for a comment opener
const TOKEN_WINDOW: usize = 3;

/// A marker found inside a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub marker: Marker,

    /// Comment opener detected in front of the keyword
    pub token: &'static str,

    /// Everything after the first occurrence of the keyword
    pub text: String,
}

/// Classify a line against every marker, in table order.
///
/// Each returned entry opens a new annotation block; when several markers hit
/// the same line the last one is the block that stays active.
pub fn classify(line: &str, markers: &[Marker]) -> Vec<Classified> {
    markers
        .iter()
        .filter_map(|marker| classify_marker(line, marker))
        .collect()
}

/// Classify a line against one marker
pub fn classify_marker(line: &str, marker: &Marker) -> Option<Classified> {
    let (before, after) = line.split_once(marker.keyword)?;
    let token = opening_token(before)?;

    Some(Classified {
        marker: *marker,
        token,
        text: after.to_string(),
    })
}

/// Find the comment opener at the end of the text preceding a keyword.
///
/// Only the trailing characters of the last word are inspected, so `x = 1 # TODO`
/// and `#TODO` both resolve to `#` while `call(TODO)` resolves to nothing.
pub fn opening_token(before: &str) -> Option<&'static str> {
    let word = before.split_whitespace().next_back()?;
    let window = last_chars(word, TOKEN_WINDOW);

    OPENING_TOKENS
        .iter()
        .copied()
        .find(|token| window.contains(token))
}

/// Decide whether `line` continues the block opened with `token`.
///
/// Returns the cleaned continuation text (single leading space, whitespace runs
/// collapsed) or `None` when the block ends on this line.
pub fn continuation(line: &str, token: &str) -> Option<String> {
    if let Some((_, rest)) = line.split_once(token) {
        let parts: Vec<&str> = rest.split(token).collect();
        return Some(collapse(&parts.join(" ")));
    }

    let mut words = line.split_whitespace();
    match words.next() {
        Some(first) if CONTINUATION_PREFIXES.contains(&first) => {
            Some(collapse(&words.collect::<Vec<_>>().join(" ")))
        }
        _ if is_block_token(token) => Some(collapse(line)),
        _ => None,
    }
}

fn collapse(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    format!(" {}", words.join(" "))
}

fn last_chars(word: &str, count: usize) -> &str {
    match word.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => &word[idx..],
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{find_marker, MARKERS};

    fn todo() -> Marker {
        find_marker("TODO").unwrap()
    }

    #[test]
    fn test_classify_line_comment() {
        let found = classify_marker("    // TODO: implement this", &todo()).unwrap();
        assert_eq!(found.token, "//");
        assert_eq!(found.text, ": implement this");
    }

    #[test]
    fn test_classify_various_openers() {
        assert_eq!(classify_marker("# TODO x", &todo()).unwrap().token, "#");
        assert_eq!(classify_marker("/* TODO x */", &todo()).unwrap().token, "/*");
        assert_eq!(classify_marker("/** TODO x", &todo()).unwrap().token, "/**");
        assert_eq!(classify_marker("-- TODO x", &todo()).unwrap().token, "--");
        assert_eq!(classify_marker("; TODO x", &todo()).unwrap().token, ";");
        assert_eq!(classify_marker("x = 1 #TODO x", &todo()).unwrap().token, "#");
    }

    #[test]
    fn test_classify_without_comment() {
        assert!(classify_marker("let TODO = 1;", &todo()).is_none());
        assert!(classify_marker("TODO at line start", &todo()).is_none());
        assert!(classify_marker("call(TODO)", &todo()).is_none());
        assert!(classify_marker("// nothing here", &todo()).is_none());
    }

    #[test]
    fn test_only_trailing_window_is_inspected() {
        // the opener is further back than the last three characters
        assert!(classify_marker("//abcd TODO x", &todo()).is_none());
        assert!(classify_marker("foo();// TODO x", &todo()).is_some());
    }

    #[test]
    fn test_classify_keeps_text_after_first_occurrence() {
        let found = classify_marker("// TODO one TODO two", &todo()).unwrap();
        assert_eq!(found.text, " one TODO two");
    }

    #[test]
    fn test_classify_is_substring_based() {
        let found = classify_marker("// TODOLIST cleanup", &todo()).unwrap();
        assert_eq!(found.text, "LIST cleanup");
    }

    #[test]
    fn test_classify_multiple_markers_in_table_order() {
        let found = classify("// FIXME // TODO x", &MARKERS);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].marker.keyword, "FIXME");
        assert_eq!(found[1].marker.keyword, "TODO");
        assert_eq!(found[1].text, " x");

        // FIXME is preceded by a plain word, so only TODO opens a block
        let found = classify("// TODO fix FIXME later", &MARKERS);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].marker.keyword, "TODO");
    }

    #[test]
    fn test_continuation_repeated_token() {
        assert_eq!(continuation("// more here", "//").as_deref(), Some(" more here"));
        assert_eq!(
            continuation("   #   spaced    out  ", "#").as_deref(),
            Some(" spaced out")
        );
        assert_eq!(continuation("//", "//").as_deref(), Some(" "));
    }

    #[test]
    fn test_continuation_drops_text_before_token() {
        assert_eq!(continuation("code(); // tail", "//").as_deref(), Some(" tail"));
        assert_eq!(continuation("// a // b", "//").as_deref(), Some(" a b"));
    }

    #[test]
    fn test_continuation_star_prefix() {
        assert_eq!(continuation(" * extra", "#").as_deref(), Some(" extra"));
        assert_eq!(continuation("   * more  text", "/*").as_deref(), Some(" more text"));
    }

    #[test]
    fn test_continuation_block_comment_takes_any_line() {
        assert_eq!(continuation("plain text", "/*").as_deref(), Some(" plain text"));
        assert_eq!(continuation("still more */", "/*").as_deref(), Some(" still more */"));
    }

    #[test]
    fn test_continuation_ends_line_comment() {
        assert!(continuation("let x = 1;", "//").is_none());
        assert!(continuation("", "#").is_none());
        assert!(continuation("*/", "//").is_none());
    }
}
