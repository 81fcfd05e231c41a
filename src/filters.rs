use crate::error::TofiError;
use crate::markers::{find_marker, Marker, MARKERS};

/// Select the markers to report from a list of keywords (case-insensitive).
///
/// An empty list selects every marker. The result always follows the marker
/// table order, whatever order the keywords were given in.
pub fn select_markers(keywords: &[String]) -> Result<Vec<Marker>, TofiError> {
    if keywords.is_empty() {
        return Ok(MARKERS.to_vec());
    }

    let mut wanted = Vec::new();
    for keyword in keywords {
        let marker = find_marker(keyword.trim())
            .ok_or_else(|| TofiError::Config(format!("unknown marker type: {}", keyword)))?;
        wanted.push(marker);
    }

    Ok(MARKERS
        .iter()
        .filter(|marker| wanted.contains(marker))
        .copied()
        .collect())
}
