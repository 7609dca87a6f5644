//! ATX heading extraction honoring ignore regions.

pub mod anchor;
pub mod tree;

use crate::scan::{self, is_ignored, line_spans};
use crate::types::{HeadingRecord, IgnoreRegion};

/// Extract headings from `text`, scanning ignore regions first.
#[must_use]
pub fn extract(text: &str) -> Vec<HeadingRecord> {
    extract_with_regions(text, &scan::scan(text))
}

/// Extract ATX headings whose position lies outside every region.
/// Records come back in ascending `position` order carrying base slug ids;
/// headings with no text (or no slug-worthy text) are dropped.
#[must_use]
pub fn extract_with_regions(text: &str, regions: &[IgnoreRegion]) -> Vec<HeadingRecord> {
    let mut records = Vec::new();

    for (start, end) in line_spans(text) {
        let Some((level, rest)) = heading_line(&text[start..end]) else {
            continue;
        };
        if is_ignored(regions, start) {
            continue;
        }
        let heading_text = rest.trim();
        if heading_text.is_empty() {
            continue;
        }
        let Some(id) = anchor::heading_id(heading_text) else {
            continue;
        };
        records.push(HeadingRecord {
            level,
            text: heading_text.to_string(),
            id,
            position: start,
        });
    }
    records
}

/// One to six `#` at the very start of a line, then a space or tab.
/// Returns the level and the raw text after the separator.
fn heading_line(line: &str) -> Option<(u8, &str)> {
    let bytes = line.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    match bytes.get(level) {
        Some(&b' ' | &b'\t') => Some((level as u8, &line[level + 1..])),
        _ => None,
    }
}
