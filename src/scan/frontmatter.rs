//! Frontmatter detection — a leading `---` delimited metadata block.
//!
//! Only located, never parsed: metadata extraction belongs to the content
//! loader. The region exists so the delimiters and the metadata body never
//! read as headings or content.

use super::line_spans;
use crate::types::{IgnoreRegion, RegionKind};

/// The frontmatter region, if the document starts with one.
/// Always `start = 0`. The opening delimiter must be the first line and
/// the closing delimiter needs at least one line between them.
pub(crate) fn region(text: &str) -> Option<IgnoreRegion> {
    for (i, (start, end)) in line_spans(text).enumerate() {
        let line = &text[start..end];
        match i {
            0 => {
                if start != 0 || !is_delimiter(line) {
                    return None;
                }
            }
            // Document line 1 cannot close: the body must contribute at
            // least the newline before the closing delimiter.
            1 => {}
            _ if is_delimiter(line) => {
                let region_end = if end < text.len() { end + 1 } else { text.len() };
                return Some(IgnoreRegion {
                    start: 0,
                    end: region_end,
                    kind: RegionKind::Frontmatter,
                });
            }
            _ => {}
        }
    }
    None
}

/// Exactly `---` plus optional trailing whitespace.
fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.trim().is_empty())
}
