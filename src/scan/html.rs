//! HTML regions: comments and paired-tag blocks.
//!
//! MDX content mixes raw HTML into markdown; anything between an opening
//! tag and its matching close is ignored for heading purposes, as is
//! everything inside `<!-- -->`. Unterminated constructs yield no region,
//! so the scan never fails.

use crate::types::{IgnoreRegion, RegionKind};

/// `<!--` through the next `-->`, newlines included.
pub(crate) fn comments(text: &str, regions: &mut Vec<IgnoreRegion>) {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while let Some(open) = memchr::memmem::find(&bytes[pos..], b"<!--").map(|i| pos + i) {
        let Some(end) =
            memchr::memmem::find(&bytes[open + 4..], b"-->").map(|i| open + 4 + i + 3)
        else {
            break;
        };
        regions.push(IgnoreRegion {
            start: open,
            end,
            kind: RegionKind::Comment,
        });
        pos = end;
    }
}

/// An opening `<name …>` through the next `</name>` of the same name.
/// First non-overlapping occurrence per scan position; candidates starting
/// inside an already-found region are dropped. Self-closing tags and
/// unmatched opens yield no region.
pub(crate) fn blocks(text: &str, regions: &mut Vec<IgnoreRegion>) {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(open) = memchr::memchr(b'<', &bytes[pos..]).map(|i| pos + i) {
        let Some((name, body_start)) = opening_tag(text, open) else {
            pos = open + 1;
            continue;
        };
        let close_pat = format!("</{name}>");
        let Some(end) = memchr::memmem::find(&bytes[body_start..], close_pat.as_bytes())
            .map(|i| body_start + i + close_pat.len())
        else {
            pos = open + 1;
            continue;
        };
        let covered = regions.iter().chain(found.iter()).any(|r| r.contains(open));
        if !covered {
            found.push(IgnoreRegion {
                start: open,
                end,
                kind: RegionKind::Html,
            });
        }
        pos = end;
    }
    regions.append(&mut found);
}

/// Parse an opening tag at `start` (which must point at `<`). Returns the
/// tag name and the offset just past the `>`. Closing tags, comments,
/// and self-closing tags are rejected.
fn opening_tag(text: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let name_start = start + 1;
    if !bytes.get(name_start)?.is_ascii_alphabetic() {
        return None;
    }
    let name_len = bytes[name_start..]
        .iter()
        .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'-')
        .count();
    let name_end = name_start + name_len;

    let gt = memchr::memchr(b'>', &bytes[name_end..]).map(|i| name_end + i)?;
    if gt > name_end {
        // Attributes must be separated from the name.
        let after_name = bytes[name_end];
        if !after_name.is_ascii_whitespace() && after_name != b'/' {
            return None;
        }
    }
    if bytes[gt - 1] == b'/' {
        return None;
    }
    Some((&text[name_start..name_end], gt + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_regions(text: &str) -> Vec<IgnoreRegion> {
        let mut regions = Vec::new();
        comments(text, &mut regions);
        regions
    }

    fn block_regions(text: &str) -> Vec<IgnoreRegion> {
        let mut regions = Vec::new();
        blocks(text, &mut regions);
        regions
    }

    #[test]
    fn comment_spans_newlines() {
        let text = "before <!-- line one\nline two --> after";
        let regions = comment_regions(text);
        assert_eq!(regions.len(), 1);
        assert_eq!(&text[regions[0].start..regions[0].end], "<!-- line one\nline two -->");
    }

    #[test]
    fn comment_is_non_greedy() {
        let text = "<!-- a --> keep <!-- b -->";
        let regions = comment_regions(text);
        assert_eq!(regions.len(), 2);
        assert_eq!(&text[regions[0].start..regions[0].end], "<!-- a -->");
    }

    #[test]
    fn unterminated_comment_yields_nothing() {
        assert!(comment_regions("text <!-- never closed").is_empty());
    }

    #[test]
    fn block_matches_same_tag_name() {
        let text = "pre <div class=\"x\">\n# inside\n</div> post";
        let regions = block_regions(text);
        assert_eq!(regions.len(), 1);
        assert!(text[regions[0].start..regions[0].end].ends_with("</div>"));
    }

    #[test]
    fn block_skips_foreign_closing_tag() {
        // </span> cannot close <div>; the real </div> does.
        let text = "<div>a</span>b</div>";
        let regions = block_regions(text);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].end, text.len());
    }

    #[test]
    fn unmatched_open_yields_nothing() {
        assert!(block_regions("some <div> never closed").is_empty());
    }

    #[test]
    fn self_closing_yields_nothing() {
        assert!(block_regions("text <br/> more <img src=\"x\"/> end").is_empty());
    }

    #[test]
    fn closing_tag_alone_yields_nothing() {
        assert!(block_regions("stray </div> here").is_empty());
    }

    #[test]
    fn block_inside_existing_region_dropped() {
        let text = "<!-- <b>x</b> --> <i>y</i>";
        let mut regions = Vec::new();
        comments(text, &mut regions);
        blocks(text, &mut regions);
        let html: Vec<_> = regions
            .iter()
            .filter(|r| r.kind == RegionKind::Html)
            .collect();
        assert_eq!(html.len(), 1);
        assert_eq!(&text[html[0].start..html[0].end], "<i>y</i>");
    }

    #[test]
    fn nested_same_tag_matches_first_close() {
        let text = "<div><div>x</div></div>";
        let regions = block_regions(text);
        // Outer open pairs with the first </div>; the rest is rescanned.
        assert_eq!(regions.len(), 1);
        assert_eq!(&text[regions[0].start..regions[0].end], "<div><div>x</div>");
    }
}
