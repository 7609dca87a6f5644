//! Ignore-region scanning — the byte intervals heading detection must skip.
//!
//! Each construct (code, HTML comments, HTML blocks, frontmatter) gets its
//! own pass returning raw intervals; `scan` merges them into one sorted,
//! non-overlapping list. All detection is line/byte scanning via memchr —
//! no regex engine, no markdown parser.

pub mod code;
pub mod frontmatter;
pub mod html;

use crate::types::{IgnoreRegion, RegionKind};

/// Scan `text` for every region heading detection must skip.
/// Returned regions are ascending by `start` and never overlap.
#[must_use]
pub fn scan(text: &str) -> Vec<IgnoreRegion> {
    let mut regions: Vec<IgnoreRegion> = code::code_spans(text)
        .into_iter()
        .map(|s| IgnoreRegion {
            start: s.start,
            end: s.end,
            kind: RegionKind::Code,
        })
        .collect();

    html::comments(text, &mut regions);
    html::blocks(text, &mut regions);

    if let Some(fm) = frontmatter::region(text) {
        regions.push(fm);
    }

    merge(regions)
}

/// Is `pos` inside any region? `regions` must be sorted and non-overlapping,
/// as `scan` returns them.
#[must_use]
pub fn is_ignored(regions: &[IgnoreRegion], pos: usize) -> bool {
    let i = regions.partition_point(|r| r.end <= pos);
    regions.get(i).is_some_and(|r| r.contains(pos))
}

/// Interval union with containment-drop. Sorted by (start asc, end desc),
/// any interval starting inside the running covered extent is already
/// covered — nested intervals by construction, partial overlaps by policy.
fn merge(mut regions: Vec<IgnoreRegion>) -> Vec<IgnoreRegion> {
    regions.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<IgnoreRegion> = Vec::with_capacity(regions.len());
    let mut covered = 0;
    for region in regions {
        if region.start < covered {
            continue;
        }
        covered = region.end;
        merged.push(region);
    }
    merged
}

/// Iterate `(line_start, line_end)` byte offsets over `text`, newline
/// excluded. A trailing newline does not produce a phantom empty line.
pub(crate) fn line_spans(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }
        let end = memchr::memchr(b'\n', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
        let span = (pos, end);
        pos = end + 1;
        Some(span)
    })
}
