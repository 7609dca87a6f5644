//! Plain-text summaries for excerpts and SEO descriptions.
//!
//! Ignore regions go first (nobody wants a code block in a meta
//! description), then the markdown markers, then whitespace collapses to
//! single spaces and the result is capped.

use crate::scan;
use crate::types::{floor_char_boundary, RegionKind};

/// Summarize `text` to at most `max_length` characters of plain prose,
/// plus a trailing `...` when truncated.
#[must_use]
pub fn summarize(text: &str, max_length: usize) -> String {
    let stripped = strip_regions(text);
    let stripped = strip_heading_markers(&stripped);
    let stripped = strip_pairs(&stripped, "**");
    let stripped = strip_pairs(&stripped, "*");
    let stripped = strip_links(&stripped);
    let stripped = strip_blockquotes(&stripped);
    let stripped = strip_list_markers(&stripped);

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.len() <= max_length {
        return collapsed;
    }
    let cut = floor_char_boundary(&collapsed, max_length);
    format!("{}...", collapsed[..cut].trim_end())
}

/// Remove every ignore region. Code regions are replaced by an equal
/// count of newlines so line-derived offsets survive a re-scan; all other
/// kinds vanish outright.
#[must_use]
pub fn strip_regions(text: &str) -> String {
    let regions = scan::scan(text);
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    for region in &regions {
        out.push_str(&text[pos..region.start]);
        if region.kind == RegionKind::Code {
            let newlines = text[region.start..region.end]
                .bytes()
                .filter(|&b| b == b'\n')
                .count();
            for _ in 0..newlines {
                out.push('\n');
            }
        }
        pos = region.end;
    }
    out.push_str(&text[pos..]);
    out
}

/// Remove `#` heading markers (1–6 hashes plus the whitespace after them)
/// wherever they appear.
fn strip_heading_markers(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'#' {
            let run = bytes[i..].iter().take_while(|&&b| b == b'#').count();
            if run <= 6 && bytes.get(i + run).is_some_and(u8::is_ascii_whitespace) {
                i += run;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
            } else {
                out.push_str(&s[i..i + run]);
                i += run;
            }
        } else {
            let next = memchr::memchr(b'#', &bytes[i..]).map_or(bytes.len(), |j| i + j);
            out.push_str(&s[i..next]);
            i = next;
        }
    }
    out
}

/// Unwrap `{delim}content{delim}` pairs, keeping the content. Content may
/// not contain `*`, so bold must be stripped before italic.
fn strip_pairs(s: &str, delim: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    loop {
        let Some(open) = rest.find(delim) else {
            out.push_str(rest);
            return out;
        };
        let after = &rest[open + delim.len()..];
        match after.find('*') {
            Some(close) if close > 0 && after[close..].starts_with(delim) => {
                out.push_str(&rest[..open]);
                out.push_str(&after[..close]);
                rest = &after[close + delim.len()..];
            }
            _ => {
                // Empty content, wrong closer, or no closer — keep the
                // delimiter and move on.
                out.push_str(&rest[..open + delim.len()]);
                rest = after;
            }
        }
    }
}

/// Replace `[label](url)` with `label`.
fn strip_links(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let link = after.find(']').and_then(|rb| {
            if rb == 0 || !after[rb + 1..].starts_with('(') {
                return None;
            }
            let url = &after[rb + 2..];
            let rp = url.find(')')?;
            if rp == 0 {
                return None;
            }
            Some((rb, rb + 2 + rp + 1))
        });

        match link {
            Some((label_end, consumed)) => {
                out.push_str(&rest[..open]);
                out.push_str(&after[..label_end]);
                rest = &after[consumed..];
            }
            None => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Remove `>` quote markers and the whitespace run after them.
fn strip_blockquotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '>' && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove leading list markers: `-`/`*`/`+` or `1.` style, each followed
/// by whitespace.
fn strip_list_markers(s: &str) -> String {
    s.lines()
        .map(|line| {
            let t = line.trim_start();
            if let Some(rest) = t.strip_prefix(['-', '*', '+']) {
                if rest.starts_with([' ', '\t']) {
                    return rest.trim_start();
                }
            }
            let digits = t.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                if let Some(rest) = t[digits..].strip_prefix('.') {
                    if rest.starts_with([' ', '\t']) {
                        return rest.trim_start();
                    }
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
