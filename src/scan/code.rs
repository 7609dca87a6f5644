//! Code span detection: fenced blocks, indented blocks, inline spans.

use super::line_spans;
use crate::types::{CodeSpan, CodeSpanKind};

/// All code spans in `text`, in detection order: fenced first, then
/// indented runs outside fences, then inline spans outside both.
pub(crate) fn code_spans(text: &str) -> Vec<CodeSpan> {
    let mut spans = fenced(text);
    indented(text, &mut spans);
    inline(text, &mut spans);
    spans
}

/// A fence line: optional leading whitespace, then three or more backticks
/// or tildes. Returns the fence byte, its repeat count, and the rest of
/// the line after the run.
fn fence_line(line: &str) -> Option<(u8, usize, &str)> {
    let trimmed = line.trim_start();
    let bytes = trimmed.as_bytes();
    let fence = *bytes.first()?;
    if fence != b'`' && fence != b'~' {
        return None;
    }
    let len = bytes.iter().take_while(|&&b| b == fence).count();
    if len < 3 {
        return None;
    }
    Some((fence, len, &trimmed[len..]))
}

/// Fenced blocks. A block closes at the next fence line using the same
/// character repeated at least as many times; anything else inside stays
/// content. An unclosed fence extends to end of text.
fn fenced(text: &str) -> Vec<CodeSpan> {
    let mut spans = Vec::new();
    // (fence byte, fence length, block start, language token)
    let mut open: Option<(u8, usize, usize, Option<String>)> = None;

    for (start, end) in line_spans(text) {
        let Some((fence, len, rest)) = fence_line(&text[start..end]) else {
            continue;
        };
        match open.take() {
            None => {
                let lang = rest.trim();
                let language = (!lang.is_empty()).then(|| lang.to_string());
                open = Some((fence, len, start, language));
            }
            Some((oc, olen, ostart, language)) => {
                if fence == oc && len >= olen {
                    spans.push(CodeSpan {
                        start: ostart,
                        end,
                        kind: CodeSpanKind::Fenced,
                        language,
                    });
                } else {
                    open = Some((oc, olen, ostart, language));
                }
            }
        }
    }

    if let Some((_, _, ostart, language)) = open {
        spans.push(CodeSpan {
            start: ostart,
            end: text.len(),
            kind: CodeSpanKind::Fenced,
            language,
        });
    }
    spans
}

/// Indented blocks: maximal runs of consecutive non-blank lines indented
/// four or more spaces. Blank lines end a run; one span covers the whole
/// run. A run whose first line sits inside a fenced span is skipped.
fn indented(text: &str, spans: &mut Vec<CodeSpan>) {
    let mut run: Option<(usize, usize)> = None;

    for (start, end) in line_spans(text) {
        let line = &text[start..end];
        let is_code = line.starts_with("    ") && !line.trim().is_empty();

        match run {
            Some((rs, _)) if is_code => run = Some((rs, end)),
            Some((rs, re)) => {
                spans.push(CodeSpan {
                    start: rs,
                    end: re,
                    kind: CodeSpanKind::Indented,
                    language: None,
                });
                run = None;
            }
            None if is_code && !in_span(spans, start) => run = Some((start, end)),
            None => {}
        }
    }

    if let Some((rs, re)) = run {
        spans.push(CodeSpan {
            start: rs,
            end: re,
            kind: CodeSpanKind::Indented,
            language: None,
        });
    }
}

/// Inline spans: a backtick, one or more non-backtick bytes, a backtick.
/// Spans may cross newlines. Scanning resumes after each closing backtick;
/// spans starting inside a fenced or indented span are dropped.
fn inline(text: &str, spans: &mut Vec<CodeSpan>) {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(open) = memchr::memchr(b'`', &bytes[pos..]).map(|i| pos + i) {
        let Some(close) = memchr::memchr(b'`', &bytes[open + 1..]).map(|i| open + 1 + i) else {
            break;
        };
        if close == open + 1 {
            // Empty pair — retry with the second backtick as opener.
            pos = open + 1;
            continue;
        }
        if !in_span(spans, open) {
            found.push(CodeSpan {
                start: open,
                end: close + 1,
                kind: CodeSpanKind::Inline,
                language: None,
            });
        }
        pos = close + 1;
    }
    spans.append(&mut found);
}

fn in_span(spans: &[CodeSpan], pos: usize) -> bool {
    spans.iter().any(|s| pos >= s.start && pos < s.end)
}
