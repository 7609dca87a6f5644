use std::fmt::Write;
use std::path::Path;

use crate::report::sweep::FileReport;
use crate::types::{truncate_str, HeadingNode, HeadingRecord, IgnoreRegion, ValidationReport};

/// Build the standard header line:
/// `# path/to/file.md (detail) [mode]`
pub fn file_header(path: &Path, detail: &str, mode: &str) -> String {
    format!("# {} ({detail}) [{mode}]", path.display())
}

/// Render the TOC forest, one heading per line:
/// `##` hashes for the level, two-space indent per tree depth, anchor last.
pub fn toc_tree(nodes: &[HeadingNode]) -> String {
    let mut out = String::new();
    push_nodes(nodes, 0, &mut out);
    out
}

fn push_nodes(nodes: &[HeadingNode], depth: usize, out: &mut String) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let hashes = "#".repeat(node.level as usize);
        let _ = writeln!(
            out,
            "{indent}{hashes} {} \u{2192} #{}",
            clip(&node.text),
            node.id
        );
        push_nodes(&node.children, depth + 1, out);
    }
}

/// Flat heading listing with line numbers:
/// `[12] ## Section → #section`
pub fn heading_list(text: &str, records: &[HeadingRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let line = line_number(text, record.position);
        let hashes = "#".repeat(record.level as usize);
        let _ = writeln!(
            out,
            "[{line}] {hashes} {} \u{2192} #{}",
            clip(&record.text),
            record.id
        );
    }
    out
}

/// Render a validation report: level distribution, then issues.
pub fn validation_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    if !report.level_distribution.is_empty() {
        let dist = report
            .level_distribution
            .iter()
            .map(|(level, count)| format!("h{level}\u{00d7}{count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "levels: {dist}");
    }
    if report.is_valid {
        out.push_str("no issues\n");
    } else {
        for issue in &report.issues {
            let _ = writeln!(out, "- {issue}");
        }
    }
    out
}

/// One region per line: `[start-end) kind`.
pub fn region_list(regions: &[IgnoreRegion]) -> String {
    let mut out = String::new();
    for region in regions {
        let _ = writeln!(out, "[{}-{}) {}", region.start, region.end, region.kind);
    }
    out
}

/// Render a directory sweep: totals up front, then a section per file
/// with issues. Clean files stay out of the way.
pub fn sweep_report(scope: &Path, results: &[FileReport]) -> String {
    let problems: Vec<&FileReport> = results.iter().filter(|r| !r.report.is_valid).collect();
    let mut out = format!(
        "# {} \u{2014} {} files checked, {} with issues",
        scope.display(),
        results.len(),
        problems.len()
    );

    for file in problems {
        let n = file.report.issues.len();
        let noun = if n == 1 { "issue" } else { "issues" };
        let _ = write!(out, "\n\n## {} [{n} {noun}]", file.path.display());
        for issue in &file.report.issues {
            let _ = write!(out, "\n  - {issue}");
        }
    }
    out.push('\n');
    out
}

/// 1-indexed line number of a byte offset.
fn line_number(text: &str, pos: usize) -> usize {
    memchr::memchr_iter(b'\n', &text.as_bytes()[..pos]).count() + 1
}

/// Headings are clipped at 80 chars for terminal display.
fn clip(text: &str) -> String {
    if text.len() > 80 {
        format!("{}...", truncate_str(text, 77))
    } else {
        text.to_string()
    }
}
