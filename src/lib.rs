#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,  // heading levels fit u8, counts fit usize
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::missing_errors_doc,        // errors are the file layer's, documented there
    clippy::missing_panics_doc         // only static-pattern expects
)]

pub mod error;
pub mod format;
pub mod outline;
pub mod report;
pub mod scan;
pub mod types;

pub use types::{HeadingNode, HeadingRecord, IgnoreRegion, RegionKind, ValidationReport};

/// Every byte range heading detection must skip: code blocks, HTML blocks,
/// HTML comments, frontmatter. Sorted, non-overlapping.
#[must_use]
pub fn regions(text: &str) -> Vec<IgnoreRegion> {
    scan::scan(text)
}

/// The flat heading sequence, document order, ignore regions honored.
/// Ids are per-heading base slugs — run the list through
/// [`outline::anchor::assign_unique_ids`] before rendering anchors.
#[must_use]
pub fn headings(text: &str) -> Vec<HeadingRecord> {
    outline::extract(text)
}

/// The table-of-contents forest for a document.
#[must_use]
pub fn toc(text: &str) -> Vec<HeadingNode> {
    outline::tree::build_tree(&outline::extract(text))
}

/// Structural report: hierarchy jumps, duplicate anchor ids, level
/// distribution. Never fails; malformed markdown degrades to warnings.
#[must_use]
pub fn validate(text: &str) -> ValidationReport {
    report::validate::validate(text)
}

/// Plain-text excerpt with code, HTML, and frontmatter stripped.
/// At most `max_length` characters plus a trailing `...` when truncated.
#[must_use]
pub fn summarize(text: &str, max_length: usize) -> String {
    report::summary::summarize(text, max_length)
}
