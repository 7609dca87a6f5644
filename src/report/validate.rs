//! Heading-structure validation for authoring and QA tooling.
//!
//! Structural problems are warnings collected into a report — never
//! errors. A document with zero headings is the one case that is invalid
//! outright: there is nothing to build a table of contents from.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::outline;
use crate::types::ValidationReport;

/// Validate the heading structure of a document.
#[must_use]
pub fn validate(text: &str) -> ValidationReport {
    let headings = outline::extract(text);

    if headings.is_empty() {
        return ValidationReport {
            is_valid: false,
            issues: vec!["No headings found for table of contents".to_string()],
            heading_count: 0,
            level_distribution: BTreeMap::new(),
        };
    }

    let mut issues = Vec::new();

    // Hierarchy: a heading may go at most one level deeper than its
    // predecessor. The first heading sets the baseline unchallenged.
    let mut prev_level = 0u8;
    for heading in &headings {
        if prev_level > 0 && heading.level > prev_level + 1 {
            issues.push(format!(
                "Heading level jump from h{prev_level} to h{}: \"{}\"",
                heading.level, heading.text
            ));
        }
        prev_level = heading.level;
    }

    // Duplicate base ids, reported once each in first-seen order.
    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for heading in &headings {
        if !seen.insert(heading.id.as_str()) && !duplicates.contains(&heading.id.as_str()) {
            duplicates.push(heading.id.as_str());
        }
    }
    if !duplicates.is_empty() {
        issues.push(format!(
            "Duplicate heading IDs found: {}",
            duplicates.join(", ")
        ));
    }

    let mut level_distribution = BTreeMap::new();
    for heading in &headings {
        *level_distribution.entry(heading.level).or_insert(0) += 1;
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        heading_count: headings.len(),
        level_distribution,
    }
}
