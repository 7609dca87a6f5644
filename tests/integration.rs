//! Integration tests exercising the public analysis API end to end:
//! raw markdown in, regions/headings/trees/reports out. Fixtures cover
//! the constructs a real docs tree throws at the scanner.

use std::path::PathBuf;

use strata::outline::anchor::{assign_unique_ids, CollisionPolicy, IdAllocator};
use strata::outline::tree;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

// ---------------------------------------------------------------------------
// Ignore regions and heading extraction
// ---------------------------------------------------------------------------

#[test]
fn fenced_code_never_produces_headings() {
    let text = "# Title\n\n```js\n# not a heading\n```\n\n## Sub";
    let headings = strata::headings(text);

    let pairs: Vec<(u8, &str)> = headings.iter().map(|h| (h.level, h.text.as_str())).collect();
    assert_eq!(pairs, vec![(1, "Title"), (2, "Sub")]);
}

#[test]
fn kitchen_sink_extracts_exactly_the_real_headings() {
    let text = fixture("kitchen-sink.md");
    let texts: Vec<String> = strata::headings(&text).into_iter().map(|h| h.text).collect();
    assert_eq!(
        texts,
        vec![
            "Introduction",
            "Fenced Code",
            "Indented Code",
            "HTML Territory",
            "Nested Detail",
            "Fenced Code",
        ]
    );
}

#[test]
fn no_heading_position_falls_inside_any_region() {
    let text = fixture("kitchen-sink.md");
    let regions = strata::regions(&text);
    let headings = strata::headings(&text);

    for h in &headings {
        assert!(
            !regions.iter().any(|r| h.position >= r.start && h.position < r.end),
            "heading \"{}\" at {} sits inside a region",
            h.text,
            h.position
        );
    }
}

#[test]
fn regions_are_sorted_and_disjoint() {
    let text = fixture("kitchen-sink.md");
    let regions = strata::regions(&text);

    assert!(!regions.is_empty());
    for r in &regions {
        assert!(r.start <= r.end);
    }
    for pair in regions.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "overlap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn unclosed_fence_swallows_the_rest_of_the_document() {
    let text = "# Before\n```\n# inside forever\n## also inside";
    let headings = strata::headings(text);
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text, "Before");
}

// ---------------------------------------------------------------------------
// TOC tree
// ---------------------------------------------------------------------------

#[test]
fn sibling_and_child_nesting() {
    let nodes = strata::toc("## A\n### B\n### C\n## D");

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].text, "A");
    let children: Vec<&str> = nodes[0].children.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(children, vec!["B", "C"]);
    assert_eq!(nodes[1].text, "D");
    assert!(nodes[1].children.is_empty());
}

#[test]
fn flatten_reproduces_extraction_order() {
    let text = fixture("kitchen-sink.md");
    let headings = strata::headings(&text);
    let flat = tree::flatten(&strata::toc(&text));

    let expected: Vec<(u8, String)> = headings.iter().map(|h| (h.level, h.text.clone())).collect();
    assert_eq!(flat, expected);
}

#[test]
fn toc_ids_are_stable_across_independent_calls() {
    let text = fixture("kitchen-sink.md");
    let first = strata::toc(&text);
    let second = strata::toc(&text);
    assert_eq!(first, second);
    assert_eq!(first[0].id, "heading1introduction");
}

#[test]
fn duplicate_sections_share_a_toc_id() {
    // Known limitation: the deterministic TOC id does not deduplicate,
    // so anchor navigation is best-effort on collision.
    let text = fixture("kitchen-sink.md");
    let flat_ids: Vec<String> = strata::headings(&text)
        .iter()
        .map(|h| strata::outline::anchor::prefixed_id(&h.text, h.level))
        .collect();
    let dupes = flat_ids
        .iter()
        .filter(|id| *id == "heading2fencedcode")
        .count();
    assert_eq!(dupes, 2);
}

// ---------------------------------------------------------------------------
// Anchor ids
// ---------------------------------------------------------------------------

#[test]
fn shared_allocator_suffixes_identical_headings() {
    let mut records = strata::headings("# Same\n# Same");
    assign_unique_ids(&mut records);

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["same", "same-1"]);
}

#[test]
fn fresh_allocators_are_deterministic() {
    let mut a = IdAllocator::new(CollisionPolicy::Suffix);
    let mut b = IdAllocator::new(CollisionPolicy::Suffix);
    assert_eq!(a.allocate("Install Guide"), b.allocate("Install Guide"));

    // Same text twice through one shared allocator: two distinct ids.
    let mut shared = IdAllocator::new(CollisionPolicy::Suffix);
    let first = shared.allocate("Install Guide");
    let second = shared.allocate("Install Guide");
    assert_ne!(first, second);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn frontmatter_only_document_is_invalid() {
    let text = fixture("frontmatter-only.md");
    assert!(strata::headings(&text).is_empty());

    let report = strata::validate(&text);
    assert!(!report.is_valid);
    assert!(report.issues[0].starts_with("No headings found"));
}

#[test]
fn hierarchy_jump_names_the_offending_heading() {
    let report = strata::validate("# One\n### Three");
    assert!(!report.is_valid);
    assert!(
        report.issues.iter().any(|i| i.contains("Three")),
        "issues should reference the jumping heading: {:?}",
        report.issues
    );
}

#[test]
fn kitchen_sink_reports_its_duplicate_section() {
    let report = strata::validate(&fixture("kitchen-sink.md"));
    assert!(!report.is_valid);
    assert_eq!(report.heading_count, 6);
    assert!(
        report
            .issues
            .iter()
            .any(|i| i.contains("Duplicate") && i.contains("fenced-code")),
        "expected a duplicate-id issue: {:?}",
        report.issues
    );
    assert_eq!(report.level_distribution.get(&2), Some(&4));
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[test]
fn summary_is_code_free_and_bounded() {
    let text = fixture("kitchen-sink.md");
    let summary = strata::summarize(&text, 120);

    assert!(summary.len() <= 123, "length {} exceeds bound", summary.len());
    assert!(!summary.contains("fn main"));
    assert!(!summary.contains("let x"));
    assert!(!summary.contains("```"));
    assert!(summary.contains("Opening prose"));
}

#[test]
fn summary_bound_holds_for_any_cap() {
    let text = fixture("kitchen-sink.md");
    for max in [0, 1, 10, 50, 1000] {
        let summary = strata::summarize(&text, max);
        assert!(summary.len() <= max + 3, "cap {max} gave length {}", summary.len());
    }
}

#[test]
fn empty_document_yields_empty_everything() {
    assert!(strata::regions("").is_empty());
    assert!(strata::headings("").is_empty());
    assert!(strata::toc("").is_empty());
    assert_eq!(strata::summarize("", 100), "");
}
