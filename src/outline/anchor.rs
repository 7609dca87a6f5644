//! Anchor id derivation — the URL-fragment-safe names headings answer to.
//!
//! Two styles with different stability trade-offs:
//! - slug style (`getting-started`), readable, deduplicated through an
//!   [`IdAllocator`];
//! - prefixed style (`heading2gettingstarted`), deterministic across
//!   independent extraction calls, duplicates tolerated by the consumer.
//!
//! Both guarantee a non-empty result that never starts with a digit.

use std::collections::HashSet;

use crate::types::HeadingRecord;

/// What to do when a freshly derived id is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Append `-1`, `-2`, … until the id is free.
    #[default]
    Suffix,
    /// Hand back the base id unchanged; the consumer tolerates duplicates.
    Ignore,
}

/// Per-document anchor context. Owns the set of ids handed out so far —
/// one allocator per extraction pass, never shared across documents.
#[derive(Debug, Default)]
pub struct IdAllocator {
    existing: HashSet<String>,
    policy: CollisionPolicy,
}

impl IdAllocator {
    #[must_use]
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            existing: HashSet::new(),
            policy,
        }
    }

    /// Slugify `text` and resolve collisions per the policy.
    pub fn allocate(&mut self, text: &str) -> String {
        let base = slugify(text);
        let id = match self.policy {
            CollisionPolicy::Ignore => base,
            CollisionPolicy::Suffix => {
                let mut candidate = base.clone();
                let mut counter = 1usize;
                while self.existing.contains(&candidate) {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                candidate
            }
        };
        self.existing.insert(id.clone());
        id
    }
}

/// Re-resolve record ids through a fresh `Suffix` allocator so every id in
/// the list is unique. Extraction hands out base slugs only; call sites
/// that render anchors run the list through here.
pub fn assign_unique_ids(records: &mut [HeadingRecord]) {
    let mut ids = IdAllocator::new(CollisionPolicy::Suffix);
    for record in records {
        record.id = ids.allocate(&record.text);
    }
}

/// Slug-style id: lowercase; keep letters, digits, `_`; whitespace and
/// hyphen runs collapse to single hyphens; leading digits stripped so the
/// id never starts with one; empty result falls back to `"heading"`.
#[must_use]
pub fn slugify(text: &str) -> String {
    finish(&slug_base(text))
}

/// Slug id for a heading, or `None` when nothing slug-worthy remains —
/// the extractor discards such headings entirely.
pub(crate) fn heading_id(text: &str) -> Option<String> {
    let base = slug_base(text);
    if base.is_empty() {
        None
    } else {
        Some(finish(&base))
    }
}

/// Prefixed-style id: `heading{level}{sanitized}`. ASCII alphanumerics
/// only, leading digits stripped, lowercased. Collisions are not resolved
/// here — anchor navigation is best-effort when two headings sanitize to
/// the same id.
#[must_use]
pub fn prefixed_id(text: &str, level: u8) -> String {
    let sanitized: String = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    let sanitized = sanitized.trim_start_matches(|c: char| c.is_ascii_digit());
    format!("heading{level}{}", sanitized.to_ascii_lowercase())
}

/// Sanitize and hyphenate, without the digit/fallback finishing rules.
fn slug_base(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

fn finish(base: &str) -> String {
    let stripped = base
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_matches('-');
    if stripped.is_empty() {
        "heading".to_string()
    } else {
        stripped.to_string()
    }
}
