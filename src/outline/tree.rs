//! TOC tree construction — an ancestry-stack fold over the flat heading
//! list. Single left-to-right pass, O(n) in heading count.

use super::anchor;
use crate::types::{HeadingNode, HeadingRecord};

/// Fold records (document order) into a forest. A heading nests under the
/// nearest preceding heading of strictly lower level; an equal or higher
/// level pops the ancestry stack and the heading becomes a sibling. The
/// first record seeds the forest whatever its level is.
#[must_use]
pub fn build_tree(records: &[HeadingRecord]) -> Vec<HeadingNode> {
    let mut forest: Vec<HeadingNode> = Vec::new();
    let mut stack: Vec<HeadingNode> = Vec::new();

    for record in records {
        let node = HeadingNode {
            level: record.level,
            text: record.text.clone(),
            id: anchor::prefixed_id(&record.text, record.level),
            children: Vec::new(),
        };

        while stack.last().is_some_and(|top| top.level >= node.level) {
            if let Some(done) = stack.pop() {
                attach(&mut forest, &mut stack, done);
            }
        }
        stack.push(node);
    }

    while let Some(done) = stack.pop() {
        attach(&mut forest, &mut stack, done);
    }
    forest
}

/// A finished node goes under the new stack top, or into the forest when
/// no ancestor remains.
fn attach(forest: &mut Vec<HeadingNode>, stack: &mut [HeadingNode], node: HeadingNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => forest.push(node),
    }
}

/// Depth-first flatten back to `(level, text)` pairs in document order.
#[must_use]
pub fn flatten(nodes: &[HeadingNode]) -> Vec<(u8, String)> {
    let mut out = Vec::new();
    for node in nodes {
        out.push((node.level, node.text.clone()));
        out.extend(flatten(&node.children));
    }
    out
}
