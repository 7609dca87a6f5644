//! Content-tree sweeps — validate every markdown file under a directory.
//!
//! This is the QA-tooling face of validation: walk a docs tree, run each
//! content file through `validate`, and collect the per-file reports.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::report::validate::validate;
use crate::types::ValidationReport;

// Directories that are always skipped — build artifacts, dependencies,
// VCS internals. Docs trees routinely sit next to these.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    "vendor",
    ".next",
    ".nuxt",
    "coverage",
    ".cache",
    "out",
    ".output",
    ".vercel",
    ".netlify",
];

/// One validated file within a sweep.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub report: ValidationReport,
}

/// Validate every markdown file under `scope`, in parallel. Results come
/// back sorted by path; unreadable or non-UTF-8 files are skipped.
#[must_use]
pub fn check_tree(scope: &Path) -> Vec<FileReport> {
    let files = collect_markdown_files(scope);

    let mut results: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| {
            let text = std::fs::read_to_string(path).ok()?;
            Some(FileReport {
                path: path.clone(),
                report: validate(&text),
            })
        })
        .collect();

    results.sort_by(|a, b| a.path.cmp(&b.path));
    results
}

/// Walk `scope` for content files, skipping junk directories. Does not
/// respect .gitignore — drafts and generated docs are still worth
/// checking when they sit in the tree.
fn collect_markdown_files(scope: &Path) -> Vec<PathBuf> {
    let matcher = markdown_globs();
    let mut files = Vec::new();

    let walker = WalkBuilder::new(scope)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .filter_entry(|entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if let Some(name) = entry.file_name().to_str() {
                    return !SKIP_DIRS.contains(&name);
                }
            }
            true
        })
        .build();

    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or("");
        if matcher.is_match(name) {
            files.push(entry.into_path());
        }
    }
    files
}

fn markdown_globs() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in ["*.md", "*.mdx", "*.markdown"] {
        builder.add(Glob::new(pattern).expect("static glob pattern"));
    }
    builder.build().expect("static glob set")
}
