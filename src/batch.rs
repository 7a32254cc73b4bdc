//! Batch validation across a corpus of index files.
//!
//! File pipelines share no state, so the corpus is an embarrassingly
//! parallel map bounded by available cores. Discovery is deterministic
//! (sorted relative paths); unreadable files become skip entries rather
//! than aborting the rest of the corpus.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::RawInput;
use crate::pipeline::{self, ValidationReport};

/// Corpus discovery options.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub root: PathBuf,
    pub include_globs: Vec<String>,
    pub exclude_globs: Vec<String>,
    pub follow_symlinks: bool,
}

impl BatchOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_globs: vec!["**/llms.txt".to_string(), "**/llms-full.txt".to_string()],
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

/// A file that could not be validated, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a corpus run: one report per readable target, in discovery
/// order, plus the skipped files.
#[derive(Debug)]
pub struct BatchOutcome {
    pub reports: Vec<ValidationReport>,
    pub skipped: Vec<SkippedFile>,
}

/// Discover target files under the root: include globs minus default and
/// configured excludes, files only, sorted by relative path.
pub fn discover_targets(options: &BatchOptions) -> Result<Vec<PathBuf>> {
    if !options.root.exists() {
        bail!("Corpus root does not exist: {}", options.root.display());
    }

    let include_set = build_globset(&options.include_globs)?;

    let mut excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    excludes.extend(options.exclude_globs.clone());
    let exclude_set = build_globset(&excludes)?;

    let mut targets = Vec::new();
    let walker = WalkDir::new(&options.root).follow_links(options.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(&options.root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }
        targets.push(path.to_path_buf());
    }

    targets.sort();
    Ok(targets)
}

/// Validate every discovered target in parallel.
pub fn validate_corpus(options: &BatchOptions, config: &Config) -> Result<BatchOutcome> {
    let targets = discover_targets(options)?;

    let results: Vec<std::result::Result<ValidationReport, SkippedFile>> = targets
        .par_iter()
        .map(|path| match std::fs::read(path) {
            Ok(bytes) => {
                let name = display_name(&options.root, path);
                Ok(pipeline::run(&RawInput::new(name, bytes), config))
            }
            Err(err) => Err(SkippedFile {
                path: path.clone(),
                reason: err.to_string(),
            }),
        })
        .collect();

    let mut outcome = BatchOutcome {
        reports: Vec::new(),
        skipped: Vec::new(),
    };
    for result in results {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(skip) => outcome.skipped.push(skip),
        }
    }
    Ok(outcome)
}

fn display_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
