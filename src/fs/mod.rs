use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::pattern;

/// Conventional ignore file, one glob pattern per line.
pub const DEFAULT_IGNORE_FILE: &str = ".gherkin-lintignore";

/// Built-in fallback when no ignore source is present.
const DEFAULT_IGNORE_PATTERN: &str = "node_modules/**";

/// Resolve the ignore patterns applied during file selection. The first
/// applicable source fully determines the set; there is no merging:
/// 1. a non-empty CLI `-i` list, verbatim;
/// 2. the lines of `.gherkin-lintignore` under `root`, in file order;
/// 3. the built-in dependency-directory default.
pub fn resolve_ignore(cli_patterns: &[String], root: &Path) -> Result<Vec<String>> {
    if !cli_patterns.is_empty() {
        return Ok(cli_patterns.to_vec());
    }

    let ignore_file = root.join(DEFAULT_IGNORE_FILE);
    if ignore_file.exists() {
        let contents = std::fs::read_to_string(&ignore_file)
            .with_context(|| format!("failed to read {}", ignore_file.display()))?;
        return Ok(contents
            .split(['\n', '\r'])
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect());
    }

    Ok(vec![DEFAULT_IGNORE_PATTERN.to_string()])
}

/// Resolve every positional argument to a glob pattern and collect all
/// matching files under `root`, with the ignore set applied. Matches are
/// appended in argument order then match order; an argument that matches
/// nothing contributes nothing, and duplicate matches across arguments are
/// preserved.
pub fn select_files(args: &[String], ignore: &[String], root: &Path) -> Result<Vec<PathBuf>> {
    let ignore_set = build_ignore_set(ignore)?;
    let mut files = Vec::new();
    for arg in args {
        let pattern = pattern::resolve(arg)?;
        files.extend(match_pattern(&pattern, &ignore_set, root)?);
    }
    Ok(files)
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid ignore pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build ignore set")
}

/// The glob-matching primitive: expand `pattern` against the filesystem
/// under `root` and return matching paths relative to `root`, in match
/// order, minus anything the ignore set covers.
fn match_pattern(pattern: &str, ignore: &GlobSet, root: &Path) -> Result<Vec<PathBuf>> {
    let full = root.join(pattern);
    let full = full
        .to_str()
        .with_context(|| format!("non-UTF-8 glob pattern: {}", full.display()))?;

    let mut matches = Vec::new();
    for entry in glob::glob(full).with_context(|| format!("invalid glob pattern: {pattern}"))? {
        let path = entry.context("failed to read glob match")?;
        let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if ignore.is_match(&rel) {
            continue;
        }
        matches.push(rel);
    }
    Ok(matches)
}
