use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::RuleConfig;
use crate::diagnostic::FileResult;
use crate::rule::registry::RuleRegistry;

/// Lint every file in one synchronous pass and return one result per input
/// file, in input order. Each configured rule runs over the raw file
/// content; per-file problems are sorted by line. Files appearing more than
/// once in the input are linted independently each time.
///
/// The configuration is assumed to be validated already; a config key with
/// no registered rule is skipped here rather than re-reported.
pub fn lint(
    files: &[PathBuf],
    config: &RuleConfig,
    registry: &RuleRegistry,
    root: &Path,
) -> Result<Vec<FileResult>> {
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let file_path = file.display().to_string();
        let content = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("failed to read {file_path}"))?;

        let mut errors = Vec::new();
        for (name, settings) in config {
            if let Some(rule) = registry.get(name) {
                errors.extend(rule.check(&file_path, &content, settings));
            }
        }
        errors.sort_by_key(|d| d.line);

        results.push(FileResult { file_path, errors });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use serde_json::{json, Value};
    use std::fs;

    /// Flags every line containing the configured needle string.
    struct NeedleRule;

    impl Rule for NeedleRule {
        fn name(&self) -> &'static str {
            "no-needle"
        }

        fn check(&self, _path: &str, content: &str, config: &Value) -> Vec<Diagnostic> {
            let needle = config.as_str().unwrap_or("TODO");
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(needle))
                .map(|(idx, _)| Diagnostic {
                    line: idx + 1,
                    rule: self.name().to_string(),
                    message: format!("line contains \"{needle}\""),
                })
                .collect()
        }
    }

    fn setup_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gherlint_test_linter_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn needle_config() -> RuleConfig {
        let mut config = RuleConfig::new();
        config.insert("no-needle".to_string(), json!("WIP"));
        config
    }

    fn needle_registry() -> RuleRegistry {
        let mut reg = RuleRegistry::new();
        reg.register(Box::new(NeedleRule));
        reg
    }

    #[test]
    fn clean_file_yields_empty_errors() {
        let dir = setup_dir("clean");
        fs::write(dir.join("a.feature"), "Feature: a\n  Scenario: ok\n").unwrap();

        let results = lint(
            &[PathBuf::from("a.feature")],
            &needle_config(),
            &needle_registry(),
            &dir,
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file_path, "a.feature");
        assert!(results[0].errors.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn problems_are_reported_in_line_order() {
        let dir = setup_dir("line_order");
        fs::write(
            dir.join("a.feature"),
            "Feature: WIP things\nScenario: fine\nScenario: WIP again\n",
        )
        .unwrap();

        let results = lint(
            &[PathBuf::from("a.feature")],
            &needle_config(),
            &needle_registry(),
            &dir,
        )
        .unwrap();
        let lines: Vec<usize> = results[0].errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3]);
        assert!(results[0].errors.iter().all(|e| e.rule == "no-needle"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_rule_set_produces_zero_errors() {
        let dir = setup_dir("empty_rules");
        fs::write(dir.join("a.feature"), "Feature: WIP\n").unwrap();

        let results = lint(
            &[PathBuf::from("a.feature")],
            &RuleConfig::new(),
            &RuleRegistry::new(),
            &dir,
        )
        .unwrap();
        assert!(results[0].errors.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn duplicate_inputs_are_linted_independently() {
        let dir = setup_dir("dup_inputs");
        fs::write(dir.join("a.feature"), "WIP\n").unwrap();

        let files = vec![PathBuf::from("a.feature"), PathBuf::from("a.feature")];
        let results = lint(&files, &needle_config(), &needle_registry(), &dir).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unreadable_file_is_fatal() {
        let dir = setup_dir("unreadable");
        let result = lint(
            &[PathBuf::from("missing.feature")],
            &RuleConfig::new(),
            &RuleRegistry::new(),
            &dir,
        );
        assert!(result.is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
