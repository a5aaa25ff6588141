use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::rule::registry::RuleRegistry;

/// Conventional configuration filename in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gherkin-lintrc";

/// The rule configuration document: a flat mapping from rule name to that
/// rule's settings value. Value shapes are rule-specific and opaque here.
pub type RuleConfig = Map<String, Value>;

/// Load the configuration document from the explicit path, or from the
/// default filename under `root`. Fails fast when the file is absent or
/// not a well-formed JSON object.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<RuleConfig> {
    let path = match explicit {
        Some(given) => {
            let resolved = root.join(given);
            if !resolved.exists() {
                return Err(Error::ConfigNotFound {
                    path: given.to_path_buf(),
                    is_default: false,
                }
                .into());
            }
            resolved
        }
        None => {
            let resolved = root.join(DEFAULT_CONFIG_FILE);
            if !resolved.exists() {
                return Err(Error::ConfigNotFound {
                    path: Path::new(DEFAULT_CONFIG_FILE).to_path_buf(),
                    is_default: true,
                }
                .into());
            }
            resolved
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
        path: path.clone(),
        source,
    })?;
    Ok(config)
}

/// Verify the whole document against the registry before any file is
/// linted: every key must name a registered rule, and every value must
/// satisfy that rule's own validator. The first failure aborts the run.
pub fn validate_config(config: &RuleConfig, registry: &RuleRegistry) -> Result<()> {
    for (name, value) in config {
        let Some(rule) = registry.get(name) else {
            return Err(Error::UnknownRule { rule: name.clone() }.into());
        };
        rule.validate_config(value).map_err(|reason| Error::InvalidRuleConfig {
            rule: name.clone(),
            reason,
        })?;
    }
    Ok(())
}
