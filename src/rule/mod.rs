pub mod registry;

use serde_json::Value;

use crate::diagnostic::Diagnostic;

/// A named check applied to feature file content.
///
/// The core defines the seam only; concrete rules are registered by the
/// embedding application. A rule receives the raw file content and its own
/// configured settings value, and decides for itself what that value means.
pub trait Rule: Send + Sync {
    /// Unique rule name as it appears in the configuration document.
    fn name(&self) -> &'static str;

    /// Validate this rule's configured settings value. Called once, before
    /// any file is linted; an `Err` aborts the whole run. The default
    /// accepts any value.
    fn validate_config(&self, value: &Value) -> Result<(), String> {
        let _ = value;
        Ok(())
    }

    /// Check one file, returning any problems found.
    fn check(&self, path: &str, content: &str, config: &Value) -> Vec<Diagnostic>;
}
