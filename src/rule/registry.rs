use std::collections::HashMap;

use super::Rule;

/// The catalog of known rules, indexed by name.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    index: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    /// An empty registry. The core ships no built-in rules; the embedding
    /// application registers its own.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        let name = rule.name();
        let idx = self.rules.len();
        self.rules.push(rule);
        self.index.insert(name, idx);
    }

    pub fn rule_exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.index.get(name).map(|&idx| &*self.rules[idx])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
