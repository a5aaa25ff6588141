use std::fmt;

/// One lint problem reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-indexed line number the problem was found on.
    pub line: usize,
    /// Name of the rule that produced the problem.
    pub rule: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.line, self.message, self.rule)
    }
}

/// The lint outcome for a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file_path: String,
    /// Problems in line order; empty when the file is clean.
    pub errors: Vec<Diagnostic>,
}

impl FileResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
