use std::io::Write;

use crate::diagnostic::FileResult;
use crate::formatter::Formatter;

/// Human-readable renderer: for each file with problems, the file path
/// followed by aligned `line  message  rule` rows.
pub struct StylishFormatter;

impl Formatter for StylishFormatter {
    fn format_to(&self, results: &[FileResult], out: &mut dyn Write) {
        for result in results {
            if result.errors.is_empty() {
                continue;
            }

            let line_width = result
                .errors
                .iter()
                .map(|e| e.line.to_string().len())
                .max()
                .unwrap_or(0);
            let message_width = result
                .errors
                .iter()
                .map(|e| e.message.len())
                .max()
                .unwrap_or(0);

            let _ = writeln!(out, "{}", result.file_path);
            for error in &result.errors {
                let _ = writeln!(
                    out,
                    "  {:>line_width$}  {:<message_width$}  {}",
                    error.line, error.message, error.rule,
                );
            }
            let _ = writeln!(out);
        }
    }
}
