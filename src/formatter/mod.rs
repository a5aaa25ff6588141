pub mod json;
pub mod stylish;

use std::io::Write;

use crate::diagnostic::FileResult;
use crate::error::Error;

/// Output formats understood by `-f/--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Stylish,
    Json,
}

impl OutputFormat {
    /// Resolve the CLI format name. An absent name means stylish; anything
    /// other than the two known names is rejected before any rendering.
    pub fn resolve(name: Option<&str>) -> Result<OutputFormat, Error> {
        match name {
            None | Some("stylish") => Ok(OutputFormat::Stylish),
            Some("json") => Ok(OutputFormat::Json),
            Some(other) => Err(Error::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

pub trait Formatter {
    fn format_to(&self, results: &[FileResult], out: &mut dyn Write);

    fn print(&self, results: &[FileResult]) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(results, &mut lock);
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Stylish => Box::new(stylish::StylishFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}

/// 0 when every file is clean, 1 when any file has at least one error.
pub fn exit_code(results: &[FileResult]) -> i32 {
    if results.iter().all(FileResult::is_clean) {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;

    fn result_with_errors(path: &str, count: usize) -> FileResult {
        FileResult {
            file_path: path.to_string(),
            errors: (0..count)
                .map(|i| Diagnostic {
                    line: i + 1,
                    rule: "some-rule".to_string(),
                    message: "some problem".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn absent_format_means_stylish() {
        assert_eq!(OutputFormat::resolve(None).unwrap(), OutputFormat::Stylish);
    }

    #[test]
    fn known_formats_resolve() {
        assert_eq!(
            OutputFormat::resolve(Some("stylish")).unwrap(),
            OutputFormat::Stylish
        );
        assert_eq!(
            OutputFormat::resolve(Some("json")).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = OutputFormat::resolve(Some("xml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { format } if format == "xml"));
    }

    #[test]
    fn create_both_formatters() {
        let _f = create_formatter(OutputFormat::Stylish);
        let _f = create_formatter(OutputFormat::Json);
    }

    #[test]
    fn exit_code_zero_when_all_clean() {
        let results = vec![result_with_errors("a.feature", 0), result_with_errors("b.feature", 0)];
        assert_eq!(exit_code(&results), 0);
        assert_eq!(exit_code(&[]), 0);
    }

    #[test]
    fn exit_code_one_when_any_file_fails() {
        let results = vec![result_with_errors("a.feature", 0), result_with_errors("b.feature", 2)];
        assert_eq!(exit_code(&results), 1);
    }

    #[test]
    fn formatters_run_without_panic() {
        let results = vec![result_with_errors("a.feature", 2), result_with_errors("b.feature", 0)];
        for format in [OutputFormat::Stylish, OutputFormat::Json] {
            let f = create_formatter(format);
            let mut buf = Vec::new();
            f.format_to(&[], &mut buf);
            f.format_to(&results, &mut buf);
        }
    }
}
