use std::io::Write;

use serde::Serialize;

use crate::diagnostic::FileResult;
use crate::formatter::Formatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonResult<'a> {
    #[serde(rename = "filePath")]
    file_path: &'a str,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    line: usize,
    rule: &'a str,
    message: &'a str,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, results: &[FileResult], out: &mut dyn Write) {
        let output: Vec<JsonResult> = results
            .iter()
            .map(|r| JsonResult {
                file_path: &r.file_path,
                errors: r
                    .errors
                    .iter()
                    .map(|e| JsonError {
                        line: e.line,
                        rule: &e.rule,
                        message: &e.message,
                    })
                    .collect(),
            })
            .collect();
        // Safe to unwrap: our types always serialize successfully
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(&output).unwrap());
    }
}
