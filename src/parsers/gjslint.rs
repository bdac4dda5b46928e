//! Line-oriented grammar for Closure Linter (gjslint) output.
//!
//! gjslint reports one issue per line in the form
//! `Line 12, E:0110: Missing semicolon`. Banners, summary lines, and blank
//! lines do not match and are skipped silently.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Finding, LintSeverity};

static GJSLINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Line (?P<line>\d+),\s*E:(?P<errnum>\d+):\s*(?P<message>.+)").unwrap()
});

/// Try to parse one output line as a gjslint report.
///
/// gjslint supplies no column, so the finding carries none; its numeric
/// error code is kept for suppression filtering.
pub(crate) fn match_line(line: &str) -> Option<Finding> {
    let caps = GJSLINT_RE.captures(line)?;

    let line_number: usize = caps["line"].parse().ok()?;
    let code: u32 = caps["errnum"].parse().ok()?;

    Some(Finding {
        line: line_number,
        column: None,
        message: caps["message"].to_string(),
        severity: LintSeverity::Error,
        code: Some(code),
    })
}

/// Parse a full gjslint output stream.
pub fn parse_gjslint_output(raw: &str) -> Vec<Finding> {
    raw.lines().filter_map(match_line).collect()
}
