//! Grammar for composite mode.
//!
//! Composite mode runs two linters externally and concatenates their text
//! output, so every line of the merged stream is tried against both the
//! gjslint report shape and the jshint-style text shape
//! (`<path>.js: line N, col C, <message>`). The patterns are structurally
//! disjoint, but both matches are recorded independently if both fire.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsers::gjslint;
use crate::types::{Finding, LintSeverity};

static JSHINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+\.js:\sline\s(?P<line>\d+),\scol\s(?P<col>\d+),\s*(?P<message>.+)").unwrap()
});

fn match_jshint_line(line: &str) -> Option<Finding> {
    let caps = JSHINT_RE.captures(line)?;

    let line_number: usize = caps["line"].parse().ok()?;
    // The text reporter's column is recorded as captured; only the JSON
    // grammar converts 1-based characters to 0-based columns.
    let column: usize = caps["col"].parse().ok()?;

    Some(Finding {
        line: line_number,
        column: Some(column),
        message: caps["message"].to_string(),
        severity: LintSeverity::Error,
        code: None,
    })
}

/// Parse the merged output stream of composite mode.
pub fn parse_composite_output(raw: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for line in raw.lines() {
        if let Some(finding) = gjslint::match_line(line) {
            findings.push(finding);
        }
        if let Some(finding) = match_jshint_line(line) {
            findings.push(finding);
        }
    }

    findings
}
