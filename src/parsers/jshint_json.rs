//! JSON-array grammar for the jshint/jslint JSON reporters.
//!
//! The whole payload is one JSON array of records shaped like
//! `{"line": 5, "character": 10, "reason": "Missing semicolon."}`.
//! `character` is 1-based and converted to a 0-based column.

use crate::error::{LintBridgeError, Result};
use crate::types::{Finding, LintSeverity, Linter};

/// Parse a complete jshint/jslint JSON payload.
///
/// An empty or all-whitespace payload is an empty report, not an error.
/// Malformed JSON fails the whole parse with the original payload attached;
/// a record missing a required field fails naming that record.
pub fn parse_json_output(linter: Linter, raw: &str) -> Result<Vec<Finding>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<serde_json::Value> =
        serde_json::from_str(trimmed).map_err(|_| LintBridgeError::MalformedOutput {
            linter,
            raw: raw.to_string(),
        })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let line = require_u64(record, "line", linter, index)? as usize;
            let character = require_u64(record, "character", linter, index)? as usize;
            let reason = record
                .get("reason")
                .and_then(serde_json::Value::as_str)
                .ok_or(LintBridgeError::MissingField {
                    linter,
                    index,
                    field: "reason",
                })?;

            Ok(Finding {
                line,
                // character is 1-based, columns are 0-based
                column: Some(character.saturating_sub(1)),
                message: reason.to_string(),
                severity: LintSeverity::Error,
                code: None,
            })
        })
        .collect()
}

fn require_u64(
    record: &serde_json::Value,
    field: &'static str,
    linter: Linter,
    index: usize,
) -> Result<u64> {
    record
        .get(field)
        .and_then(serde_json::Value::as_u64)
        .ok_or(LintBridgeError::MissingField {
            linter,
            index,
            field,
        })
}
