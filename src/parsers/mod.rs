//! Output grammars for the supported linters.
//!
//! One grammar ships per linter identity: a line-oriented regex grammar for
//! gjslint, a JSON-array grammar for the jshint/jslint JSON reporters, and a
//! merged-stream grammar for composite mode. `normalize` is the single entry
//! point: it dispatches to the right grammar and applies code suppression.

pub mod composite;
pub mod gjslint;
pub mod jshint_json;

use std::collections::HashSet;

use crate::error::Result;
use crate::types::{Finding, Linter};

/// Parse raw linter output with the grammar for `linter`.
pub fn parse_output(linter: Linter, raw: &str) -> Result<Vec<Finding>> {
    match linter {
        Linter::Gjslint => Ok(gjslint::parse_gjslint_output(raw)),
        Linter::Jshint | Linter::Jslint => jshint_json::parse_json_output(linter, raw),
        Linter::Composite => Ok(composite::parse_composite_output(raw)),
    }
}

/// Parse raw output and drop findings whose code is suppressed.
///
/// The ignore set only ever applies to grammars that produce a code;
/// findings without one always pass.
pub fn normalize(linter: Linter, raw: &str, ignore: &HashSet<u32>) -> Result<Vec<Finding>> {
    let mut findings = parse_output(linter, raw)?;
    findings.retain(|finding| match finding.code {
        Some(code) => !ignore.contains(&code),
        None => true,
    });

    tracing::debug!(%linter, count = findings.len(), "normalized linter output");
    Ok(findings)
}
