//! One lint pass: invoke, normalize, aggregate.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::annotations::AnnotationSet;
use crate::error::Result;
use crate::invoke;
use crate::parsers;
use crate::types::LintConfig;

/// Lint one buffer and aggregate its findings.
///
/// The annotation set is only built after normalization succeeds, so a
/// timeout or parse failure leaves no partial annotations behind.
pub fn lint_source(
    source_text: &str,
    source_path: &Path,
    config: &LintConfig,
) -> Result<AnnotationSet> {
    let output = invoke::run_linter(source_text, source_path, config)?;

    if let Some(code) = output.exit_code {
        tracing::debug!(linter = %config.linter, exit_code = code, "linter finished");
    }

    // Exit status never gates parsing; the grammar sees whatever the
    // linter printed.
    let findings = parsers::normalize(config.linter, &output.stdout, &config.gjslint_ignore)?;

    let mut annotations = AnnotationSet::new();
    for finding in &findings {
        annotations.record(finding);
    }
    Ok(annotations)
}

/// Read a file from disk and lint it.
pub fn lint_file(path: &Path, config: &LintConfig) -> Result<AnnotationSet> {
    let source = fs::read_to_string(path)?;
    lint_source(&source, path, config)
}

/// Lint several independent buffers in parallel.
///
/// Failures are buffer-scoped: one bad pass never affects the others, so
/// each path gets its own result.
pub fn lint_files(paths: &[PathBuf], config: &LintConfig) -> Vec<(PathBuf, Result<AnnotationSet>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), lint_file(path, config)))
        .collect()
}
