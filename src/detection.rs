//! Executable resolution for the supported linters.

use std::path::PathBuf;

use crate::error::{LintBridgeError, Result};
use crate::types::{LintConfig, Linter};

/// Default program name for each linter identity.
///
/// The composite identity delegates to an external orchestrator that runs
/// several linters and concatenates their output.
pub fn program_name(linter: Linter) -> &'static str {
    match linter {
        Linter::Jshint => "jshint",
        Linter::Jslint => "jslint",
        Linter::Gjslint => "gjslint",
        Linter::Composite => "lintall",
    }
}

/// Resolve the executable for `linter`, honoring any configured override.
///
/// A missing binary fails with `ExecutableNotFound` naming the identity so
/// the caller can skip the pass gracefully instead of crashing.
pub fn resolve_executable(linter: Linter, config: &LintConfig) -> Result<PathBuf> {
    let candidate = match config.executable_overrides.get(&linter) {
        Some(path) => path.as_os_str().to_owned(),
        None => program_name(linter).into(),
    };

    which::which(&candidate).map_err(|_| {
        tracing::warn!(%linter, ?candidate, "linter executable not found");
        LintBridgeError::ExecutableNotFound { linter }
    })
}

/// Whether the executable for `linter` can currently be resolved.
pub fn is_available(linter: Linter, config: &LintConfig) -> bool {
    resolve_executable(linter, config).is_ok()
}
