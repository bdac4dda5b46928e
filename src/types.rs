//! Core types for lintbridge.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Linter` - Enum of supported linter identities
//! - `LintSeverity` - Severity bucket for a finding
//! - `Finding` - A single normalized issue reported by a linter
//! - `LintConfig` - Per-pass configuration handed to the invoker and normalizer

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LintBridgeError;

// ============================================================================
// Core Types
// ============================================================================

/// Supported linter identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    /// jshint via its JSON reporter
    Jshint,
    /// jslint via its JSON reporter
    Jslint,
    /// Closure Linter, plain-text output
    Gjslint,
    /// An external orchestrator that runs several linters and
    /// concatenates their text output
    Composite,
}

impl Linter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Linter::Jshint => "jshint",
            Linter::Jslint => "jslint",
            Linter::Gjslint => "gjslint",
            Linter::Composite => "composite",
        }
    }

    /// Get the human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Linter::Jshint => "JSHint",
            Linter::Jslint => "JSLint",
            Linter::Gjslint => "Closure Linter",
            Linter::Composite => "composite",
        }
    }

    /// Whether this identity wants its input via a temporary file rather
    /// than the buffer's own path.
    pub fn uses_temp_file(&self) -> bool {
        matches!(self, Linter::Gjslint | Linter::Composite)
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Linter {
    type Err = LintBridgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jshint" => Ok(Linter::Jshint),
            "jslint" => Ok(Linter::Jslint),
            "gjslint" => Ok(Linter::Gjslint),
            // "all" is the legacy spelling for the combined mode
            "composite" | "all" => Ok(Linter::Composite),
            other => Err(LintBridgeError::UnsupportedLinter {
                name: other.to_string(),
            }),
        }
    }
}

/// Severity bucket for a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Style suggestion
    Warning,
    /// Convention violation
    Violation,
    /// Error (must fix)
    Error,
}

impl LintSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LintSeverity::Warning => "warning",
            LintSeverity::Violation => "violation",
            LintSeverity::Error => "error",
        }
    }
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Finding
// ============================================================================

/// A single normalized issue reported by a linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-based)
    pub line: usize,

    /// Column (0-based), present only when the source format supplies
    /// a precise offset
    pub column: Option<usize>,

    /// Human-readable message
    pub message: String,

    /// Severity bucket
    pub severity: LintSeverity,

    /// Numeric classification, used by the gjslint grammar for
    /// suppression filtering
    pub code: Option<u32>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Per-pass configuration for the invoker and normalizer.
///
/// This replaces ambient per-editor settings lookup: the host resolves its
/// settings once and hands them over explicitly.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Which linter to run
    pub linter: Linter,

    /// Extra CLI flags for gjslint
    pub gjslint_options: Vec<String>,

    /// gjslint error codes to suppress
    pub gjslint_ignore: HashSet<u32>,

    /// Kill the subprocess if it runs longer than this
    pub timeout: Duration,

    /// Kill the subprocess if either output stream exceeds this many bytes
    pub max_output_bytes: usize,

    /// Per-identity executable path overrides; identities not present here
    /// are resolved from PATH
    pub executable_overrides: HashMap<Linter, PathBuf>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            linter: Linter::Jshint,
            gjslint_options: Vec::new(),
            gjslint_ignore: HashSet::new(),
            timeout: Duration::from_secs(30),
            max_output_bytes: 8 * 1024 * 1024,
            executable_overrides: HashMap::new(),
        }
    }
}
