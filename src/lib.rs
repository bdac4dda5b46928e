//! lintbridge: runs external JavaScript linters and aggregates their output
//! into editor-style annotations.
//!
//! lintbridge is not a linter. It invokes a configured external tool as a
//! subprocess and reconciles three incompatible output formats into one
//! line-indexed, severity-bucketed annotation model:
//!
//! - **jshint / jslint**: a JSON array of structured error records
//! - **gjslint** (Closure Linter): free text with regex-capturable fields
//! - **composite**: an external orchestrator that runs two linters and
//!   concatenates their text output, parsed token-by-token with both shapes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lintbridge::{lint_file, LintConfig, Linter};
//! use std::path::Path;
//!
//! let config = LintConfig {
//!     linter: Linter::Gjslint,
//!     gjslint_ignore: [110].into_iter().collect(),
//!     ..Default::default()
//! };
//!
//! let annotations = lint_file(Path::new("src/app.js"), &config)?;
//! println!("{} errors", annotations.error_count());
//! ```
//!
//! Each pass is synchronous and self-contained: one subprocess, one fresh
//! `AnnotationSet`, no state shared across passes. Distinct buffers can be
//! linted in parallel with `lint_files`.

// Submodules
pub mod annotations;
pub mod cli;
pub mod detection;
pub mod error;
pub mod invoke;
pub mod jsonc;
pub mod parsers;
pub mod rcfile;
mod runner;
pub mod types;

// Re-export types for public API
pub use annotations::{AnnotationSet, LineMessages, LineUnderlines};
pub use error::{LintBridgeError, Result};
pub use invoke::LinterOutput;
pub use types::{Finding, LintConfig, LintSeverity, Linter};

// Re-export core functions
pub use invoke::run_linter;
pub use parsers::normalize;
pub use runner::{lint_file, lint_files, lint_source};
