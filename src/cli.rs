//! CLI argument definitions using clap.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::types::{LintConfig, Linter};

/// Run an external JavaScript linter and print its findings as annotations
#[derive(Parser, Debug)]
#[command(name = "lintbridge")]
#[command(about = "Runs jshint, jslint, gjslint, or a combined linter and aggregates the output")]
#[command(version)]
pub struct Cli {
    /// Files to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Which linter to run
    #[arg(short, long, default_value = "jshint")]
    pub linter: Linter,

    /// Extra CLI flag for gjslint (repeatable)
    #[arg(long = "gjslint-option", value_name = "FLAG")]
    pub gjslint_options: Vec<String>,

    /// gjslint error code to suppress (repeatable)
    #[arg(long = "ignore", value_name = "CODE")]
    pub ignore: Vec<u32>,

    /// Kill the linter if it runs longer than this many seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-line annotations
    Text,
    /// The full annotation set as JSON
    Json,
}

impl Cli {
    /// Translate CLI flags into a lint pass configuration.
    pub fn lint_config(&self) -> LintConfig {
        LintConfig {
            linter: self.linter,
            gjslint_options: self.gjslint_options.clone(),
            gjslint_ignore: self.ignore.iter().copied().collect::<HashSet<u32>>(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }
}
