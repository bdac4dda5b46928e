//! lintbridge CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lintbridge::cli::{Cli, OutputFormat};
use lintbridge::{lint_files, AnnotationSet, LintSeverity};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.lint_config();
    let results = lint_files(&cli.files, &config);

    let mut exit = ExitCode::SUCCESS;
    for (path, result) in results {
        match result {
            Ok(annotations) => match cli.format {
                OutputFormat::Text => print_text(&path.display().to_string(), &annotations),
                OutputFormat::Json => match serde_json::to_string_pretty(&annotations) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: failed to serialize annotations: {}", e);
                        exit = ExitCode::from(1);
                    }
                },
            },
            Err(e) => {
                // Failures are buffer-scoped; keep reporting the other files
                eprintln!("Error: {}: {}", path.display(), e);
                exit = e.exit_code();
            }
        }
    }

    exit
}

fn print_text(path: &str, annotations: &AnnotationSet) {
    if annotations.is_empty() {
        println!("{}: no problems found", path);
        return;
    }

    for line in annotations.annotated_lines() {
        for (severity, messages) in [
            (LintSeverity::Error, &annotations.error_messages),
            (LintSeverity::Violation, &annotations.violation_messages),
            (LintSeverity::Warning, &annotations.warning_messages),
        ] {
            if let Some(on_line) = messages.get(&line) {
                for message in on_line {
                    println!("{}:{}: [{}] {}", path, line, severity, message);
                }
            }
        }
    }

    println!(
        "{}: {} errors, {} warnings, {} violations",
        path,
        annotations.error_count(),
        annotations.warning_count(),
        annotations.violation_count()
    );
}
