//! Linter subprocess invocation.
//!
//! Builds the argument vector for the selected identity, launches the
//! executable, and captures its output. Execution is bounded two ways: a
//! wall-clock timeout and a per-stream output ceiling, both of which kill
//! the child rather than let a misbehaving linter hang the pass or balloon
//! memory.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::detection;
use crate::error::{LintBridgeError, Result};
use crate::rcfile;
use crate::types::{LintConfig, Linter};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured output of one linter run
#[derive(Debug, Clone)]
pub struct LinterOutput {
    pub stdout: String,
    pub stderr: String,

    /// Consulted only to detect invocation problems, never to gate parsing
    pub exit_code: Option<i32>,
}

/// Build the argument vector for `linter`.
///
/// - gjslint: user-supplied extra options, then `--nobeep`, then the input.
/// - jshint/jslint: the input, plus discovered rc options inline.
/// - composite: the input only; the orchestrator does the rest.
pub fn build_args(
    linter: Linter,
    input_path: &Path,
    rc_options: Option<&str>,
    config: &LintConfig,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    match linter {
        Linter::Gjslint => {
            args.extend(config.gjslint_options.iter().map(OsString::from));
            args.push("--nobeep".into());
            args.push(input_path.into());
        }
        Linter::Jshint | Linter::Jslint => {
            args.push(input_path.into());
            if let Some(options) = rc_options {
                args.push("--config-json".into());
                args.push(options.into());
            }
        }
        Linter::Composite => {
            args.push(input_path.into());
        }
    }

    args
}

/// Run the configured linter over `source_text` and capture its output.
///
/// `source_path` is the buffer's real location; identities that read a
/// temporary file get one holding `source_text` instead, so unsaved buffer
/// contents are linted rather than the on-disk version.
pub fn run_linter(
    source_text: &str,
    source_path: &Path,
    config: &LintConfig,
) -> Result<LinterOutput> {
    let linter = config.linter;
    let program = detection::resolve_executable(linter, config)?;

    // The temp file must outlive the subprocess
    let mut temp_input = None;
    let input_path: PathBuf = if linter.uses_temp_file() {
        let mut file = tempfile::Builder::new()
            .prefix("lintbridge-")
            .suffix(".js")
            .tempfile()?;
        file.write_all(source_text.as_bytes())?;
        file.flush()?;
        let path = file.path().to_path_buf();
        temp_input = Some(file);
        path
    } else {
        source_path.to_path_buf()
    };

    let rc_options = match linter {
        Linter::Jshint | Linter::Jslint => {
            let source_dir = source_path.parent().unwrap_or_else(|| Path::new("."));
            rcfile::rc_options_for(source_dir, linter)?
        }
        _ => None,
    };

    let args = build_args(linter, &input_path, rc_options.as_deref(), config);
    let output = execute(linter, &program, &args, config);

    drop(temp_input);
    output
}

fn execute(
    linter: Linter,
    program: &Path,
    args: &[OsString],
    config: &LintConfig,
) -> Result<LinterOutput> {
    tracing::debug!(%linter, program = %program.display(), ?args, "running linter");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LintBridgeError::ExecutableNotFound { linter }
            } else {
                LintBridgeError::Io(e)
            }
        })?;

    let overflowed = Arc::new(AtomicBool::new(false));
    let stdout_reader = spawn_reader(
        child.stdout.take(),
        config.max_output_bytes,
        Arc::clone(&overflowed),
    );
    let stderr_reader = spawn_reader(
        child.stderr.take(),
        config.max_output_bytes,
        Arc::clone(&overflowed),
    );

    let deadline = Instant::now() + config.timeout;
    let mut status = None;
    let mut timed_out = false;

    loop {
        if let Some(exit_status) = child.try_wait()? {
            status = Some(exit_status);
            break;
        }
        if overflowed.load(Ordering::Relaxed) {
            kill_child(&mut child, linter, "output ceiling exceeded");
            break;
        }
        if Instant::now() >= deadline {
            timed_out = true;
            kill_child(&mut child, linter, "timeout expired");
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }

    let stdout_bytes = stdout_reader.join().unwrap_or_default();
    let stderr_bytes = stderr_reader.join().unwrap_or_default();

    if overflowed.load(Ordering::Relaxed) {
        return Err(LintBridgeError::OutputTooLarge {
            linter,
            limit: config.max_output_bytes,
        });
    }
    if timed_out {
        return Err(LintBridgeError::Timeout {
            linter,
            timeout: config.timeout,
        });
    }

    Ok(LinterOutput {
        stdout: String::from_utf8_lossy(&stdout_bytes).to_string(),
        stderr: String::from_utf8_lossy(&stderr_bytes).to_string(),
        exit_code: status.and_then(|s| s.code()),
    })
}

fn kill_child(child: &mut Child, linter: Linter, reason: &str) {
    tracing::warn!(%linter, reason, "killing linter subprocess");
    let _ = child.kill();
    let _ = child.wait();
}

/// Drain one output pipe on its own thread, keeping at most `limit` bytes.
///
/// Past the limit the thread flags the overflow and keeps reading so the
/// child never blocks on a full pipe before it can be killed.
fn spawn_reader<R: Read + Send + 'static>(
    stream: Option<R>,
    limit: usize,
    overflowed: Arc<AtomicBool>,
) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut collected = Vec::new();
        let Some(mut stream) = stream else {
            return collected;
        };

        let mut chunk = [0u8; 8192];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    if collected.len() + n > limit {
                        overflowed.store(true, Ordering::Relaxed);
                    } else {
                        collected.extend_from_slice(&chunk[..n]);
                    }
                }
                Err(_) => break,
            }
        }
        collected
    })
}
