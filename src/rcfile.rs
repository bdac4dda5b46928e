//! Discovery and loading of project-local `.jshintrc` configuration.
//!
//! The rc file is searched upward from the linted file's directory, the way
//! jshint itself resolves it. Its contents are comment-stripped and
//! re-serialized as strict JSON before being handed to the engine.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LintBridgeError, Result};
use crate::jsonc;
use crate::types::Linter;

const RC_FILE_NAME: &str = ".jshintrc";

/// Walk `start_dir` and its ancestors looking for a `.jshintrc` file.
pub fn find_rc_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(RC_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Read an rc file, strip comments, and re-serialize as compact strict JSON.
///
/// Fails when the stripped contents are not valid JSON; the stripped text is
/// attached so the user can see what the engine would have been given.
pub fn load_rc_options(path: &Path, linter: Linter) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    let stripped = jsonc::strip_comments(&raw);

    let value: serde_json::Value =
        serde_json::from_str(&stripped).map_err(|_| LintBridgeError::MalformedOutput {
            linter,
            raw: stripped.clone(),
        })?;

    serde_json::to_string(&value).map_err(|_| LintBridgeError::MalformedOutput {
        linter,
        raw: stripped,
    })
}

/// Locate and load rc options for a buffer, if any rc file exists.
pub fn rc_options_for(source_dir: &Path, linter: Linter) -> Result<Option<String>> {
    match find_rc_file(source_dir) {
        Some(path) => {
            tracing::debug!(rc = %path.display(), "found project rc file");
            load_rc_options(&path, linter).map(Some)
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn finds_rc_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src").join("widgets");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".jshintrc"), "{}").unwrap();

        let found = find_rc_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(".jshintrc"));
    }

    #[test]
    fn returns_none_when_no_rc_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_rc_file(dir.path()).is_none());
    }

    #[test]
    fn load_strips_comments_and_reserializes() {
        let dir = tempfile::tempdir().unwrap();
        let rc = dir.path().join(".jshintrc");
        fs::write(&rc, "{\n  // strictness\n  \"undef\": true\n}").unwrap();

        let options = load_rc_options(&rc, Linter::Jshint).unwrap();
        assert_eq!(options, r#"{"undef":true}"#);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let rc = dir.path().join(".jshintrc");
        fs::write(&rc, "{ not json }").unwrap();

        let err = load_rc_options(&rc, Linter::Jshint).unwrap_err();
        assert!(matches!(err, LintBridgeError::MalformedOutput { .. }));
    }
}
