//! Boundary input loading.
//!
//! The core operates only on parsed values; reading and parsing the two
//! documents happens here, at the edge of the system.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

/// Errors from reading or parsing an input document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The document is not well-formed JSON.
    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Both sides asked for stdin.
    #[error("only one side can read from stdin")]
    StdinTwice,
}

/// Load and parse both documents.
pub fn load_pair(left: &Path, right: &Path) -> Result<(Value, Value), InputError> {
    if is_stdin(left) && is_stdin(right) {
        return Err(InputError::StdinTwice);
    }
    Ok((load(left)?, load(right)?))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn load(path: &Path) -> Result<Value, InputError> {
    let name = if is_stdin(path) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    };

    let text = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Read {
                path: name.clone(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::Read {
            path: name.clone(),
            source,
        })?
    };

    serde_json::from_str(&text).map_err(|source| InputError::Parse { path: name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(stem: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("difflens-{}-{stem}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_pair() {
        let left = scratch_file("pair-left", r#"{"a": 1}"#);
        let right = scratch_file("pair-right", "[1, 2]");

        let (l, r) = load_pair(&left, &right).unwrap();
        assert_eq!(l, serde_json::json!({ "a": 1 }));
        assert_eq!(r, serde_json::json!([1, 2]));

        fs::remove_file(left).unwrap();
        fs::remove_file(right).unwrap();
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let missing = Path::new("/nonexistent/difflens-missing.json");
        let ok = scratch_file("read-ok", "null");
        let err = load_pair(missing, &ok).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }), "got: {err}");
        fs::remove_file(ok).unwrap();
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let bad = scratch_file("parse-bad", "{ not json");
        let ok = scratch_file("parse-ok", "true");
        let err = load_pair(&bad, &ok).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }), "got: {err}");
        fs::remove_file(bad).unwrap();
        fs::remove_file(ok).unwrap();
    }

    #[test]
    fn stdin_on_both_sides_is_rejected() {
        let err = load_pair(Path::new("-"), Path::new("-")).unwrap_err();
        assert!(matches!(err, InputError::StdinTwice));
    }
}
