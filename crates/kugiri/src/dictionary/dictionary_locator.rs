//! Dictionary Location Module
//!
//! Resolves the path of the dictionary file the segmentation engine loads at startup.
//! Resolution is an ordered fallback chain: explicit configuration, the `DICT`
//! environment variable, then fixed filesystem candidates. The first usable candidate
//! wins and the chain stops.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{DictionaryError, KugiriResult};

/// Environment variable consulted when no explicit path is configured
pub const DICT_ENV: &str = "DICT";

/// Fixed candidate paths probed after the environment variable, in order.
/// Both are relative to the working directory of the process.
pub const FALLBACK_CANDIDATES: [&str; 2] = ["./dict.txt", "../data/dict.txt"];

/// Resolves the dictionary path for engine initialization.
///
/// Resolution order (first match wins):
/// 1. `explicit`, when `Some` and non-empty - taken verbatim without probing;
///    an unusable explicit path is reported by engine initialization instead
/// 2. The `DICT` environment variable, when set to an existing non-directory path
/// 3. `./dict.txt`
/// 4. `../data/dict.txt`
///
/// # Errors
/// Failures arrive as [`KugiriError::Dictionary`](crate::errors::KugiriError):
/// - [`DictionaryError::NotFound`] when every candidate falls through
/// - [`DictionaryError::Probe`] when a status check fails with anything other than
///   a clean "does not exist"; an ambiguous probe stops the search rather than
///   silently skipping a candidate
pub fn locate_dictionary(explicit: Option<&str>) -> KugiriResult<PathBuf> {
  let env_value = std::env::var(DICT_ENV).ok();

  Ok(resolve(explicit, env_value.as_deref(), &FALLBACK_CANDIDATES.map(PathBuf::from))?)
}

/// Resolver chain with every input injected.
///
/// [`locate_dictionary`] wires this to the real environment; tests call it directly
/// with their own environment value and candidate list.
pub fn resolve(
  explicit: Option<&str>,
  env_value: Option<&str>,
  candidates: &[PathBuf],
) -> Result<PathBuf, DictionaryError> {
  // Explicit configuration short-circuits the chain, usable or not.
  if let Some(path) = explicit.filter(|p| !p.is_empty()) {
    debug!(path, "dictionary path taken from explicit configuration");
    return Ok(PathBuf::from(path));
  }

  let mut searched = Vec::new();

  if let Some(value) = env_value.filter(|v| !v.is_empty()) {
    let candidate = Path::new(value);
    if probe(candidate)? {
      debug!(path = value, "dictionary path taken from environment");
      return Ok(candidate.to_path_buf());
    }
    searched.push(format!("${DICT_ENV}={value}"));
  }

  for candidate in candidates {
    if probe(candidate)? {
      debug!(path = %candidate.display(), "dictionary path taken from fallback candidate");
      return Ok(candidate.clone());
    }
    searched.push(candidate.display().to_string());
  }

  Err(DictionaryError::NotFound {
    searched: searched.join(", "),
  })
}

/// Status check for one candidate.
///
/// Returns `Ok(true)` for an existing non-directory path and `Ok(false)` for a
/// confirmed "does not exist" or for a directory. Any other status error becomes
/// [`DictionaryError::Probe`]: permission problems and I/O failures must not be
/// mistaken for a missing file.
pub fn probe(path: &Path) -> Result<bool, DictionaryError> {
  match fs::metadata(path) {
    Ok(metadata) => Ok(!metadata.is_dir()),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(e) => Err(DictionaryError::Probe {
      path: path.to_path_buf(),
      source: Arc::new(e),
    }),
  }
}

#[cfg(test)]
mod tests {
  use std::fs::File;

  use tempfile::TempDir;

  use super::*;

  /// Verify that an existing regular file probes as usable
  #[test]
  fn probe_accepts_regular_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.txt");
    File::create(&path).unwrap();

    assert!(probe(&path).unwrap());
  }

  /// Verify that a directory probes as unusable without an error
  #[test]
  fn probe_rejects_directory() {
    let dir = TempDir::new().unwrap();

    assert!(!probe(dir.path()).unwrap());
  }

  /// Verify that a missing path probes as unusable without an error
  #[test]
  fn probe_rejects_missing_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    assert!(!probe(&path).unwrap());
  }

  /// Verify that a path routed through a regular file is an ambiguous probe,
  /// not a missing file (ENOTDIR instead of ENOENT)
  #[test]
  #[cfg(unix)]
  fn probe_reports_ambiguous_status_as_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain");
    File::create(&file).unwrap();

    let err = probe(&file.join("dict.txt")).unwrap_err();
    assert!(matches!(err, DictionaryError::Probe { .. }));
  }
}
