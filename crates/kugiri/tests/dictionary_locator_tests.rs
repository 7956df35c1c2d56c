//! crates/kugiri/tests/dictionary_locator_tests.rs
//!
//! Resolver chain tests for dictionary location.
//! The chain is exercised through `resolve`, which takes the environment value and
//! the candidate list as plain parameters, so no test mutates the process
//! environment.

use std::fs::File;
use std::path::PathBuf;

use tempfile::TempDir;

use kugiri::dictionary::{locate_dictionary, resolve};
use kugiri::errors::{DictionaryError, KugiriError};

/// Creates an empty file under `dir` and returns its path.
fn touch(dir: &TempDir, name: &str) -> PathBuf {
  let path = dir.path().join(name);
  File::create(&path).expect("Failed to create file");
  path
}

/// An explicit path is taken verbatim, even when it does not exist and even when
/// the environment and candidates point at usable files.
#[test]
fn explicit_path_wins_and_skips_probing() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let existing = touch(&dir, "dict.txt");

  let resolved = resolve(
    Some("/no/such/dict.bin"),
    Some(existing.to_str().unwrap()),
    &[existing.clone()],
  )
  .expect("explicit path must resolve");

  assert_eq!(resolved, PathBuf::from("/no/such/dict.bin"));
}

/// An empty explicit path counts as unset and the chain continues.
#[test]
fn empty_explicit_path_falls_back() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let existing = touch(&dir, "dict.txt");

  let resolved = resolve(Some(""), None, &[existing.clone()]).expect("candidate must resolve");

  assert_eq!(resolved, existing);
}

/// An environment value naming an existing file wins over the fixed candidates.
#[test]
fn env_value_wins_over_candidates() {
  let env_dir = TempDir::new().expect("Failed to create temporary directory");
  let env_dict = touch(&env_dir, "env-dict.txt");
  let fallback_dir = TempDir::new().expect("Failed to create temporary directory");
  let fallback = touch(&fallback_dir, "dict.txt");

  let resolved = resolve(None, Some(env_dict.to_str().unwrap()), &[fallback])
    .expect("environment value must resolve");

  assert_eq!(resolved, env_dict);
}

/// An environment value naming a directory is unusable; the chain continues.
#[test]
fn env_directory_falls_through_to_candidates() {
  let env_dir = TempDir::new().expect("Failed to create temporary directory");
  let fallback_dir = TempDir::new().expect("Failed to create temporary directory");
  let fallback = touch(&fallback_dir, "dict.txt");

  let resolved = resolve(None, Some(env_dir.path().to_str().unwrap()), &[fallback.clone()])
    .expect("fallback candidate must resolve");

  assert_eq!(resolved, fallback);
}

/// An environment value naming a missing path is unusable; the chain continues.
#[test]
fn env_missing_path_falls_through_to_candidates() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let fallback = touch(&dir, "dict.txt");
  let missing = dir.path().join("nowhere.txt");

  let resolved = resolve(None, Some(missing.to_str().unwrap()), &[fallback.clone()])
    .expect("fallback candidate must resolve");

  assert_eq!(resolved, fallback);
}

/// An empty environment value counts as unset.
#[test]
fn empty_env_value_counts_as_unset() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let fallback = touch(&dir, "dict.txt");

  let resolved = resolve(None, Some(""), &[fallback.clone()]).expect("candidate must resolve");

  assert_eq!(resolved, fallback);
}

/// The first usable candidate wins; later candidates are not considered.
#[test]
fn first_usable_candidate_wins() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let first = touch(&dir, "first.txt");
  let second = touch(&dir, "second.txt");

  let resolved = resolve(None, None, &[first.clone(), second]).expect("candidate must resolve");

  assert_eq!(resolved, first);
}

/// A missing first candidate falls through to the second, mirroring the
/// `./dict.txt` -> `../data/dict.txt` production order.
#[test]
fn missing_first_candidate_falls_through() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let missing = dir.path().join("dict.txt");
  let data_dir = dir.path().join("data");
  std::fs::create_dir(&data_dir).expect("Failed to create data directory");
  let present = data_dir.join("dict.txt");
  File::create(&present).expect("Failed to create file");

  let resolved = resolve(None, None, &[missing, present.clone()]).expect("candidate must resolve");

  assert_eq!(resolved, present);
}

/// When everything falls through, the error lists every probed candidate.
#[test]
fn exhausted_chain_reports_searched_paths() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let missing_env = dir.path().join("env.txt");
  let missing_a = dir.path().join("a.txt");
  let missing_b = dir.path().join("b.txt");

  let err = resolve(
    None,
    Some(missing_env.to_str().unwrap()),
    &[missing_a.clone(), missing_b.clone()],
  )
  .expect_err("exhausted chain must fail");

  match err {
    DictionaryError::NotFound { searched } => {
      assert!(searched.contains(missing_env.to_str().unwrap()), "searched: {searched}");
      assert!(searched.contains(missing_a.to_str().unwrap()), "searched: {searched}");
      assert!(searched.contains(missing_b.to_str().unwrap()), "searched: {searched}");
    }
    other => panic!("expected NotFound, got {other:?}"),
  }
}

/// Resolver failures convert into the crate-level union with the message
/// passed through unchanged.
#[test]
fn resolver_errors_wrap_into_crate_union() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let missing = dir.path().join("missing.txt");

  let err = resolve(None, None, &[missing.clone()])
    .map_err(KugiriError::from)
    .expect_err("exhausted chain must fail");

  assert!(matches!(err, KugiriError::Dictionary(DictionaryError::NotFound { .. })), "got {err:?}");
  assert_eq!(
    err.to_string(),
    format!("no dictionary file found; searched: {}", missing.display())
  );
}

/// An ambiguous probe stops the chain even when a later candidate would match;
/// skipping past an I/O failure could silently pick the wrong dictionary.
#[test]
#[cfg(unix)]
fn ambiguous_probe_stops_the_chain() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let plain = touch(&dir, "plain");
  let usable = touch(&dir, "dict.txt");

  // Routing through a regular file yields ENOTDIR, not ENOENT.
  let err = resolve(None, None, &[plain.join("dict.txt"), usable])
    .expect_err("ambiguous probe must fail");

  assert!(matches!(err, DictionaryError::Probe { .. }), "got {err:?}");
}

/// The production entrypoint honors an explicit path without consulting the
/// environment or the working directory.
#[test]
fn locate_dictionary_with_explicit_path() {
  let dir = TempDir::new().expect("Failed to create temporary directory");
  let dict = touch(&dir, "dict.txt");

  let resolved =
    locate_dictionary(Some(dict.to_str().unwrap())).expect("explicit path must resolve");

  assert_eq!(resolved, dict);
}
