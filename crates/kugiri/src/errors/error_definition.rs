//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors from resolving the dictionary file path
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// Every candidate of the fallback chain fell through
  #[error("no dictionary file found; searched: {searched}")]
  NotFound {
    /// The candidates that were probed, in order, comma separated
    searched: String,
  },

  /// A candidate could not be probed (anything but a clean "does not exist")
  #[error("failed to probe dictionary candidate {path:?}: {source}")]
  Probe {
    /// The candidate whose status check failed
    path: PathBuf,
    /// The underlying I/O error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Errors from initializing the segmentation engine
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SegmenterError {
  /// The dictionary path does not name a regular file
  #[error("dictionary is not a regular file: {0}")]
  NotAFile(PathBuf),

  /// vibrato-rkyv rejected the dictionary file
  #[error("failed to load dictionary: {0}")]
  Load(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// Unified error
/// The crate entrypoints (`locate_dictionary`, `Segmenter::from_path`) return
/// this error, used as `KugiriResult<T>` = `Result<T, KugiriError>`;
/// the resolver and probe helpers underneath return [`DictionaryError`] directly
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KugiriError {
  /// Dictionary resolution error
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Engine initialization error
  #[error(transparent)]
  Segmenter(#[from] SegmenterError),
}

/// Standard Result alias for the kugiri crate
pub type KugiriResult<T> = Result<T, KugiriError>;
