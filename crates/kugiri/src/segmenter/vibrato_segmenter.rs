//! Segmentation engine handle built on vibrato-rkyv

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;
use vibrato_rkyv::dictionary::LoadMode;

use crate::errors::{KugiriResult, SegmenterError};

/// One unit of engine output: the token text and its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
  /// Token text exactly as it appears in the input
  pub text: String,

  /// Part-of-speech tag assigned by the dictionary, passed through uninterpreted
  pub pos: String,
}

/// Process-wide handle to the segmentation engine.
///
/// - Loaded once at startup, shared read-only for the lifetime of the process
/// - `Clone + Send + Sync`
/// - Per-call analysis state lives in a worker created inside [`segment`](Self::segment),
///   so concurrent callers never contend
#[derive(Clone)]
pub struct Segmenter {
  inner: VibratoImpl,
}

impl Segmenter {
  /// Initializes the engine from a dictionary file on disk.
  ///
  /// # Errors
  /// Failures arrive as [`KugiriError::Segmenter`](crate::errors::KugiriError):
  /// - [`SegmenterError::NotAFile`] when `path` is not an existing regular file
  /// - [`SegmenterError::Load`] when vibrato-rkyv rejects the dictionary
  pub fn from_path<P: AsRef<Path>>(path: P) -> KugiriResult<Self> {
    let path = path.as_ref();

    if !path.is_file() {
      return Err(SegmenterError::NotAFile(path.to_path_buf()).into());
    }

    let dict = Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| SegmenterError::Load(Arc::new(e)))?;

    Ok(Self::from_dictionary(dict))
  }

  /// Constructs the handle from an already loaded Dictionary.
  ///
  /// Constructor corresponding to `vibrato_rkyv::Tokenizer::new(dict)`.
  #[must_use]
  pub fn from_dictionary(dict: Dictionary) -> Self {
    Self {
      inner: VibratoImpl::new(dict),
    }
  }

  /// Wraps an already constructed vibrato tokenizer.
  ///
  /// Pairs with `vibrato_rkyv::Tokenizer::from_inner` when the dictionary was
  /// assembled in memory with `vibrato_rkyv::SystemDictionaryBuilder` instead of
  /// loaded from a compiled file.
  #[must_use]
  pub fn from_tokenizer(tokenizer: VibratoImpl) -> Self {
    Self { inner: tokenizer }
  }

  /// Segments `text` into tokens, left to right.
  ///
  /// Empty input yields an empty vector. The part-of-speech tag of every token is
  /// the leading field of the dictionary's comma-separated feature string.
  #[must_use]
  pub fn segment(&self, text: &str) -> Vec<Segment> {
    if text.is_empty() {
      return Vec::new();
    }

    // worker holds the lattice for analysis and the calculation area.
    // Created per call
    let mut worker = self.inner.new_worker();

    worker.reset_sentence(text);
    worker.tokenize();

    debug!(
      text_len = text.len(),
      num_tokens = worker.num_tokens(),
      "segmentation completed"
    );

    let mut segments = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      segments.push(Segment {
        text: token.surface().to_string(),
        pos: leading_pos(token.feature()),
      });
    }

    segments
  }
}

/// Extracts the part-of-speech tag from a feature string.
///
/// Features are comma separated; the leading field is the coarse part of speech in
/// MeCab-style dictionaries (IPADIC, UniDic, etc.). The value is passed through
/// without interpretation, so any dictionary's tag set works.
pub fn leading_pos(feature: &str) -> String {
  feature.split(',').next().unwrap_or_default().to_string()
}

/// Manual `Debug` implementation for `Segmenter`
///
/// Since `vibrato_rkyv::Tokenizer` does not implement the `Debug` trait,
/// `#[derive(Debug)]` cannot be used.
impl fmt::Debug for Segmenter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Segmenter").finish_non_exhaustive()
  }
}
