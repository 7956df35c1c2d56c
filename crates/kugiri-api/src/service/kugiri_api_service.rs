//! Segmentation service

use std::path::Path;
use std::time::Instant;

use kugiri::segmenter::Segmenter;
use tracing::debug;

use crate::errors::{ApiError, Result};
use crate::models::SegmentResponse;

/// Common interface for the segmentation service
///
/// This trait allows swapping the production implementation
/// (`KugiriApiServiceFull`) with test stubs/mocks.
pub trait KugiriApiService: Send + Sync {
  /// Segments `text` into part-of-speech tagged tokens.
  ///
  /// Empty input succeeds with an empty segment list.
  ///
  /// # Errors
  /// Only internal failures; segmentation itself cannot fail.
  fn segment(&self, text: &str) -> Result<SegmentResponse>;
}

/// Production segmentation service
///
/// Holds the engine handle loaded at startup; the handle is read-only and shared
/// by every request for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct KugiriApiServiceFull {
  /// Engine handle
  segmenter: Segmenter,
}

impl KugiriApiServiceFull {
  /// Wraps an already initialized engine handle.
  #[must_use]
  pub fn new(segmenter: Segmenter) -> Self {
    Self { segmenter }
  }

  /// Initializes the service from a resolved dictionary path.
  ///
  /// # Errors
  /// Returns a configuration error when the engine rejects the dictionary.
  pub fn from_dictionary_path<P: AsRef<Path>>(path: P) -> Result<Self> {
    let segmenter = Segmenter::from_path(path)
      .map_err(|e| ApiError::config(format!("failed to load dictionary: {e}")))?;

    Ok(Self::new(segmenter))
  }

  /// Segments text with the engine handle.
  pub fn segment(&self, text: &str) -> Result<SegmentResponse> {
    let start = Instant::now();

    let segments = self.segmenter.segment(text);

    debug!(
      text_len = text.len(),
      segment_count = segments.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "segmentation finished"
    );

    Ok(SegmentResponse::from_segments(segments))
  }
}

/// Production implementation of trait `KugiriApiService`
impl KugiriApiService for KugiriApiServiceFull {
  fn segment(&self, text: &str) -> Result<SegmentResponse> {
    // Note: writing `self.segment(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    KugiriApiServiceFull::segment(self, text)
  }
}
