//! Response model definitions

use kugiri::segmenter::Segment;
use serde::Serialize;

/// Segmentation response
///
/// The body is always `{"segments": [...]}`; an input with nothing to segment
/// serializes as `{"segments":[]}`.
#[derive(Debug, Serialize)]
pub struct SegmentResponse {
  /// Segments in input order
  pub segments: Vec<SegmentDto>,
}

impl SegmentResponse {
  /// Wraps engine output in the response shape.
  #[must_use]
  pub fn from_segments(segments: Vec<Segment>) -> Self {
    Self {
      segments: segments.into_iter().map(SegmentDto::from).collect(),
    }
  }
}

/// One segment of the response (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDto {
  /// Token text
  pub text: String,
  /// Part-of-speech tag, passed through uninterpreted
  pub pos: String,
}

impl From<Segment> for SegmentDto {
  fn from(segment: Segment) -> Self {
    Self {
      text: segment.text,
      pos: segment.pos,
    }
  }
}
