//! Request model definitions

use serde::Deserialize;

/// Parameters accepted by the segmentation endpoint.
///
/// The same shape deserializes from the URL query string and from a form-encoded
/// body; the query value wins when both carry text.
#[derive(Debug, Default, Deserialize)]
pub struct SegmentParams {
  /// Text to segment
  pub text: Option<String>,
}
