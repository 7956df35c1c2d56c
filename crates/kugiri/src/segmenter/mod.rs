//! segmenter module
pub mod vibrato_segmenter;

/// Re-export
pub use vibrato_segmenter::{Segment, Segmenter, leading_pos};
