//! kugiri (区切り) text segmentation core
//!
//! Resolves the dictionary file for the segmentation engine and exposes a shared,
//! read-only engine handle built on vibrato-rkyv.

/// Dictionary module - ordered fallback resolution of the dictionary file path
pub mod dictionary;

/// Error module - DictionaryError, SegmenterError, KugiriError
pub mod errors;

/// Segmenter module - the process-wide engine handle and its output type
pub mod segmenter;

/// Re-exports
pub use dictionary::locate_dictionary;
pub use errors::{KugiriError, KugiriResult};
pub use segmenter::{Segment, Segmenter};
