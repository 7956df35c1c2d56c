//! dictionary module
pub mod dictionary_locator;

/// Re-export
pub use dictionary_locator::{DICT_ENV, FALLBACK_CANDIDATES, locate_dictionary, probe, resolve};
