//! Config module

mod cli;
mod constants;

pub use cli::Config;
pub use constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_FOLDER, MAX_TEXT_LENGTH};
