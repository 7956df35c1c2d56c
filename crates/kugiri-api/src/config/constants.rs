//! Constant defaults for the service configuration

/// Maximum accepted request body length in bytes.
///
/// Allows text up to 10MB. A limit preventing resource exhaustion from
/// oversized submissions.
pub const MAX_TEXT_LENGTH: usize = 10_000_000;

/// Default host to bind.
///
/// Empty means every interface (`0.0.0.0`).
pub const DEFAULT_HOST: &str = "";

/// Default port to listen on.
pub const DEFAULT_PORT: u16 = 5678;

/// Default directory served for paths outside the API.
pub const DEFAULT_STATIC_FOLDER: &str = "static";
