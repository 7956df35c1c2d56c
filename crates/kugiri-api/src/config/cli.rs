//! Config loading from command-line flags

use clap::Parser;

use super::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_FOLDER};

/// API Server Configuration
///
/// Every flag is optional. When `--dict` is omitted the dictionary is resolved
/// through the ordered fallback search in [`kugiri::dictionary::locate_dictionary`]
/// (the `DICT` environment variable, then the working-directory candidates).
#[derive(Parser, Debug, Clone)]
#[command(name = "kugiri-api", about = "Text segmentation JSON service")]
pub struct Config {
  /// Host to bind; empty binds every interface
  #[arg(long, default_value = DEFAULT_HOST)]
  pub host: String,

  /// Port to listen on
  #[arg(long, default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Dictionary file; when omitted the fallback search applies
  #[arg(long)]
  pub dict: Option<String>,

  /// Directory of static files served for non-API paths
  #[arg(long, default_value = DEFAULT_STATIC_FOLDER)]
  pub static_folder: String,
}

impl Config {
  /// Address for the TCP listener.
  ///
  /// The empty default host becomes `0.0.0.0` so the listener accepts
  /// connections on every interface, like classic "`:port`" bind strings.
  #[must_use]
  pub fn bind_addr(&self) -> String {
    if self.host.is_empty() {
      format!("0.0.0.0:{}", self.port)
    } else {
      format!("{}:{}", self.host, self.port)
    }
  }
}
