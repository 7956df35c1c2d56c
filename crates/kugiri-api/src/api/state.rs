//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::KugiriApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service, both fixed at startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Segmentation service
  ///
  /// - Production: `Arc::new(KugiriApiServiceFull::from_dictionary_path(&path)?)`
  /// - Test: `Arc::new(StubKugiriApiService)`
  pub service: Arc<dyn KugiriApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn KugiriApiService>) -> Self {
    Self { config, service }
  }
}
