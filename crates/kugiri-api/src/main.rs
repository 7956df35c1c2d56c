//! kugiri-api server entry point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kugiri::dictionary::locate_dictionary;
use kugiri_api::ApiError;
use kugiri_api::api::AppState;
use kugiri_api::api::run_server;
use kugiri_api::config::Config;
use kugiri_api::service::KugiriApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::parse();
  tracing::info!(
    port = config.port,
    static_folder = %config.static_folder,
    "configuration loaded"
  );

  // Resolve the dictionary before anything listens
  let dict_path = locate_dictionary(config.dict.as_deref())
    .map_err(|e| ApiError::config(format!("failed to resolve dictionary: {e}")))?;
  tracing::info!(path = %dict_path.display(), "dictionary resolved");

  // Initialize the segmentation service
  let service = Arc::new(KugiriApiServiceFull::from_dictionary_path(&dict_path)?);
  tracing::info!("segmentation engine initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
