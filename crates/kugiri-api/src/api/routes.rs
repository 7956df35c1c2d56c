//! Router definitions

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::segment_json;
use super::state::AppState;
use crate::config::MAX_TEXT_LENGTH;
use crate::errors::ApiError;

/// Creates the service router
///
/// `/json` answers GET and POST with the segmentation handler. Every other path
/// is served from the configured static folder; a miss there is a plain 404.
///
/// # Arguments
/// * `state` - application state
pub fn create_router(state: AppState) -> Router {
  let static_files = ServeDir::new(&state.config.static_folder);

  Router::new()
    .route("/json", get(segment_json).post(segment_json))
    .fallback_service(static_files)
    .layer(DefaultBodyLimit::max(MAX_TEXT_LENGTH))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Binds the listener and serves requests until the process ends
///
/// # Errors
/// Returns a configuration error when the address cannot be bound, and an
/// internal error when the server loop fails.
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();

  let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
    tracing::error!(addr = %addr, error = %e, "failed to bind listener");
    ApiError::config(format!("failed to bind {addr}: {e}"))
  })?;

  tracing::info!("server started: http://{addr}");

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
