//! HTTP handler definitions

use std::time::Instant;

use axum::{
  Json,
  extract::{Form, FromRequest, Query, Request, State},
};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{SegmentParams, SegmentResponse};

use super::state::AppState;

/// GET|POST /json endpoint
///
/// Segments the text carried by the request and returns the tagged tokens.
///
/// The input is the `text` query parameter; when that is absent or empty, the
/// `text` field of a form-encoded body is used instead. A request without text
/// anywhere segments the empty string, which yields `{"segments":[]}`.
///
/// # Response
/// - 200 OK: `{"segments":[{"text":"...","pos":"..."}, ...]}`
/// - 500 Internal Server Error: unexpected internal failure
pub async fn segment_json(
  State(state): State<AppState>,
  Query(query): Query<SegmentParams>,
  request: Request,
) -> Result<Json<SegmentResponse>, ApiError> {
  let start = Instant::now();

  let text = match query.text.filter(|t| !t.is_empty()) {
    Some(text) => text,
    None => form_text(request).await.unwrap_or_default(),
  };

  debug!(text_len = text.len(), "segmentation request received");

  // The engine call is CPU bound; run it on the blocking pool so it cannot
  // stall the async workers.
  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.segment(&text)).await.map_err(|e| {
    error!(error = %e, "spawn_blocking failed");
    ApiError::internal("failed to run segmentation")
  })??;

  info!(
    segment_count = response.segments.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "segmentation request served"
  );

  Ok(Json(response))
}

/// Reads the `text` field of a form-encoded body, if there is one.
///
/// Lenient on purpose: a missing, non-form, or unreadable body means "no form
/// field" rather than a client error, matching the tolerance of classic form
/// handling. On GET the form extractor falls back to the query string, which the
/// caller already found empty.
async fn form_text(request: Request) -> Option<String> {
  let Form(params) = Form::<SegmentParams>::from_request(request, &()).await.ok()?;

  params.text.filter(|t| !t.is_empty())
}
