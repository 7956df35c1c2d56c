//! kugiri-api crate
//!
//! Web server exposing text segmentation as an HTTP JSON API.
//!
//! ## Endpoints
//! - `GET|POST /json` - segment the `text` query parameter or form field
//! - everything else - static files from the configured folder
//!
//! ## Usage Example
//! ```bash
//! curl "http://127.0.0.1:5678/json?text=%E6%9D%B1%E4%BA%AC%E3%82%BF%E3%83%AF%E3%83%BC"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SegmentDto, SegmentParams, SegmentResponse};
pub use service::KugiriApiServiceFull;
