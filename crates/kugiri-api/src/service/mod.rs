//! Service module

mod kugiri_api_service;

pub use kugiri_api_service::{KugiriApiService, KugiriApiServiceFull};
