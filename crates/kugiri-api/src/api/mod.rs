//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::segment_json;
pub use routes::{create_router, run_server};
pub use state::AppState;
