//! Model module

mod request;
mod response;

pub use request::SegmentParams;
pub use response::{SegmentDto, SegmentResponse};
