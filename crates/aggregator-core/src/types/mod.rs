//! Validated value types shared by every backend.

mod server_url;
mod write_method;

pub use server_url::{REST_PREFIX, ServerUrl};
pub use write_method::WriteMethod;
