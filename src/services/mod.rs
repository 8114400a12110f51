//! External Services
//!
//! - api: Background worker that runs admin API calls off the UI loop

pub mod api;

pub use api::{ApiRequest, ApiResponse};
