//! Event Handlers
//!
//! - api: API responses from the background worker
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and dispatch to the orchestration methods in
//! src/app/.

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
