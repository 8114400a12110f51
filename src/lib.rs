//! rackdesk library
//!
//! Exposes the API client, session storage and pure logic for testing; the
//! terminal front end lives in the binary.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod session;
pub mod utils;
