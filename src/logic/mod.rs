//! Business Logic
//!
//! This module contains pure functions and small state machines that can be
//! unit tested without a terminal or a network:
//! - errors: Error classification and toast text
//! - filter: Client-side free-text and exact-match filtering
//! - formatting: Display defaults for optional API fields
//! - forms: Form inputs and required-field validation
//! - layout: Sidebar responsiveness
//! - navigation: Row selection and paging arithmetic
//! - pages: Per-page search fields, filters and columns
//! - route: Routes and the route guard
//! - ui: Toast timing

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod forms;
pub mod layout;
pub mod navigation;
pub mod pages;
pub mod route;
pub mod ui;
