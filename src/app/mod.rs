//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each one ties together:
//! - Model state (pure, in the library's `model`)
//! - The background API worker (in src/services/)
//! - Pure logic (the library's `logic`)
//!
//! - navigation: Route changes through the guard, fetch on mount, paging
//! - filters: Search input and exact-filter cycling
//! - session: Sign in and sign out
//! - actions: Row actions, modals and form submission

pub(crate) mod actions;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod session;
