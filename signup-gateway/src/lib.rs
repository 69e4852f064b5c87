//! HTTP gateway for the activity signup service.
//!
//! Serves the activity catalog, the signup and unregister endpoints, and
//! the static front-end. The directory is owned by a [`registry::Registry`]
//! injected into every handler through axum state.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod extract;
pub mod registry;
pub mod routes;
