//! Core types for the activity signup service.
//!
//! Defines the activity catalog, the participant identity, and the
//! directory that tracks who is signed up for what. Everything here is
//! synchronous and free of I/O; the HTTP layer lives in `signup-gateway`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod catalog;
pub mod directory;
pub mod email;
pub mod enrollment;
pub mod error;

pub use activity::Activity;
pub use directory::ActivityDirectory;
pub use email::Email;
pub use enrollment::Enrollment;
pub use error::{CoreError, DirectoryError};
