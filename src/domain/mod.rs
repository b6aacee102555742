//! # Domain Layer
//!
//! Modes, chat message types, notices and export files.
//! This layer is independent of HTTP clients, the CLI and the filesystem.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
