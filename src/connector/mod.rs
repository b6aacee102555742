//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion service (OpenRouter over HTTP, in-process mock)
//! - Export (plain-text files on disk)
//! - CLI controllers and the HTTP proxy server

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
