//! # Application Layer
//!
//! Use cases, the ports they depend on, and the session state machine that
//! drives them.

pub mod interfaces;
pub mod session;
pub mod use_cases;

pub use interfaces::*;
pub use session::*;
pub use use_cases::*;
