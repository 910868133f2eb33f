//! Pong engine crate.
//!
//! Owns the windowing session, the window, its rendering context and the
//! fixed-rate frame loop that drives them.

pub mod core;
pub mod device;
pub mod error;
pub mod logging;
pub mod paint;
pub mod runtime;
pub mod session;
pub mod time;
pub mod window;

pub use error::StartupError;
