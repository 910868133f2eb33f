//! Runtime: wires session, window, rendering context and frame loop together.

mod application;
mod config;
mod dispatch;

pub use application::{Application, Runtime};
pub use config::RuntimeConfig;
