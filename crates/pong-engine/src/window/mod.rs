//! The application window.
//!
//! Creation goes through the [`Session`](crate::session::Session); the close
//! flag is set by event dispatch and read by the frame loop.

mod config;
mod events;
mod handle;

pub use config::{FullscreenMode, WindowConfig};
pub use events::{translate, WindowSignal};
pub use handle::{CloseFlag, Window};
