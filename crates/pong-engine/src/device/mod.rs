//! Rendering context binding.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for a window
//! - creating & configuring that window's Surface (swapchain)
//! - clearing and presenting frames, and recovering from surface errors

mod context;
mod frame;
mod init;
mod surface;

pub use context::RenderContext;
pub use init::ContextInit;
