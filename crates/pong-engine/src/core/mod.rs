//! Core loop contracts.
//!
//! Defines the frame loop and the seam between it and the platform layer
//! (`FrameDriver`). The runtime implements the driver over a real window and
//! rendering context; tests implement it with fakes.

mod app;
mod frame_loop;

pub use app::{FrameDriver, FrameOutcome, LoopState};
pub use frame_loop::{FrameLoop, FrameStats};
