//! Time subsystem.
//!
//! Clock abstraction and fixed-rate frame pacing. Nothing here
//! touches the window or the GPU.

mod clock;
mod pacer;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use clock::ManualClock;
pub use pacer::{
    time_to_wait, FrameConfig, FramePacer, Pacing, WaitStrategy, DEFAULT_FRAME_DURATION,
};
