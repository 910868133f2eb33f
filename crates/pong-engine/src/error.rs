//! Startup error taxonomy.
//!
//! Every variant is a non-recoverable startup failure: the binary logs it at
//! error level and exits with a failure status. Nothing past startup returns
//! these; per-frame problems are reported through [`crate::core::FrameOutcome`].

use snafu::Snafu;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum StartupError {
    #[snafu(display("failed to initialize the windowing library"))]
    WindowingLibraryInit { source: EventLoopError },

    #[snafu(display("failed to create window {title:?}"))]
    WindowCreation { title: String, source: OsError },

    #[snafu(display("no monitor at index {index} ({available} available)"))]
    MonitorNotFound { index: usize, available: usize },

    #[snafu(display("windowing library exited before the window was created"))]
    SessionExited,

    #[snafu(display("failed to initialize the rendering context"))]
    RenderingContextInit {
        #[snafu(source(from(anyhow::Error, Into::into)))]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
