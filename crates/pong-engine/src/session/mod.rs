//! Windowing session.
//!
//! Library-wide initialization and teardown for the windowing library. The
//! session owns the `winit` event loop and drives it in pull mode: the frame
//! loop asks for pending events instead of handing control to `winit`.

use std::time::Duration;

use snafu::ResultExt;
use winit::application::ApplicationHandler;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::error::{StartupError, WindowingLibraryInitErr};

/// Outcome of one event poll.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionStatus {
    Continue,
    /// The windowing library wants the application to exit.
    Exit(i32),
}

/// Handle meaning "the windowing library is initialized".
///
/// At most one exists per process: `winit` refuses to create a second event
/// loop, which surfaces here as [`StartupError::WindowingLibraryInit`].
/// Teardown runs exactly once, when the session is closed or dropped. Windows
/// must be destroyed first.
pub struct Session {
    event_loop: EventLoop<()>,
}

impl Session {
    /// Initializes the windowing library.
    pub fn open() -> Result<Self, StartupError> {
        let event_loop = EventLoop::new().context(WindowingLibraryInitErr)?;
        log::info!("windowing session opened");
        Ok(Self { event_loop })
    }

    /// Dispatches every pending event to `handler` without blocking.
    pub fn poll_events<H: ApplicationHandler>(&mut self, handler: &mut H) -> SessionStatus {
        match self.event_loop.pump_app_events(Some(Duration::ZERO), handler) {
            PumpStatus::Continue => SessionStatus::Continue,
            PumpStatus::Exit(code) => SessionStatus::Exit(code),
        }
    }

    /// Releases library-wide resources.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::info!("windowing session closed");
    }
}
