/// Frame loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    /// Terminal. The loop returns control to the caller for teardown.
    Exiting,
}

/// What happened to a frame handed to the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The frame was cleared and presented.
    Presented,
    /// The surface was not ready (lost, outdated, timed out, zero-sized); try
    /// again next frame.
    Dropped,
    /// Rendering cannot continue.
    Fatal,
}

/// The window + rendering context pair as seen by the frame loop.
pub trait FrameDriver {
    /// Polls and dispatches every pending window/input event without blocking.
    fn poll_events(&mut self);

    /// Whether the window's close flag is set.
    ///
    /// Must not deliver events; calling it twice without a poll in between
    /// returns the same answer.
    fn should_close(&self) -> bool;

    /// Clears (and eventually draws) one frame.
    fn render_frame(&mut self) -> FrameOutcome;
}
