use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

/// Window events the runtime reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowSignal {
    /// User or OS asked the window to close.
    Close,
    /// Drawable size changed.
    Resized(PhysicalSize<u32>),
    /// Scale factor changed; the drawable size must be queried again.
    Rescaled,
}

/// Maps a raw window event to the signal it carries, if any.
pub fn translate(event: &WindowEvent) -> Option<WindowSignal> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(WindowSignal::Close),
        WindowEvent::Resized(size) => Some(WindowSignal::Resized(*size)),
        WindowEvent::ScaleFactorChanged { .. } => Some(WindowSignal::Rescaled),
        _ => None,
    }
}
