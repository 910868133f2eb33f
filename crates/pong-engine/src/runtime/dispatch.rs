use ouroboros::self_referencing;
use snafu::ResultExt;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::core::{FrameDriver, FrameOutcome};
use crate::device::{ContextInit, RenderContext};
use crate::error::{RenderingContextInitErr, StartupError};
use crate::paint::Color;
use crate::session::{Session, SessionStatus};
use crate::window::{translate, Window, WindowSignal};

/// A window together with the rendering context bound to it.
#[self_referencing]
pub(crate) struct Stage {
    window: Window,

    #[borrows(window)]
    #[covariant]
    context: RenderContext<'this>,
}

impl Stage {
    /// Binds a rendering context to `window`. The window is destroyed if
    /// binding fails.
    pub(crate) fn bind(window: Window, init: ContextInit) -> Result<Self, StartupError> {
        Stage::try_new(window, |window| {
            RenderContext::bind(window, init).context(RenderingContextInitErr)
        })
    }

    pub(crate) fn window(&self) -> &Window {
        self.borrow_window()
    }
}

/// Frame loop view of a running session and stage.
pub(crate) struct LiveDriver<'a> {
    pub session: &'a mut Session,
    pub stage: &'a mut Stage,
    pub clear_color: Color,
}

impl FrameDriver for LiveDriver<'_> {
    fn poll_events(&mut self) {
        let mut dispatch = Dispatch {
            stage: &mut *self.stage,
        };

        if let SessionStatus::Exit(code) = self.session.poll_events(&mut dispatch) {
            log::info!("windowing library exited with code {code}");
            self.stage.borrow_window().request_close();
        }
    }

    fn should_close(&self) -> bool {
        self.stage.borrow_window().should_close()
    }

    fn render_frame(&mut self) -> FrameOutcome {
        let color = self.clear_color;
        self.stage.with_context_mut(|ctx| ctx.clear(color))
    }
}

/// Routes polled events to the stage.
struct Dispatch<'s> {
    stage: &'s mut Stage,
}

impl ApplicationHandler for Dispatch<'_> {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        self.stage.with_mut(|fields| {
            if window_id != fields.window.id() {
                return;
            }

            log::trace!("{event:?}");

            match translate(&event) {
                Some(WindowSignal::Close) => fields.window.request_close(),
                Some(WindowSignal::Resized(size)) => fields.context.resize(size),
                Some(WindowSignal::Rescaled) => fields.context.resize(fields.window.inner_size()),
                None => {}
            }
        });
    }
}
