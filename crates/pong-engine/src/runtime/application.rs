use crate::core::{FrameLoop, FrameStats};
use crate::error::StartupError;
use crate::paint::Color;
use crate::session::Session;
use crate::window::Window;

use super::dispatch::{LiveDriver, Stage};
use super::RuntimeConfig;

/// Session, window, rendering context and frame loop, started in that order.
///
/// Field order is drop order: the window and its context are released before
/// the session.
pub struct Application {
    stage: Stage,
    session: Session,
    frame_loop: FrameLoop,
    clear_color: Color,
}

impl Application {
    /// Opens the session, creates the window and binds its rendering context.
    ///
    /// Anything already acquired is released again if a later step fails.
    pub fn start(config: RuntimeConfig) -> Result<Self, StartupError> {
        let RuntimeConfig {
            window,
            frame,
            context,
            clear_color,
        } = config;

        let mut session = Session::open()?;
        let handle = Window::create(&mut session, &window)?;
        let stage = Stage::bind(handle, context)?;

        Ok(Self {
            stage,
            session,
            frame_loop: FrameLoop::new(frame),
            clear_color,
        })
    }

    pub fn window(&self) -> &Window {
        self.stage.window()
    }

    /// Runs the frame loop until the window is closed.
    pub fn run(&mut self) -> FrameStats {
        let mut driver = LiveDriver {
            session: &mut self.session,
            stage: &mut self.stage,
            clear_color: self.clear_color,
        };
        self.frame_loop.run(&mut driver)
    }

    /// Destroys the window and its context, then closes the session.
    pub fn shutdown(self) {
        let Self { stage, session, .. } = self;
        drop(stage);
        session.close();
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Starts an [`Application`], runs it until the window closes and tears it
    /// down.
    pub fn run(config: RuntimeConfig) -> Result<FrameStats, StartupError> {
        let mut app = Application::start(config)?;
        let stats = app.run();
        app.shutdown();
        Ok(stats)
    }
}
