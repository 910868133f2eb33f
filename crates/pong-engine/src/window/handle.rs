use std::cell::Cell;

use snafu::{OptionExt, ResultExt};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowId};

use crate::error::{MonitorNotFoundErr, SessionExitedErr, StartupError, WindowCreationErr};
use crate::session::{Session, SessionStatus};

use super::{translate, FullscreenMode, WindowConfig, WindowSignal};

/// A window's close flag.
///
/// Set once, never cleared. Reading it has no side effects.
#[derive(Debug, Default)]
pub struct CloseFlag(Cell<bool>);

impl CloseFlag {
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn set(&self) {
        self.0.set(true);
    }
}

/// The application's on-screen window.
///
/// Creating a window does not bind a rendering context; see
/// [`RenderContext::bind`](crate::device::RenderContext::bind).
pub struct Window {
    inner: winit::window::Window,
    title: String,
    close: CloseFlag,
}

impl Window {
    /// Creates a window through `session`.
    ///
    /// `winit` only creates windows from inside its event callbacks, so this
    /// polls the session until the request has been served.
    pub fn create(session: &mut Session, config: &WindowConfig) -> Result<Self, StartupError> {
        let mut request = CreateRequest {
            config,
            result: None,
            close: CloseFlag::default(),
        };

        let inner = loop {
            let status = session.poll_events(&mut request);
            if let Some(result) = request.result.take() {
                let inner = result?;
                if let SessionStatus::Exit(code) = status {
                    log::info!("windowing library exited with code {code} during window creation");
                    request.close.set();
                }
                break inner;
            }
            if let SessionStatus::Exit(_) = status {
                return SessionExitedErr.fail();
            }
        };

        log::info!(
            "window {:?} created ({}x{}, {:?})",
            config.title,
            config.width,
            config.height,
            config.fullscreen
        );

        // A close delivered in the pump that created the window still counts.
        Ok(Self {
            inner,
            title: config.title.clone(),
            close: request.close,
        })
    }

    pub fn id(&self) -> WindowId {
        self.inner.id()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Underlying `winit` window.
    pub fn raw(&self) -> &winit::window::Window {
        &self.inner
    }

    /// Drawable size in physical pixels.
    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.inner.inner_size()
    }

    /// Whether closing was requested. Repeated calls agree until the next
    /// event delivery.
    pub fn should_close(&self) -> bool {
        self.close.is_set()
    }

    pub fn request_close(&self) {
        if !self.close.is_set() {
            log::debug!("window {:?} close requested", self.title);
        }
        self.close.set();
    }

    /// Releases the native window. Must happen before the session closes.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::info!("window {:?} destroyed", self.title);
    }
}

struct CreateRequest<'c> {
    config: &'c WindowConfig,
    result: Option<Result<winit::window::Window, StartupError>>,
    /// Close requested before the [`Window`] wrapper exists.
    close: CloseFlag,
}

impl CreateRequest<'_> {
    fn try_create(&mut self, event_loop: &ActiveEventLoop) {
        if self.result.is_none() {
            self.result = Some(build_window(event_loop, self.config));
        }
    }

    fn is_created(&self, window_id: WindowId) -> bool {
        matches!(&self.result, Some(Ok(window)) if window.id() == window_id)
    }

    fn observe(&self, event: &WindowEvent) {
        if translate(event) == Some(WindowSignal::Close) {
            log::debug!("window {:?} closed while being created", self.config.title);
            self.close.set();
        }
    }
}

impl ApplicationHandler for CreateRequest<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.try_create(event_loop);
    }

    fn window_event(&mut self, _: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        log::trace!("event during window creation: {event:?}");
        if self.is_created(window_id) {
            self.observe(&event);
        }
    }

    // Reached on every pump iteration, also on platforms that do not send an
    // initial `resumed`.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.try_create(event_loop);
    }
}

fn build_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<winit::window::Window, StartupError> {
    let mut attrs = winit::window::Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height));

    if let FullscreenMode::Borderless { monitor } = config.fullscreen {
        let handle = match monitor {
            None => None,
            Some(index) => {
                let mut monitors: Vec<_> = event_loop.available_monitors().collect();
                let available = monitors.len();
                let found = (index < available).then(|| monitors.swap_remove(index));
                Some(found.context(MonitorNotFoundErr { index, available })?)
            }
        };
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(handle)));
    }

    event_loop
        .create_window(attrs)
        .context(WindowCreationErr {
            title: config.title.as_str(),
        })
}
