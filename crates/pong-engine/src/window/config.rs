/// Full-screen selection for a window.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FullscreenMode {
    #[default]
    Windowed,
    /// Borderless full screen. `monitor` indexes the available monitors;
    /// `None` uses the monitor the window would open on.
    Borderless { monitor: Option<usize> },
}

/// Window configuration.
///
/// Sizes are logical pixels, width first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: FullscreenMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "Pong".to_string(),
            fullscreen: FullscreenMode::Windowed,
        }
    }
}

impl WindowConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: FullscreenMode) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}
