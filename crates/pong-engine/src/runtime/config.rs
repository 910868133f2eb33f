use crate::device::ContextInit;
use crate::paint::Color;
use crate::time::FrameConfig;
use crate::window::WindowConfig;

/// Everything the runtime needs to start.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub window: WindowConfig,
    pub frame: FrameConfig,
    pub context: ContextInit,
    /// Color every frame is cleared to.
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame: FrameConfig::default(),
            context: ContextInit::default(),
            clear_color: Color::BLACK,
        }
    }
}

impl RuntimeConfig {
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    pub fn with_frame(mut self, frame: FrameConfig) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_context(mut self, context: ContextInit) -> Self {
        self.context = context;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}
