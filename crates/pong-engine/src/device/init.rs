/// Parameters for binding a rendering context to a window.
///
/// Add fields only when a concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Backends the instance may pick from.
    pub backends: wgpu::Backends,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// Defaults to `AutoNoVsync` so the frame loop owns the cadence. With FIFO,
    /// presenting blocks until the next vblank and the display refresh rate sets
    /// the minimum frame time. `AutoNoVsync` falls back to FIFO where neither
    /// immediate nor mailbox presentation is available.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface. A hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: None,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_present_mode_leaves_pacing_to_the_frame_loop() {
        let init = ContextInit::default();
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert!(init.prefer_srgb);
    }
}
