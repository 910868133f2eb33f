use winit::dpi::PhysicalSize;

use crate::core::FrameOutcome;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    alpha_modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| alpha_modes.contains(m))
        .or_else(|| alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Whether a surface of this size can be configured. wgpu rejects 0x0.
#[inline]
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if !is_drawable(new_size) {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

/// Lost and outdated surfaces must be configured again before the next frame.
#[inline]
pub(crate) fn needs_reconfigure(err: &wgpu::SurfaceError) -> bool {
    matches!(err, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
}

/// Only running out of memory ends rendering; everything else drops one frame.
pub(crate) fn frame_outcome(err: &wgpu::SurfaceError) -> FrameOutcome {
    match err {
        wgpu::SurfaceError::OutOfMemory => FrameOutcome::Fatal,
        wgpu::SurfaceError::Lost
        | wgpu::SurfaceError::Outdated
        | wgpu::SurfaceError::Timeout
        | wgpu::SurfaceError::Other => FrameOutcome::Dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn no_formats_means_unsupported() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn first_format_without_srgb_preference() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(TextureFormat::Bgra8Unorm)
        );
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn requested_alpha_used_only_if_supported() {
        let modes = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn only_out_of_memory_is_fatal() {
        use wgpu::SurfaceError;
        assert_eq!(frame_outcome(&SurfaceError::Lost), FrameOutcome::Dropped);
        assert_eq!(frame_outcome(&SurfaceError::Outdated), FrameOutcome::Dropped);
        assert_eq!(frame_outcome(&SurfaceError::Timeout), FrameOutcome::Dropped);
        assert_eq!(frame_outcome(&SurfaceError::Other), FrameOutcome::Dropped);
        assert_eq!(frame_outcome(&SurfaceError::OutOfMemory), FrameOutcome::Fatal);
    }

    #[test]
    fn lost_and_outdated_surfaces_are_reconfigured() {
        use wgpu::SurfaceError;
        assert!(needs_reconfigure(&SurfaceError::Lost));
        assert!(needs_reconfigure(&SurfaceError::Outdated));
        assert!(!needs_reconfigure(&SurfaceError::Timeout));
        assert!(!needs_reconfigure(&SurfaceError::Other));
        assert!(!needs_reconfigure(&SurfaceError::OutOfMemory));
    }

    #[test]
    fn zero_sized_surfaces_are_not_drawable() {
        assert!(is_drawable(PhysicalSize::new(1920, 1080)));
        assert!(!is_drawable(PhysicalSize::new(0, 1080)));
        assert!(!is_drawable(PhysicalSize::new(1920, 0)));
    }
}
