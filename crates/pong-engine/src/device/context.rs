use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;

use crate::core::FrameOutcome;
use crate::paint::Color;
use crate::window::Window;

use super::frame::SurfaceFrame;
use super::{surface, ContextInit};

/// Rendering context bound to one window.
///
/// Owns the wgpu instance, adapter, device, queue and the window's configured
/// surface. Binding is always an explicit call; creating a [`Window`] never
/// binds anything.
///
/// The surface borrows the window (`'w`), so the window outlives the context.
pub struct RenderContext<'w> {
    window: &'w winit::window::Window,

    instance: wgpu::Instance,

    /// Surface bound to the window.
    surface: wgpu::Surface<'w>,

    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl<'w> RenderContext<'w> {
    /// Binds a new context to `window`, blocking on adapter/device acquisition.
    pub fn bind(window: &'w Window, init: ContextInit) -> Result<Self> {
        pollster::block_on(Self::bind_async(window, init))
    }

    /// Async form of [`bind`](Self::bind). Adapter/device acquisition is
    /// asynchronous under wgpu.
    pub async fn bind_async(window: &'w Window, init: ContextInit) -> Result<Self> {
        let raw = window.raw();
        anyhow::ensure!(surface::is_drawable(raw.inner_size()), "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(raw)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pong-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Self::configure(raw, instance, surface, adapter, device, queue, &init)
    }

    /// Binds `window` reusing the instance, adapter, device and queue of `share`.
    ///
    /// Resources created through either context are usable from both.
    pub fn bind_shared(
        window: &'w Window,
        share: &RenderContext<'_>,
        init: ContextInit,
    ) -> Result<Self> {
        let raw = window.raw();
        anyhow::ensure!(surface::is_drawable(raw.inner_size()), "window has zero size");

        let surface = share
            .instance
            .create_surface(raw)
            .context("failed to create wgpu surface")?;

        anyhow::ensure!(
            share.adapter.is_surface_supported(&surface),
            "shared adapter cannot present to window {:?}",
            window.title()
        );

        Self::configure(
            raw,
            share.instance.clone(),
            surface,
            share.adapter.clone(),
            share.device.clone(),
            share.queue.clone(),
            &init,
        )
    }

    fn configure(
        window: &'w winit::window::Window,
        instance: wgpu::Instance,
        surface: wgpu::Surface<'w>,
        adapter: wgpu::Adapter,
        device: wgpu::Device,
        queue: wgpu::Queue,
        init: &ContextInit,
    ) -> Result<Self> {
        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);

        let format = surface::choose_surface_format(&caps.formats, init.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, init.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        let info = adapter.get_info();
        log::info!(
            "rendering context bound: {} ({:?}), {:?} {}x{}",
            info.name,
            info.backend,
            format,
            config.width,
            config.height
        );

        Ok(Self {
            window,
            instance,
            surface,
            adapter,
            device,
            queue,
            config,
            size,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the surface after a resize. Zero sizes defer configuration.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        log::debug!("surface resized to {}x{}", new_size.width, new_size.height);
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            new_size,
        );
    }

    /// Clears the whole surface to `color` and presents it.
    ///
    /// A minimized (zero-sized) surface drops the frame without touching wgpu.
    pub fn clear(&mut self, color: Color) -> FrameOutcome {
        if !surface::is_drawable(self.size) {
            return FrameOutcome::Dropped;
        }

        let mut frame = match self.begin_frame() {
            Ok(f) => f,
            Err(err) => return self.handle_surface_error(err),
        };

        // Dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pong clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.window.pre_present_notify();
        self.submit(frame);
        FrameOutcome::Presented
    }

    fn begin_frame(&self) -> std::result::Result<SurfaceFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pong frame encoder"),
            });

        Ok(SurfaceFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the frame.
    fn submit(&self, frame: SurfaceFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        drop(frame.view);
        frame.surface_texture.present();
    }

    fn handle_surface_error(&mut self, err: SurfaceError) -> FrameOutcome {
        if surface::needs_reconfigure(&err) && surface::is_drawable(self.size) {
            self.surface.configure(&self.device, &self.config);
        }

        let outcome = surface::frame_outcome(&err);
        match outcome {
            FrameOutcome::Fatal => log::error!("surface error: {err}"),
            _ => log::warn!("surface error: {err}, frame dropped"),
        }
        outcome
    }
}
