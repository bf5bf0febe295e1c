//=========================================================================
// Window Renderer
//=========================================================================
//
// Presents the attached canvas in the game window.
//
// Per frame:
//   get_current_texture() → clear pass (canvas background) → present()
//
// The surface follows the window's physical size. Lost or outdated
// surfaces are reconfigured and the frame is skipped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info, warn};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::config::{Color, RendererType};
use crate::error::PlatformError;
use crate::host::Canvas;

//=== Renderer ============================================================

/// wgpu surface bound to the game window.
pub(crate) struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    clear: wgpu::Color,
}

impl Renderer {
    /// Creates the surface and device for `window`.
    ///
    /// A `Software` canvas asks wgpu for its fallback adapter.
    pub(crate) fn new(window: Arc<Window>, canvas: &Canvas) -> Result<Self, PlatformError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(PlatformError::SurfaceCreation)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: canvas.renderer == RendererType::Software,
        }))
        .map_err(PlatformError::AdapterUnavailable)?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("aetheric_device"),
            required_features: wgpu::Features::empty(),
            required_limits: adapter.limits(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .map_err(PlatformError::DeviceRequest)?;

        let config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(PlatformError::SurfaceUnsupported)?;
        surface.configure(&device, &config);

        info!(
            target: "platform::render",
            "Surface ready: {} ({:?}), {:?}, smoothing {}",
            adapter.get_info().name,
            adapter.get_info().backend,
            config.format,
            if canvas.smoothing { "on" } else { "off" }
        );

        Ok(Self {
            surface,
            device,
            queue,
            clear: clear_color(canvas.background, config.format.is_srgb()),
            config,
        })
    }

    /// Reconfigures the surface for a new window size. Zero sizes
    /// (minimized windows) are ignored.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        debug!(target: "platform::render", "Surface resized to {}x{}", width, height);
    }

    /// Clears the window to the canvas background and presents it.
    pub(crate) fn render(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                warn!(target: "platform::render", "Skipping frame: {}", e);
                return;
            }
        };

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("aetheric_frame"),
        });

        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("aetheric_clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

//=== Clear Color =========================================================

/// Clear value for `color`. sRGB targets expect linear values.
fn clear_color(color: Color, srgb_target: bool) -> wgpu::Color {
    let [r, g, b, a] = color.to_f32_array().map(f64::from);
    if !srgb_target {
        return wgpu::Color { r, g, b, a };
    }

    wgpu::Color {
        r: srgb_to_linear(r),
        g: srgb_to_linear(g),
        b: srgb_to_linear(b),
        a,
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
