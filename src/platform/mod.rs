//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via a channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Game::tick()    │
//  │   ↓                      │    │   ├─ ScaleManager│
//  │  InputBuffer             │    │   ├─ Pointer     │
//  │   ├─ presses (ordered)   │    │   └─ Scenes      │
//  │   └─ move (coalesced)    │    │                  │
//  │   ↓                      │    └──────────────────┘
//  │  RedrawRequested         │             ↑
//  │   ↓ (flush)              │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Responsibilities:
// - Create the window standing in for the container element
// - Clear it to the canvas background every frame
// - Convert mouse and touch events into pointer events
// - Buffer input until the frame boundary
// - Forward resizes and close requests
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod renderer;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::RendererType;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::scale::Size;
use crate::error::PlatformError;
use crate::host::Canvas;
use input_buffer::InputBuffer;
use renderer::Renderer;

//=== Platform ============================================================

/// Window manager and pointer event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the logic thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Window title, the container id.
    title: String,

    /// Initial logical window size.
    size: Size,

    /// Canvas the game attached to this window.
    canvas: Canvas,

    /// None for headless canvases or when no surface could be created.
    renderer: Option<Renderer>,

    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. The window is created lazily.
    pub(crate) fn new(
        title: impl Into<String>,
        size: Size,
        canvas: Canvas,
        event_sender: Sender<PlatformEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            size,
            canvas,
            renderer: None,
            buffer: InputBuffer::new(),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop on the calling thread until the window closes.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends an event to the logic thread.
    ///
    /// A disconnected channel means the logic thread is gone; the event
    /// is dropped so the user can still close the window.
    fn send(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform", "Logic thread disconnected, dropping event");
        }
    }

    /// Flushes buffered input at the frame boundary.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            trace!(target: "platform::input", "Flushing {} pointer events", events.len());
            self.send(PlatformEvent::Inputs(events));
        }
    }

    /// Creates the surface renderer unless the canvas is headless.
    fn create_renderer(&mut self, window: &Arc<Window>) {
        if self.canvas.renderer == RendererType::Headless {
            info!(target: "platform", "Headless canvas, window stays undrawn");
            return;
        }

        match Renderer::new(Arc::clone(window), &self.canvas) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => warn!(target: "platform", "Drawing disabled: {}", e),
        }
    }

    fn handle_touch(&mut self, phase: TouchPhase, x: f32, y: f32) {
        self.buffer.push_move(x, y);
        match phase {
            TouchPhase::Started => self.buffer.push_discrete(InputEvent::PointerDown),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.buffer.push_discrete(InputEvent::PointerUp)
            }
            TouchPhase::Moved => {}
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.width, self.size.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                let inner = window.inner_size();
                info!(
                    target: "platform",
                    "Window `{}` created: {}x{} @ {}x DPI",
                    self.title,
                    inner.width,
                    inner.height,
                    window.scale_factor()
                );

                // Pointer positions arrive in physical pixels; report the
                // container in the same unit
                self.send(PlatformEvent::Resized(Size::new(inner.width, inner.height)));
                self.create_renderer(&window);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.send(PlatformEvent::Resized(Size::new(size.width, size.height)));
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.buffer.push_move(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let event = match state {
                    ElementState::Pressed => InputEvent::PointerDown,
                    ElementState::Released => InputEvent::PointerUp,
                };
                self.buffer.push_discrete(event);
            }

            WindowEvent::Touch(touch) => {
                self.handle_touch(touch.phase, touch.location.x as f32, touch.location.y as f32);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                if let Some(renderer) = &mut self.renderer {
                    renderer.render();
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
