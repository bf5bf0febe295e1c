//=========================================================================
// Host Environment
//=========================================================================
//
// The document the game renders into. A host owns named containers;
// the engine resolves its configured parent among them and attaches a
// canvas to it.
//
//   Host
//    ├─ HeadlessHost   in-memory containers (tests, servers)
//    └─ DesktopHost    one native window per container id
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::config::{Color, RendererType};
use crate::core::scale::Size;
use crate::error::HostError;

//=== ContainerInfo =======================================================

/// What the host knows about a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub size: Size,
    pub supports_gpu: bool,
}

//=== Canvas ==============================================================

/// The rendering surface the engine attaches to its container.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Logical game size.
    pub size: Size,
    pub background: Color,
    /// Texture smoothing; off for pixel art.
    pub smoothing: bool,
    /// Backend after `Auto` resolution.
    pub renderer: RendererType,
}

//=== Host Trait ==========================================================

/// A document that can host game canvases.
pub trait Host {
    /// Looks up a container by id.
    fn container(&self, id: &str) -> Option<ContainerInfo>;

    /// Attaches the canvas to a container.
    fn attach(&mut self, id: &str, canvas: Canvas) -> Result<(), HostError>;

    /// Hosts without visible output force the headless renderer.
    fn is_headless(&self) -> bool {
        false
    }
}

//=== HeadlessHost ========================================================

#[derive(Debug, Clone, Default)]
struct Element {
    info: Option<ContainerInfo>,
    canvas: Option<Canvas>,
}

/// In-memory document with explicitly declared containers.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    elements: HashMap<String, Element>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a container element.
    pub fn with_container(mut self, id: impl Into<String>, size: Size) -> Self {
        self.add_container(id, size);
        self
    }

    pub fn add_container(&mut self, id: impl Into<String>, size: Size) {
        self.elements.insert(
            id.into(),
            Element {
                info: Some(ContainerInfo { size, supports_gpu: false }),
                canvas: None,
            },
        );
    }

    /// Canvas attached to `id`, if any.
    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.elements.get(id).and_then(|element| element.canvas.as_ref())
    }
}

impl Host for HeadlessHost {
    fn container(&self, id: &str) -> Option<ContainerInfo> {
        self.elements.get(id).and_then(|element| element.info)
    }

    fn attach(&mut self, id: &str, canvas: Canvas) -> Result<(), HostError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| HostError::UnknownContainer(id.to_string()))?;

        if element.canvas.is_some() {
            return Err(HostError::AlreadyAttached(id.to_string()));
        }

        debug!(target: "host", "Attached {:?} canvas to `{}`", canvas.renderer, id);
        element.canvas = Some(canvas);
        Ok(())
    }

    fn is_headless(&self) -> bool {
        true
    }
}

//=== DesktopHost =========================================================

/// Native desktop: every non-empty id names a top-level window.
///
/// The window itself is created by the platform layer when the game
/// runs; attaching only records which canvas it will show.
#[derive(Debug, Clone)]
pub struct DesktopHost {
    window_size: Size,
    attached: HashMap<String, Canvas>,
}

impl DesktopHost {
    /// Creates a host whose windows start at `window_size`.
    pub fn new(window_size: Size) -> Self {
        Self {
            window_size,
            attached: HashMap::new(),
        }
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.attached.get(id)
    }
}

impl Host for DesktopHost {
    fn container(&self, id: &str) -> Option<ContainerInfo> {
        if id.is_empty() {
            return None;
        }

        Some(ContainerInfo {
            size: self.window_size,
            supports_gpu: true,
        })
    }

    fn attach(&mut self, id: &str, canvas: Canvas) -> Result<(), HostError> {
        if id.is_empty() {
            return Err(HostError::UnknownContainer(id.to_string()));
        }

        if self.attached.contains_key(id) {
            return Err(HostError::AlreadyAttached(id.to_string()));
        }

        debug!(target: "host", "Window `{}` will show a {:?} canvas", id, canvas.renderer);
        self.attached.insert(id.to_string(), canvas);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
