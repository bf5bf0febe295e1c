//=========================================================================
// Game Configuration
//=========================================================================
//
// Everything the runtime needs to know before it boots:
//
//   GameConfig<S>
//     ├─ renderer          RendererType (Auto resolved by the engine)
//     ├─ width / height    logical game size in pixels
//     ├─ scale             ScaleConfig { mode, auto_center }
//     ├─ parent            host container id
//     ├─ background_color  Color
//     ├─ scenes            Vec<SceneEntry<S>> (boot order)
//     ├─ pixel_art         disables smoothing
//     ├─ auto_round        whole-pixel display layout
//     └─ fps               logic ticks per second
//
// Configurations are plain values. Every caller gets its own copy;
// nothing here is shared or mutated behind the caller's back.
//
//=========================================================================

//=== Module Declarations =================================================

mod color;
mod overrides;

//=== Public API ==========================================================

pub use color::Color;
pub use overrides::{ConfigOverrides, ScaleOverrides};

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::scene::{Scene, SceneKey};
use crate::error::ConfigError;

//=== RendererType ========================================================

/// Rendering backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererType {
    /// Let the engine pick from host capabilities.
    #[default]
    Auto,
    Software,
    Gpu,
    /// No visible output (servers, tests).
    Headless,
}

//=== Scale Settings ======================================================

/// How the game canvas is sized relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Canvas keeps the configured game size.
    #[default]
    None,
    /// Largest size that fits inside the container, aspect ratio kept.
    Fit,
    /// Smallest size that covers the container, aspect ratio kept.
    Envelop,
    /// Game size follows the container size.
    Resize,
}

/// Which axes the canvas is centered on inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterMode {
    #[default]
    NoCenter,
    CenterBoth,
    CenterHorizontally,
    CenterVertically,
}

impl CenterMode {
    pub fn centers_x(self) -> bool {
        matches!(self, Self::CenterBoth | Self::CenterHorizontally)
    }

    pub fn centers_y(self) -> bool {
        matches!(self, Self::CenterBoth | Self::CenterVertically)
    }
}

/// Scaling policy of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScaleConfig {
    pub mode: ScaleMode,
    pub auto_center: CenterMode,
}

//=== SceneEntry ==========================================================

/// A scene registered in the configuration: its key plus a constructor.
///
/// A fresh scene instance is built from `create` every time an engine
/// boots from this configuration, so configurations never share scene
/// state.
pub struct SceneEntry<S: SceneKey> {
    pub key: S,
    pub create: fn() -> Box<dyn Scene<S>>,
}

impl<S: SceneKey> SceneEntry<S> {
    pub const fn new(key: S, create: fn() -> Box<dyn Scene<S>>) -> Self {
        Self { key, create }
    }
}

impl<S: SceneKey> Clone for SceneEntry<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: SceneKey> Copy for SceneEntry<S> {}

// Entries are identified by key; constructors are not comparable.
impl<S: SceneKey> PartialEq for SceneEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S: SceneKey> fmt::Debug for SceneEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SceneEntry").field(&self.key).finish()
    }
}

//=== GameConfig ==========================================================

/// Complete runtime configuration of one game instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig<S: SceneKey> {
    pub renderer: RendererType,
    pub width: u32,
    pub height: u32,
    pub scale: ScaleConfig,
    pub parent: String,
    pub background_color: Color,
    pub scenes: Vec<SceneEntry<S>>,
    pub pixel_art: bool,
    pub auto_round: bool,
    pub fps: u32,
}

impl<S: SceneKey> GameConfig<S> {
    /// Default target tick rate.
    pub const DEFAULT_FPS: u32 = 60;

    /// Creates a configuration with engine defaults and no scenes.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: RendererType::Auto,
            width,
            height,
            scale: ScaleConfig::default(),
            parent: String::new(),
            background_color: Color::BLACK,
            scenes: Vec::new(),
            pixel_art: false,
            auto_round: false,
            fps: Self::DEFAULT_FPS,
        }
    }

    /// Returns a copy of this configuration bound to `parent`.
    ///
    /// The receiver is left untouched.
    pub fn with_parent(&self, parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..self.clone()
        }
    }

    /// Scene keys in boot order.
    pub fn scene_keys(&self) -> Vec<S> {
        self.scenes.iter().map(|entry| entry.key).collect()
    }

    /// Applies file-level overrides on top of this configuration.
    ///
    /// Parent and scene order are not overridable.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(renderer) = overrides.renderer {
            self.renderer = renderer;
        }
        if let Some(color) = overrides.background_color {
            self.background_color = color;
        }
        if let Some(pixel_art) = overrides.pixel_art {
            self.pixel_art = pixel_art;
        }
        if let Some(auto_round) = overrides.auto_round {
            self.auto_round = auto_round;
        }
        if let Some(fps) = overrides.fps {
            self.fps = fps;
        }
        if let Some(scale) = &overrides.scale {
            if let Some(mode) = scale.mode {
                self.scale.mode = mode;
            }
            if let Some(center) = scale.auto_center {
                self.scale.auto_center = center;
            }
        }
    }

    /// Checks the invariants the engine relies on.
    ///
    /// The container id is deliberately not checked here: whether it
    /// resolves is up to the host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }

        if self.scenes.is_empty() {
            return Err(ConfigError::NoScenes);
        }

        let mut seen = HashSet::with_capacity(self.scenes.len());
        for entry in &self.scenes {
            if !seen.insert(entry.key) {
                return Err(ConfigError::DuplicateScene(format!("{:?}", entry.key)));
            }
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::SceneContext;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    struct Idle;

    impl Scene<TestScene> for Idle {
        fn update(&mut self, _context: &mut SceneContext<TestScene>) {}
    }

    fn idle() -> Box<dyn Scene<TestScene>> {
        Box::new(Idle)
    }

    fn config() -> GameConfig<TestScene> {
        let mut config = GameConfig::new(320, 240);
        config.scenes = vec![
            SceneEntry::new(TestScene::A, idle),
            SceneEntry::new(TestScene::B, idle),
        ];
        config
    }

    #[test]
    fn with_parent_leaves_source_untouched() {
        let base = config();
        let bound = base.with_parent("root");

        assert_eq!(bound.parent, "root");
        assert_eq!(base.parent, "");
        assert_eq!(bound.scene_keys(), base.scene_keys());
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut config = config();
        config.height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { width: 320, height: 0 })
        ));
    }

    #[test]
    fn empty_scene_list_is_rejected() {
        let mut config = config();
        config.scenes.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoScenes)));
    }

    #[test]
    fn duplicate_scene_is_rejected() {
        let mut config = config();
        config.scenes.push(SceneEntry::new(TestScene::A, idle));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateScene(name)) if name == "A"));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let mut config = config();
        config.fps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFps)));
    }

    #[test]
    fn apply_overrides_only_touches_present_fields() {
        let mut config = config();
        let overrides = ConfigOverrides {
            width: Some(800),
            scale: Some(ScaleOverrides {
                mode: Some(ScaleMode::Envelop),
                auto_center: None,
            }),
            ..ConfigOverrides::default()
        };

        config.apply(&overrides);

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 240);
        assert_eq!(config.scale.mode, ScaleMode::Envelop);
        assert_eq!(config.scale.auto_center, CenterMode::NoCenter);
    }

    #[test]
    fn center_mode_axes() {
        assert!(CenterMode::CenterBoth.centers_x() && CenterMode::CenterBoth.centers_y());
        assert!(CenterMode::CenterHorizontally.centers_x());
        assert!(!CenterMode::CenterHorizontally.centers_y());
        assert!(!CenterMode::NoCenter.centers_x());
    }
}
