//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_launcher::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime and launcher
pub use crate::engine::Game;
pub use crate::launcher::{base_config, game_config, start_game};

// Configuration
pub use crate::config::{
    CenterMode, Color, ConfigOverrides, GameConfig, RendererType, ScaleConfig, ScaleMode,
    SceneEntry,
};

// Hosts
pub use crate::host::{Canvas, DesktopHost, HeadlessHost, Host};

// Scene system
pub use crate::core::{InputEvent, PointerState, SceneContext, Size};
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};
pub use crate::scenes::GameScene;

// Errors
pub use crate::error::{ConfigError, EngineError};
