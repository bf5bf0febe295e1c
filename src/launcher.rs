//=========================================================================
// Launcher
//=========================================================================
//
// Fixed game configuration and the entry point that boots it.
//
//   base_config()            immutable defaults, built fresh per call
//        │
//   game_config(parent)      + container id (no validation)
//        │
//   start_game(parent, host) → Game::new() → running game
//
// Errors from the engine are returned untouched.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::config::{
    CenterMode, Color, GameConfig, RendererType, ScaleConfig, ScaleMode, SceneEntry,
};
use crate::core::scene::Scene;
use crate::engine::Game;
use crate::error::EngineError;
use crate::host::Host;
use crate::scenes::{self, GameScene};

//=== Defaults ============================================================

pub const GAME_WIDTH: u32 = 390;
pub const GAME_HEIGHT: u32 = 640;
pub const BACKGROUND_COLOR: Color = Color::rgb(0x02, 0x8a, 0xf8);

/// Container id the desktop binary uses when none is given.
pub const DEFAULT_PARENT: &str = "game-container";

/// Boot order. Starts with the boot scene, ends with game over.
const SCENES: [SceneEntry<GameScene>; 5] = [
    SceneEntry::new(GameScene::Boot, boot),
    SceneEntry::new(GameScene::Preloader, preloader),
    SceneEntry::new(GameScene::MainMenu, main_menu),
    SceneEntry::new(GameScene::Game, game),
    SceneEntry::new(GameScene::GameOver, game_over),
];

fn boot() -> Box<dyn Scene<GameScene>> {
    Box::new(scenes::Boot)
}

fn preloader() -> Box<dyn Scene<GameScene>> {
    Box::new(scenes::Preloader::default())
}

fn main_menu() -> Box<dyn Scene<GameScene>> {
    Box::new(scenes::MainMenu)
}

fn game() -> Box<dyn Scene<GameScene>> {
    Box::new(scenes::Game::default())
}

fn game_over() -> Box<dyn Scene<GameScene>> {
    Box::new(scenes::GameOver)
}

//=== Launcher API ========================================================

/// The fixed base configuration, bound to [`DEFAULT_PARENT`].
pub fn base_config() -> GameConfig<GameScene> {
    GameConfig {
        renderer: RendererType::Auto,
        width: GAME_WIDTH,
        height: GAME_HEIGHT,
        scale: ScaleConfig {
            mode: ScaleMode::Fit,
            auto_center: CenterMode::CenterBoth,
        },
        parent: DEFAULT_PARENT.to_string(),
        background_color: BACKGROUND_COLOR,
        scenes: SCENES.to_vec(),
        pixel_art: true,
        auto_round: true,
        fps: GameConfig::<GameScene>::DEFAULT_FPS,
    }
}

/// Base configuration bound to `parent`.
///
/// `parent` is taken as is, even when empty; whether it names a real
/// container is for the engine to find out.
pub fn game_config(parent: &str) -> GameConfig<GameScene> {
    GameConfig {
        parent: parent.to_string(),
        ..base_config()
    }
}

/// Boots the game inside the container `parent` of `host`.
///
/// # Errors
///
/// Whatever [`Game::new`] reports, unchanged.
pub fn start_game<H: Host + ?Sized>(parent: &str, host: &mut H) -> Result<Game<GameScene>, EngineError> {
    Game::new(game_config(parent), host)
}

//=========================================================================
// Unit Tests
//=========================================================================
