//=========================================================================
// Game Scenes
//=========================================================================
//
// The scenes the launcher registers, in boot order:
//
//   Boot ─► Preloader ─► MainMenu ─► Game ─► GameOver
//                           ▲                   │
//                           └───────────────────┘
//
// Each scene only hands control to the next one by key. Boot and
// Preloader advance on their first update; the others wait for a
// pointer press.
//
//=========================================================================

//=== Module Declarations =================================================

mod boot;
mod game;
mod game_over;
mod main_menu;
mod preloader;

//=== Public API ==========================================================

pub use boot::Boot;
pub use game::Game;
pub use game_over::GameOver;
pub use main_menu::MainMenu;
pub use preloader::Preloader;

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneKey;

//=== GameScene ===========================================================

/// Keys of the launcher's scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Boot,
    Preloader,
    MainMenu,
    Game,
    GameOver,
}

impl SceneKey for GameScene {}

//=========================================================================
// Unit Tests
//=========================================================================
