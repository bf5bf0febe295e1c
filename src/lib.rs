//=========================================================================
// Aetheric Launcher — Library Root
//
// Boots the game: a fixed configuration (size, scaling, background,
// scene order) bound to a host container at launch time.
//
// Typical usage:
// ```no_run
// use aetheric_launcher::prelude::*;
//
// fn main() -> Result<(), EngineError> {
//     let mut host = DesktopHost::new(Size::new(390, 640));
//     start_game("game-container", &mut host)?.run()
// }
// ```
//
//=========================================================================

//=== Public Modules ======================================================
//
// `core` holds the engine-side systems (scenes, scaling, input). It is
// public so games can implement their own scenes against it.
//
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod launcher;
pub mod prelude;
pub mod scenes;

//=== Internal Modules ====================================================
//
// `platform` owns the winit event loop and is not part of the API.
//
mod engine;
mod platform;

//=== Public Exports ======================================================

pub use engine::Game;
pub use launcher::{base_config, game_config, start_game};
