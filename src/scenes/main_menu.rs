//=========================================================================
// Main Menu Scene
//=========================================================================

use super::GameScene;
use crate::core::context::SceneContext;
use crate::core::scene::Scene;

/// Waits for a press, then starts the game.
pub struct MainMenu;

impl Scene<GameScene> for MainMenu {
    fn update(&mut self, context: &mut SceneContext<GameScene>) {
        if context.pointer.just_pressed {
            context.start(GameScene::MainMenu, GameScene::Game);
        }
    }
}
