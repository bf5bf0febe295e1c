//=========================================================================
// Game Over Scene
//=========================================================================

use super::GameScene;
use crate::core::context::SceneContext;
use crate::core::scene::Scene;

/// Last scene in boot order. A press returns to the main menu.
pub struct GameOver;

impl Scene<GameScene> for GameOver {
    fn update(&mut self, context: &mut SceneContext<GameScene>) {
        if context.pointer.just_pressed {
            context.start(GameScene::GameOver, GameScene::MainMenu);
        }
    }
}
