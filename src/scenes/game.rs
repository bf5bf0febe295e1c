//=========================================================================
// Game Scene
//=========================================================================

use std::time::Duration;

use log::info;

use super::GameScene;
use crate::core::context::SceneContext;
use crate::core::scene::Scene;

/// The play scene. Ends on a pointer press.
#[derive(Debug, Default)]
pub struct Game {
    started_at: Duration,
}

impl Scene<GameScene> for Game {
    fn on_enter(&mut self, context: &mut SceneContext<GameScene>) {
        self.started_at = context.time.elapsed;
    }

    fn on_exit(&mut self, context: &mut SceneContext<GameScene>) {
        info!(
            target: "scene",
            "Round lasted {:?}",
            context.time.elapsed.saturating_sub(self.started_at)
        );
    }

    fn update(&mut self, context: &mut SceneContext<GameScene>) {
        if context.pointer.just_pressed {
            context.start(GameScene::Game, GameScene::GameOver);
        }
    }
}
