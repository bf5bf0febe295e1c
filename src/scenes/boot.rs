//=========================================================================
// Boot Scene
//=========================================================================

use log::debug;

use super::GameScene;
use crate::core::context::SceneContext;
use crate::core::scene::Scene;

/// First scene: hands over to the preloader.
pub struct Boot;

impl Scene<GameScene> for Boot {
    fn on_enter(&mut self, _context: &mut SceneContext<GameScene>) {
        debug!(target: "scene", "Boot entered");
    }

    fn update(&mut self, context: &mut SceneContext<GameScene>) {
        context.start(GameScene::Boot, GameScene::Preloader);
    }
}
