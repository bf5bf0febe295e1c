//=========================================================================
// Preloader Scene
//=========================================================================

use log::debug;

use super::GameScene;
use crate::core::context::SceneContext;
use crate::core::scene::Scene;

/// Hands over to the main menu once loading is done.
///
/// Nothing is queued for loading, so loading completes on the first
/// update.
#[derive(Debug, Default)]
pub struct Preloader {
    /// Loading progress in `0.0..=1.0`.
    progress: f32,
}

impl Scene<GameScene> for Preloader {
    fn on_enter(&mut self, _context: &mut SceneContext<GameScene>) {
        self.progress = 0.0;
    }

    fn update(&mut self, context: &mut SceneContext<GameScene>) {
        if self.progress < 1.0 {
            self.progress = 1.0;
            debug!(target: "scene", "Preloader complete");
            context.start(GameScene::Preloader, GameScene::MainMenu);
        }
    }
}
