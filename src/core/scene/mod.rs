//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     ├─ order:  Vec<S>   (registration = boot order)
//     └─ stack:  Vec<S>
//
// Flow:
//   start() → push(order[0])
//   update() → collect_active_scenes() → Scene::update()
//   process_transitions() → Push / Remove / Replace / Clear
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::SceneContext;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in SceneManager and activated via scene stack.
/// Each scene keeps its own state between activations.
///
/// # Minimal Implementation
///
/// Only `update()` is required. Lifecycle hooks have default empty implementations:
///
/// ```rust
/// # use aetheric_launcher::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum MyScenes { Title, Play }
/// # impl SceneKey for MyScenes {}
/// struct Title;
///
/// impl Scene<MyScenes> for Title {
///     fn update(&mut self, context: &mut SceneContext<MyScenes>) {
///         if context.pointer.just_pressed {
///             context.start(MyScenes::Title, MyScenes::Play);
///         }
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when scene enters the active stack.
    fn on_enter(&mut self, _context: &mut SceneContext<S>) {}

    /// Called when scene exits the active stack.
    fn on_exit(&mut self, _context: &mut SceneContext<S>) {}

    /// Called every tick while scene is active on stack.
    fn update(&mut self, context: &mut SceneContext<S>);

    /// Whether scenes below this one should receive updates.
    ///
    /// Transparent scenes (e.g., pause overlays) let underlying scenes
    /// keep updating. Opaque scenes block updates to lower stack.
    fn is_transparent(&self) -> bool {
        false
    }
}
