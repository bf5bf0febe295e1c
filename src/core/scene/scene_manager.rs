//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys, so they keep their state between activations. Registration
// order is remembered: the first registered scene is the boot scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::context::SceneContext;

//=== Scene Transition ====================================================

/// Encapsulates scene stack operations.
///
/// Scenes hand control to each other by key through these transitions.
/// They are queued during updates and applied at the tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a scene to the top of the stack, running alongside the others.
    Push(K),

    /// Removes a specific scene from the stack by key.
    Remove(K),

    /// Stops the first scene and starts the second in its place.
    Replace(K, K),

    /// Clears all scenes from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The scene stack
/// determines which scenes are active, with the topmost scene receiving
/// input priority.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    order: Vec<S>,
    stack: Vec<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with an empty stack.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            order: Vec::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Returns `false` and keeps the existing scene if `key` is already
    /// registered.
    pub fn register_scene(&mut self, key: S, scene: Box<dyn Scene<S>>) -> bool {
        if self.scenes.contains_key(&key) {
            warn!(target: "scene", "Scene {:?} is already registered, ignoring duplicate", key);
            return false;
        }

        debug!(target: "scene", "Registered scene {:?} at position {}", key, self.order.len());
        self.scenes.insert(key, scene);
        self.order.push(key);
        true
    }

    /// Boots the manager by pushing the first registered scene.
    ///
    /// Does nothing if the stack is already populated or nothing is
    /// registered.
    pub fn start(&mut self, context: &mut SceneContext<S>) {
        if !self.stack.is_empty() {
            warn!(target: "scene", "Scene manager already started");
            return;
        }

        match self.order.first().copied() {
            Some(initial) => {
                debug!(target: "scene", "Starting scene manager with initial scene: {:?}", initial);
                self.push_internal(initial, context);
            }
            None => warn!(target: "scene", "No scenes registered, nothing to start"),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Registered keys in registration order.
    pub fn registered(&self) -> &[S] {
        &self.order
    }

    /// Current stack, bottom first.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    /// Scenes that receive updates this tick, bottom first.
    pub fn active_scenes(&self) -> Vec<S> {
        self.collect_active_scenes()
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates active scenes.
    ///
    /// Calls update on all transparent scenes and the topmost opaque scene.
    pub fn update(&mut self, context: &mut SceneContext<S>) {
        if self.stack.is_empty() {
            return;
        }

        let scenes_to_update = self.collect_active_scenes();

        for key in scenes_to_update {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Processes all queued scene transitions.
    ///
    /// Called at the tick boundary after scene updates. Transitions are
    /// processed in FIFO order. Transitions queued by lifecycle hooks
    /// while processing wait for the next boundary.
    pub fn process_transitions(&mut self, context: &mut SceneContext<S>) {
        let transitions = context.scene_transitions.take();

        for transition in transitions {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut SceneContext<S>) {
        if self.stack.contains(&key) {
            warn!(target: "scene", "Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!(target: "scene", "Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!(target: "scene", "Pushing scene {:?} onto stack", key);
        self.stack.push(key);
        scene.on_enter(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut SceneContext<S>) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!(target: "scene", "Removing scene {:?} from stack at position {}", key, pos);
            self.stack.remove(pos);

            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        } else {
            debug!(target: "scene", "Scene {:?} not found in stack, skipping removal", key);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut SceneContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!(target: "scene", "Scene {:?} not found in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!(target: "scene", "Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!(target: "scene", "Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!(target: "scene", "Replacing scene {:?} with {:?} at position {}", old_key, new_key, pos);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut SceneContext<S>) {
        debug!(target: "scene", "Clearing all scenes from stack");

        for key in std::mem::take(&mut self.stack) {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Iterate stack top-down, stop at first opaque scene
        for &key in self.stack.iter().rev() {
            active.insert(0, key);

            if let Some(scene) = self.scenes.get(&key) {
                if !scene.is_transparent() {
                    break;
                }
            }
        }

        active
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};


    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    type Log = Arc<Mutex<Vec<String>>>;

    /// Records lifecycle calls into a shared log.
    struct Recorder {
        name: &'static str,
        log: Log,
        transparent: bool,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log) -> Box<dyn Scene<TestScene>> {
            Box::new(Self { name, log: Arc::clone(log), transparent: false })
        }

        fn transparent(name: &'static str, log: &Log) -> Box<dyn Scene<TestScene>> {
            Box::new(Self { name, log: Arc::clone(log), transparent: true })
        }

        fn record(&self, what: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", self.name, what));
        }
    }

    impl Scene<TestScene> for Recorder {
        fn on_enter(&mut self, _context: &mut SceneContext<TestScene>) {
            self.record("enter");
        }

        fn on_exit(&mut self, _context: &mut SceneContext<TestScene>) {
            self.record("exit");
        }

        fn update(&mut self, _context: &mut SceneContext<TestScene>) {
            self.record("update");
        }

        fn is_transparent(&self) -> bool {
            self.transparent
        }
    }

    fn context() -> SceneContext<TestScene> {
        SceneContext::new(100, 100)
    }

    fn manager(log: &Log) -> SceneManager<TestScene> {
        let mut manager = SceneManager::new();
        manager.register_scene(TestScene::A, Recorder::boxed("A", log));
        manager.register_scene(TestScene::B, Recorder::boxed("B", log));
        manager.register_scene(TestScene::C, Recorder::transparent("C", log));
        manager
    }

    fn drain(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- Registration -----------------------------------------------------

    #[test]
    fn registration_order_is_kept() {
        let log = Log::default();
        let manager = manager(&log);
        assert_eq!(manager.registered(), &[TestScene::A, TestScene::B, TestScene::C]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let log = Log::default();
        let mut manager = manager(&log);

        assert!(!manager.register_scene(TestScene::A, Recorder::boxed("A2", &log)));
        assert_eq!(manager.registered().len(), 3);

        let mut ctx = context();
        manager.start(&mut ctx);
        assert_eq!(drain(&log), vec!["A:enter"]);
    }

    //--- Lifecycle --------------------------------------------------------

    #[test]
    fn start_pushes_first_registered_scene() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();

        manager.start(&mut ctx);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert_eq!(drain(&log), vec!["A:enter"]);
    }

    #[test]
    fn start_twice_is_ignored() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();

        manager.start(&mut ctx);
        manager.start(&mut ctx);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert_eq!(drain(&log), vec!["A:enter"]);
    }

    #[test]
    fn start_without_scenes_is_noop() {
        let mut manager: SceneManager<TestScene> = SceneManager::new();
        let mut ctx = context();
        manager.start(&mut ctx);
        assert!(manager.stack().is_empty());
    }

    #[test]
    fn replace_hands_control_to_next_scene() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        drain(&log);

        ctx.scene_transitions.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.stack(), &[TestScene::B]);
        assert_eq!(drain(&log), vec!["A:exit", "B:enter"]);
    }

    #[test]
    fn replace_with_unregistered_or_stacked_scene_is_skipped() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        ctx.scene_transitions.push(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut ctx);
        drain(&log);

        ctx.scene_transitions.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        ctx.scene_transitions.push(SceneTransition::Replace(TestScene::C, TestScene::A));
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.stack(), &[TestScene::A, TestScene::B]);
        assert!(drain(&log).is_empty());
    }

    #[test]
    fn push_of_stacked_scene_is_skipped() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        drain(&log);

        ctx.scene_transitions.push(SceneTransition::Push(TestScene::A));
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert!(drain(&log).is_empty());
    }

    #[test]
    fn remove_and_clear_call_on_exit() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        ctx.scene_transitions.push(SceneTransition::Push(TestScene::B));
        ctx.scene_transitions.push(SceneTransition::Push(TestScene::C));
        manager.process_transitions(&mut ctx);
        drain(&log);

        ctx.scene_transitions.push(SceneTransition::Remove(TestScene::B));
        manager.process_transitions(&mut ctx);
        assert_eq!(manager.stack(), &[TestScene::A, TestScene::C]);
        assert_eq!(drain(&log), vec!["B:exit"]);

        ctx.scene_transitions.push(SceneTransition::Clear);
        manager.process_transitions(&mut ctx);
        assert!(manager.stack().is_empty());
        assert_eq!(drain(&log), vec!["A:exit", "C:exit"]);
    }

    //--- Update -----------------------------------------------------------

    #[test]
    fn opaque_scene_blocks_lower_updates() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        ctx.scene_transitions.push(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut ctx);
        drain(&log);

        manager.update(&mut ctx);

        assert_eq!(manager.active_scenes(), vec![TestScene::B]);
        assert_eq!(drain(&log), vec!["B:update"]);
    }

    #[test]
    fn transparent_scene_lets_lower_scene_update() {
        let log = Log::default();
        let mut manager = manager(&log);
        let mut ctx = context();
        manager.start(&mut ctx);
        ctx.scene_transitions.push(SceneTransition::Push(TestScene::C));
        manager.process_transitions(&mut ctx);
        drain(&log);

        manager.update(&mut ctx);

        assert_eq!(manager.active_scenes(), vec![TestScene::A, TestScene::C]);
        assert_eq!(drain(&log), vec!["A:update", "C:update"]);
    }
}
