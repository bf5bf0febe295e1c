//=========================================================================
// Scene Context
//=========================================================================
//
// Shared data handed to scenes on every lifecycle call:
// - scene_transitions: command queue for scene changes
// - pointer: input state in game coordinates
// - time: frame timing
// - game size
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::PointerState;
use crate::core::scene::{SceneKey, SceneTransition, TransitionQueue};

//=== Time ================================================================

/// Frame timing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    /// Time since the previous tick.
    pub delta: Duration,

    /// Time since the game booted.
    pub elapsed: Duration,

    /// Number of completed ticks.
    pub frame: u64,
}

impl Time {
    pub(crate) fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame += 1;
    }
}

//=== SceneContext ========================================================

/// Shared context data accessible to scenes.
pub struct SceneContext<S: SceneKey> {
    /// Transitions requested this tick, applied at the tick boundary.
    pub scene_transitions: TransitionQueue<S>,

    /// Pointer state in game coordinates.
    pub pointer: PointerState,

    pub time: Time,

    width: u32,
    height: u32,
}

impl<S: SceneKey> SceneContext<S> {
    /// Creates a new context with empty state.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene_transitions: TransitionQueue::new(),
            pointer: PointerState::default(),
            time: Time::default(),
            width,
            height,
        }
    }

    /// Stops `from` and starts `to` in its place at the tick boundary.
    pub fn start(&mut self, from: S, to: S) {
        self.scene_transitions.push(SceneTransition::Replace(from, to));
    }

    /// Runs `key` on top of the current scenes.
    pub fn launch(&mut self, key: S) {
        self.scene_transitions.push(SceneTransition::Push(key));
    }

    /// Stops `key`.
    pub fn stop(&mut self, key: S) {
        self.scene_transitions.push(SceneTransition::Remove(key));
    }

    /// Current game size in logical pixels.
    pub fn game_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn set_game_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
