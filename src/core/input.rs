//=========================================================================
// Pointer Input
//=========================================================================
//
// The launcher's games are driven by a single pointer (mouse or touch).
//
//   Platform:  winit events ──► InputEvent (window coordinates)
//   Engine:    ScaleManager ──► game coordinates
//   Scenes:    PointerState (position, held, per-tick edges)
//
//=========================================================================

//=== InputEvent ==========================================================

/// Pointer events forwarded from the platform, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerDown,
    PointerUp,
}

//=== PointerState ========================================================

/// Pointer state visible to scenes, in game coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,

    /// Button or touch currently held.
    pub is_down: bool,

    /// Went down during the current tick.
    pub just_pressed: bool,

    /// Went up during the current tick.
    pub just_released: bool,
}

impl PointerState {
    /// Applies one event. Coordinates must already be in game space.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.x = x;
                self.y = y;
            }
            InputEvent::PointerDown => {
                if !self.is_down {
                    self.just_pressed = true;
                }
                self.is_down = true;
            }
            InputEvent::PointerUp => {
                if self.is_down {
                    self.just_released = true;
                }
                self.is_down = false;
            }
        }
    }

    /// Clears per-tick edges. Called after scenes have seen them.
    pub fn end_tick(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
