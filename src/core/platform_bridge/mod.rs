//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the logic thread.
//
// Components:
// - `interface`: event types crossing the thread boundary
// - `event_collector`: logic-side event draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
