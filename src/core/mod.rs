//=========================================================================
// Core Systems
//=========================================================================
//
// Engine-side building blocks used by the game runtime.
//
// - `scene`:           scene trait, stack-based manager, transitions
// - `context`:         data shared with scenes on every hook
// - `input`:           pointer events and state
// - `scale`:           canvas layout inside the container
// - `platform_bridge`: platform → logic thread contract
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod input;
pub mod scale;
pub mod scene;

pub(crate) mod platform_bridge;

//=== Public API ==========================================================

pub use context::{SceneContext, Time};
pub use input::{InputEvent, PointerState};
pub use scale::{DisplayRect, ScaleManager, Size};
pub use scene::{Scene, SceneKey, SceneManager, SceneTransition, TransitionQueue};
