//=========================================================================
// Platform Bridge Interface
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::scale::Size;

//=== PlatformEvent =======================================================

/// Events sent from platform to the logic thread.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Pointer events buffered during one frame, in window pixels.
    Inputs(Vec<InputEvent>),

    /// The container (window) changed size.
    Resized(Size),

    /// Window close requested.
    WindowClosed,
}
