//=========================================================================
// Input Buffer
//
// Collects pointer events between two frame boundaries.
//
// - Presses and releases are kept in order (one-shot events)
// - Movement is coalesced: only the latest position survives
//
// The buffer is drained on `RedrawRequested` and sent to the logic
// thread as one batch.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    last_move: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(16),
            last_move: None,
        }
    }

    /// Records the latest pointer position, replacing any earlier one.
    pub(crate) fn push_move(&mut self, x: f32, y: f32) {
        self.last_move = Some(InputEvent::PointerMoved { x, y });
    }

    /// Appends a press or release. Consecutive duplicates are dropped.
    ///
    /// A pending move is flushed first so the press lands where the
    /// pointer was at that moment.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if let Some(movement) = self.last_move.take() {
            self.discrete.push(movement);
        }

        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Returns all buffered events in order, or `None` when empty.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        let mut events = std::mem::take(&mut self.discrete);
        events.extend(self.last_move.take());

        if events.is_empty() {
            None
        } else {
            Some(events)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.drain(), None);
    }

    #[test]
    fn moves_are_coalesced() {
        let mut buffer = InputBuffer::new();
        buffer.push_move(1.0, 1.0);
        buffer.push_move(5.0, 6.0);

        assert_eq!(buffer.drain(), Some(vec![InputEvent::PointerMoved { x: 5.0, y: 6.0 }]));
        assert_eq!(buffer.drain(), None);
    }

    #[test]
    fn press_is_preceded_by_its_position() {
        let mut buffer = InputBuffer::new();
        buffer.push_move(3.0, 4.0);
        buffer.push_discrete(InputEvent::PointerDown);
        buffer.push_discrete(InputEvent::PointerDown);
        buffer.push_move(8.0, 9.0);
        buffer.push_discrete(InputEvent::PointerUp);

        assert_eq!(
            buffer.drain(),
            Some(vec![
                InputEvent::PointerMoved { x: 3.0, y: 4.0 },
                InputEvent::PointerDown,
                InputEvent::PointerMoved { x: 8.0, y: 9.0 },
                InputEvent::PointerUp,
            ])
        );
    }
}
