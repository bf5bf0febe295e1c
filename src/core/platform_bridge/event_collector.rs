//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → inputs + resize → TickControl
//
// Bounded draining prevents a flooded channel from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;
use crate::core::scale::Size;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events for one tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    inputs: Vec<InputEvent>,
    resized: Option<Size>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            inputs: Vec::with_capacity(16),
            resized: None,
        }
    }

    /// Drains pending platform events.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.inputs.clear();
        self.resized = None;

        let mut drained = 0;
        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Takes the pointer events collected this frame.
    pub(crate) fn take_inputs(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }

    /// Latest container size reported this frame, if any.
    pub(crate) fn resized(&self) -> Option<Size> {
        self.resized
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(batch) => {
                self.inputs.extend(batch);
                TickControl::Continue
            }
            PlatformEvent::Resized(size) => {
                self.resized = Some(size);
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.take_inputs().is_empty());
        assert_eq!(collector.resized(), None);
    }

    #[test]
    fn collect_aggregates_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![InputEvent::PointerMoved { x: 1.0, y: 2.0 }]))
            .unwrap();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::PointerDown])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.take_inputs(),
            vec![InputEvent::PointerMoved { x: 1.0, y: 2.0 }, InputEvent::PointerDown]
        );
    }

    #[test]
    fn latest_resize_wins() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Resized(Size::new(100, 100))).unwrap();
        tx.send(PlatformEvent::Resized(Size::new(200, 300))).unwrap();
        collector.collect_frame();

        assert_eq!(collector.resized(), Some(Size::new(200, 300)));

        collector.collect_frame();
        assert_eq!(collector.resized(), None);
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..150 {
            tx.send(PlatformEvent::Inputs(vec![InputEvent::PointerDown])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.take_inputs().len(), 100);

        collector.collect_frame();
        assert_eq!(collector.take_inputs().len(), 50);
    }
}
