//=========================================================================
// Transition Queue
//=========================================================================
//
// Scenes queue transitions here during updates. The scene manager
// drains this queue at tick boundaries.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SceneKey, SceneTransition};

//=== Transition Queue ====================================================

/// FIFO queue of pending scene transitions.
#[derive(Debug)]
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a scene transition to be processed at the next tick boundary.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn take_preserves_order_and_empties() {
        let mut queue = TransitionQueue::new();
        queue.push(SceneTransition::Push(TestScene::A));
        queue.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        assert_eq!(queue.len(), 2);

        let taken = queue.take();

        assert_eq!(
            taken,
            vec![
                SceneTransition::Push(TestScene::A),
                SceneTransition::Replace(TestScene::A, TestScene::B),
            ]
        );
        assert!(queue.is_empty());
    }
}
