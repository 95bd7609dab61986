// ============================================================================
// STATUS STATE - Single status banner slot with a write generation
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::StatusMessage;

#[derive(Clone, Default)]
pub struct StatusState {
    current: Rc<RefCell<Option<StatusMessage>>>,
    generation: Rc<Cell<u64>>,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<StatusMessage> {
        self.current.borrow().clone()
    }

    /// Returns the generation of this write, for `clear_if_current`
    pub fn set(&self, message: StatusMessage) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        *self.current.borrow_mut() = Some(message);
        generation
    }

    pub fn clear(&self) {
        self.generation.set(self.generation.get() + 1);
        *self.current.borrow_mut() = None;
    }

    /// Drops a standing error; a success banner survives the next action
    pub fn clear_error(&self) -> bool {
        let is_error = self.current.borrow().as_ref().is_some_and(StatusMessage::is_error);
        if is_error {
            self.clear();
        }
        is_error
    }

    /// Clears only if nothing was written since `generation`
    pub fn clear_if_current(&self, generation: u64) -> bool {
        if self.generation.get() != generation || self.current.borrow().is_none() {
            return false;
        }
        self.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_error_keeps_success() {
        let status = StatusState::new();
        status.set(StatusMessage::success("saved"));
        assert!(!status.clear_error());
        assert_eq!(status.get(), Some(StatusMessage::success("saved")));

        status.set(StatusMessage::error("boom"));
        assert!(status.clear_error());
        assert_eq!(status.get(), None);
    }

    #[test]
    fn stale_generation_does_not_clear_newer_message() {
        let status = StatusState::new();
        let first = status.set(StatusMessage::success("logged in"));
        let second = status.set(StatusMessage::success("saved"));

        assert!(!status.clear_if_current(first));
        assert_eq!(status.get(), Some(StatusMessage::success("saved")));
        assert!(status.clear_if_current(second));
        assert_eq!(status.get(), None);
    }
}
