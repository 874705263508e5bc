//! Pending-selection state shared between the two suggestion sources
//!
//! Accepting a parent suggestion records its command key here; the child
//! source consumes it on its next request. The slot is a single-value
//! channel: a second selection before the child pass fires overwrites the
//! first, and consumption clears the slot whether or not the key matched a
//! catalog entry.

use std::sync::{Arc, Mutex};

/// Cloneable handle to the one-slot pending-selection state
///
/// Created by the composition root and injected into both the selection
/// command handler and the child suggestion source, so tests can wire
/// isolated instances instead of sharing process-wide state.
#[derive(Debug, Clone, Default)]
pub struct SelectionSlot {
    inner: Arc<Mutex<Option<String>>>,
}

impl SelectionSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, overwriting any unconsumed prior value
    pub fn set(&self, key: impl Into<String>) {
        let mut slot = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(key.into());
    }

    /// Take the pending selection, leaving the slot unset
    pub fn take(&self) -> Option<String> {
        let mut slot = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        slot.take()
    }

    /// Whether a selection is pending
    pub fn is_set(&self) -> bool {
        let slot = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_unset() {
        let slot = SelectionSlot::new();
        assert!(!slot.is_set());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_set_then_take() {
        let slot = SelectionSlot::new();
        slot.set("btn");
        assert!(slot.is_set());
        assert_eq!(slot.take().as_deref(), Some("btn"));
        assert!(!slot.is_set());
    }

    #[test]
    fn test_take_is_one_shot() {
        let slot = SelectionSlot::new();
        slot.set("btn");
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let slot = SelectionSlot::new();
        slot.set("first");
        slot.set("second");
        assert_eq!(slot.take().as_deref(), Some("second"));
    }

    #[test]
    fn test_clones_share_state() {
        let slot = SelectionSlot::new();
        let other = slot.clone();
        slot.set("btn");
        assert_eq!(other.take().as_deref(), Some("btn"));
        assert!(!slot.is_set());
    }
}
