//! The post-acceptance selection command
//!
//! Accepting a parent suggestion runs this command with the parent's
//! command key. It records the key in the selection slot and asks the host
//! to re-open the suggestion UI, which drives the child pass. The slot
//! write completes before the host call, so the re-entrant completion
//! request always observes it.

use std::sync::Arc;

use cascade_completion::{CompletionResult, SelectionSlot};
use tracing::debug;

use crate::host::HostBridge;

/// Handler for the registered selection command
pub struct SelectionCommand {
    slot: SelectionSlot,
    host: Arc<dyn HostBridge>,
}

impl SelectionCommand {
    /// Create a command handler over the shared slot
    pub fn new(slot: SelectionSlot, host: Arc<dyn HostBridge>) -> Self {
        Self { slot, host }
    }

    /// Handle one command invocation
    ///
    /// Overwrites any unconsumed prior selection (last write wins), then
    /// requests a new suggestion pass at the cursor.
    ///
    /// # Errors
    ///
    /// Propagates host failures from the suggest-trigger call unchanged.
    pub async fn invoke(&self, key: &str) -> CompletionResult<()> {
        debug!(key = %key, "parent selected");
        self.slot.set(key);
        self.host.trigger_suggest().await
    }
}
