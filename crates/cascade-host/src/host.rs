//! Host capability surface
//!
//! The engine never talks to a concrete editor API. Everything it needs
//! from the host is collected in [`HostBridge`]; an embedder implements it
//! over the real extension API, tests implement it with mocks.

use std::path::PathBuf;

use async_trait::async_trait;
use cascade_completion::CompletionResult;

/// The host primitives the extension consumes
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Absolute paths of the open workspace roots, in host order
    ///
    /// Only the first root is used; an empty list means no workspace is
    /// open and activation fails.
    fn workspace_roots(&self) -> Vec<PathBuf>;

    /// Show a user-visible error notification
    fn show_error_message(&self, message: &str);

    /// Re-open the suggestion UI at the current cursor position
    ///
    /// # Errors
    ///
    /// Host invocation failures propagate unchanged; the caller does not
    /// handle them specially.
    async fn trigger_suggest(&self) -> CompletionResult<()>;
}
