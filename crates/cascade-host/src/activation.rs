//! Composition root
//!
//! Wires the catalog, the selection slot, both suggestion sources and the
//! selection command, fail-fast: if the workspace is missing or the catalog
//! cannot be read, one error notification is shown and nothing is handed to
//! the host for registration.

use std::sync::Arc;

use cascade_completion::{
    load_error_message, resolve_catalog_path, ChildSuggestionSource, CompletionError,
    CompletionResult, ParentSuggestionSource, SelectionSlot, SnippetCatalog,
};
use tracing::{error, info};

use crate::command::SelectionCommand;
use crate::host::HostBridge;
use crate::settings::ExtensionSettings;

/// The wired extension pieces the embedder registers with the host
pub struct Activation {
    settings: ExtensionSettings,
    parent_source: Arc<ParentSuggestionSource>,
    child_source: Arc<ChildSuggestionSource>,
    command: Arc<SelectionCommand>,
}

impl Activation {
    /// Document language both sources are registered for
    pub fn language_id(&self) -> &str {
        &self.settings.language_id
    }

    /// Trigger character the parent source is registered with
    pub fn trigger_character(&self) -> char {
        self.settings.trigger_character
    }

    /// Identifier the selection command is registered under
    pub fn command_id(&self) -> &str {
        &self.settings.command_id
    }

    /// The trigger-character-bound suggestion source
    pub fn parent_source(&self) -> Arc<ParentSuggestionSource> {
        self.parent_source.clone()
    }

    /// The unrestricted suggestion source driving the child pass
    pub fn child_source(&self) -> Arc<ChildSuggestionSource> {
        self.child_source.clone()
    }

    /// The selection command handler
    pub fn command(&self) -> Arc<SelectionCommand> {
        self.command.clone()
    }
}

/// Activate the extension against a host
///
/// Resolves the catalog path against the first workspace root, loads the
/// catalog and wires the providers. All-or-nothing: on any failure a single
/// error notification is shown, the error is returned and no providers
/// exist to register.
///
/// # Errors
///
/// * [`CompletionError::WorkspaceNotFound`] when the host has no open root
/// * IO/parse errors when the catalog file is missing or malformed
pub fn activate(
    host: Arc<dyn HostBridge>,
    settings: ExtensionSettings,
) -> CompletionResult<Activation> {
    let catalog = load_catalog(host.as_ref(), &settings).map_err(|e| {
        error!(error = %e, "activation failed");
        host.show_error_message(load_error_message(&e));
        e
    })?;

    info!(
        entries = catalog.len(),
        language = %settings.language_id,
        "cascade completion activated"
    );

    let catalog = Arc::new(catalog);
    let slot = SelectionSlot::new();
    let parent_source = Arc::new(ParentSuggestionSource::new(
        catalog.clone(),
        settings.trigger_character,
        settings.command_id.clone(),
    ));
    let child_source = Arc::new(ChildSuggestionSource::new(catalog, slot.clone()));
    let command = Arc::new(SelectionCommand::new(slot, host));

    Ok(Activation {
        settings,
        parent_source,
        child_source,
        command,
    })
}

fn load_catalog(
    host: &dyn HostBridge,
    settings: &ExtensionSettings,
) -> CompletionResult<SnippetCatalog> {
    let roots = host.workspace_roots();
    let root = roots.first().ok_or(CompletionError::WorkspaceNotFound)?;
    let path = resolve_catalog_path(root, &settings.config_path);
    SnippetCatalog::load_from_path(&path)
}
