//! The two cooperating suggestion sources
//!
//! The parent source answers trigger-character requests with one entry per
//! catalog parent; accepting an entry runs the selection command, which
//! records the parent's key and re-opens the suggestion UI. The child source
//! answers that second pass by consuming the recorded key and emitting one
//! snippet suggestion per child item.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::SnippetCatalog;
use crate::state::SelectionSlot;
use crate::types::{
    CommandInvocation, CompletionResult, MarkupContent, Position, Range, Suggestion,
    SuggestionContext, SuggestionKind, TextEdit, TriggerKind,
};

/// Width the preview image is rendered at in suggestion documentation
const PREVIEW_IMAGE_WIDTH: u32 = 200;

/// A source of completion suggestions
///
/// The narrow capability interface both stages implement. Free of
/// host-specific types; the composition root adapts implementations to the
/// host's registration calls.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Produce suggestions for a single request
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` only for engine-internal failures; an
    /// empty list is the normal "nothing to offer" answer.
    async fn provide_suggestions(
        &self,
        ctx: &SuggestionContext,
    ) -> CompletionResult<Vec<Suggestion>>;
}

/// First-stage source: one entry per catalog parent
///
/// Only answers requests fired by the configured trigger character; any
/// other request gets an empty list, guarding against the host re-invoking
/// the source for unrelated keystrokes.
pub struct ParentSuggestionSource {
    catalog: Arc<SnippetCatalog>,
    trigger_character: char,
    command_id: String,
}

impl ParentSuggestionSource {
    /// Create a parent source over the given catalog
    ///
    /// # Arguments
    ///
    /// * `catalog` - The loaded snippet catalog
    /// * `trigger_character` - The character the host registers this source for
    /// * `command_id` - Identifier of the registered selection command
    pub fn new(
        catalog: Arc<SnippetCatalog>,
        trigger_character: char,
        command_id: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            trigger_character,
            command_id: command_id.into(),
        }
    }

    /// The edit that removes the just-typed trigger character
    ///
    /// The trigger character occupies the one-character span immediately
    /// before the cursor. At column 0 no such span exists and no edit is
    /// produced.
    fn trigger_span_edit(&self, position: Position) -> Option<TextEdit> {
        if position.character == 0 {
            return None;
        }
        let start = Position::new(position.line, position.character - 1);
        Some(TextEdit::delete(Range::new(start, position)))
    }
}

#[async_trait]
impl SuggestionSource for ParentSuggestionSource {
    async fn provide_suggestions(
        &self,
        ctx: &SuggestionContext,
    ) -> CompletionResult<Vec<Suggestion>> {
        if ctx.trigger != TriggerKind::Character(self.trigger_character) {
            return Ok(Vec::new());
        }

        debug!("parent pass: {} catalog entries", self.catalog.len());

        let suggestions = self
            .catalog
            .parents()
            .iter()
            .map(|parent| {
                let mut suggestion = Suggestion::new(
                    parent.label.clone(),
                    SuggestionKind::Text,
                    parent.label.clone(),
                )
                .with_command(CommandInvocation::new(
                    "Trigger child suggestions",
                    self.command_id.clone(),
                    vec![parent.command_key.clone()],
                ));
                if let Some(edit) = self.trigger_span_edit(ctx.position) {
                    suggestion = suggestion.with_additional_edit(edit);
                }
                suggestion
            })
            .collect();

        Ok(suggestions)
    }
}

/// Second-stage source: one snippet entry per child of the selected parent
///
/// Fires on every suggestion request for the language, gated by the
/// pending-selection slot rather than by a trigger character. Ordinary
/// typing-triggered requests find the slot unset and get an empty list.
pub struct ChildSuggestionSource {
    catalog: Arc<SnippetCatalog>,
    slot: SelectionSlot,
}

impl ChildSuggestionSource {
    /// Create a child source over the given catalog and selection slot
    pub fn new(catalog: Arc<SnippetCatalog>, slot: SelectionSlot) -> Self {
        Self { catalog, slot }
    }

    fn child_documentation(preview_image_url: &str) -> MarkupContent {
        MarkupContent::markdown(format!(
            "<img src=\"{}\" width=\"{}\" />",
            preview_image_url, PREVIEW_IMAGE_WIDTH
        ))
        .with_html()
    }
}

#[async_trait]
impl SuggestionSource for ChildSuggestionSource {
    async fn provide_suggestions(
        &self,
        _ctx: &SuggestionContext,
    ) -> CompletionResult<Vec<Suggestion>> {
        // One-shot consumption: the slot is cleared even when the key
        // matches nothing, so a stale selection never leaks into a later
        // unrelated request.
        let Some(key) = self.slot.take() else {
            return Ok(Vec::new());
        };

        let Some(parent) = self.catalog.find_by_label(&key) else {
            debug!(key = %key, "pending selection matched no catalog entry");
            return Ok(Vec::new());
        };

        debug!(parent = %parent.label, children = parent.children.len(), "child pass");

        let suggestions = parent
            .children
            .iter()
            .map(|child| {
                Suggestion::new(
                    format!("{}-{}", parent.label, child.instance_label),
                    SuggestionKind::Snippet,
                    child.demo_code.clone().unwrap_or_default(),
                )
                .with_detail(child.description.clone())
                .with_documentation(Self::child_documentation(&child.preview_image_url))
            })
            .collect();

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChildEntry, ParentEntry};

    fn catalog() -> Arc<SnippetCatalog> {
        Arc::new(SnippetCatalog::from_entries(vec![ParentEntry {
            label: "btn".to_string(),
            command_key: "btn".to_string(),
            children: vec![ChildEntry {
                instance_label: "primary".to_string(),
                description: "Primary button".to_string(),
                preview_image_url: "http://x/p.png".to_string(),
                demo_code: Some("Button(...)".to_string()),
            }],
        }]))
    }

    #[tokio::test]
    async fn test_parent_source_ignores_other_triggers() {
        let source = ParentSuggestionSource::new(catalog(), '@', "cascade.selectParent");
        let ctx = SuggestionContext::character(Position::new(0, 1), '.');
        assert!(source.provide_suggestions(&ctx).await.unwrap().is_empty());

        let ctx = SuggestionContext::invoked(Position::new(0, 1));
        assert!(source.provide_suggestions(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parent_source_deletes_trigger_span() {
        let source = ParentSuggestionSource::new(catalog(), '@', "cascade.selectParent");
        let ctx = SuggestionContext::character(Position::new(2, 5), '@');
        let suggestions = source.provide_suggestions(&ctx).await.unwrap();
        let edit = &suggestions[0].additional_edits[0];
        assert_eq!(edit.range.start, Position::new(2, 4));
        assert_eq!(edit.range.end, Position::new(2, 5));
        assert_eq!(edit.new_text, "");
    }

    #[tokio::test]
    async fn test_parent_source_no_edit_at_column_zero() {
        let source = ParentSuggestionSource::new(catalog(), '@', "cascade.selectParent");
        let ctx = SuggestionContext::character(Position::new(0, 0), '@');
        let suggestions = source.provide_suggestions(&ctx).await.unwrap();
        assert!(suggestions[0].additional_edits.is_empty());
    }

    #[tokio::test]
    async fn test_child_source_formats_documentation() {
        let slot = SelectionSlot::new();
        slot.set("btn");
        let source = ChildSuggestionSource::new(catalog(), slot);
        let ctx = SuggestionContext::invoked(Position::new(0, 0));
        let suggestions = source.provide_suggestions(&ctx).await.unwrap();
        let doc = suggestions[0].documentation.as_ref().unwrap();
        assert!(doc.supports_html);
        assert_eq!(doc.value, "<img src=\"http://x/p.png\" width=\"200\" />");
        assert_eq!(suggestions[0].detail.as_deref(), Some("Primary button"));
    }
}
