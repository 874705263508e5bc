//! Cascade completion engine
//!
//! A two-stage snippet completion engine driven by a declarative catalog.
//! A trigger character yields one suggestion per top-level catalog entry;
//! accepting one records the selection and re-opens the suggestion UI, and
//! the second pass yields one templated snippet suggestion per child item,
//! with a preview image and description attached as documentation.
//!
//! # Architecture
//!
//! 1. **Catalog**: the configuration file, parsed once at activation and
//!    held immutable for the process lifetime ([`SnippetCatalog`]).
//! 2. **Parent pass**: [`ParentSuggestionSource`] answers trigger-character
//!    requests and attaches the post-acceptance command to each entry.
//! 3. **Pending selection**: [`SelectionSlot`], the one-slot channel the
//!    command handler writes and the child pass consumes.
//! 4. **Child pass**: [`ChildSuggestionSource`] consumes the slot and emits
//!    snippet suggestions for the selected parent's children.
//!
//! The engine is host-agnostic: both passes implement [`SuggestionSource`],
//! and a composition root (see the `cascade-host` crate) adapts them to a
//! concrete editor's registration surface.
//!
//! # Example
//!
//! ```ignore
//! use cascade_completion::{
//!     CatalogFormat, ChildSuggestionSource, ParentSuggestionSource, SelectionSlot,
//!     SnippetCatalog, SuggestionSource,
//! };
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(SnippetCatalog::load_from_str(json, CatalogFormat::Json)?);
//! let slot = SelectionSlot::new();
//! let parents = ParentSuggestionSource::new(catalog.clone(), '@', "cascade.selectParent");
//! let children = ChildSuggestionSource::new(catalog, slot.clone());
//! ```

pub mod catalog;
pub mod sources;
pub mod state;
pub mod types;

pub use catalog::{load_error_message, resolve_catalog_path, CatalogFormat, SnippetCatalog};
pub use sources::{ChildSuggestionSource, ParentSuggestionSource, SuggestionSource};
pub use state::SelectionSlot;
pub use types::{
    ChildEntry, CommandInvocation, CompletionError, CompletionResult, MarkupContent, ParentEntry,
    Position, Range, Suggestion, SuggestionContext, SuggestionKind, TextEdit, TriggerKind,
};
