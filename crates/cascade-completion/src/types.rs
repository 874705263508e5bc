//! Core types and data structures for the completion engine
//!
//! This module defines the catalog data model loaded from the configuration
//! file, the suggestion model handed back to the host, the document
//! primitives used to describe edits, and the error type shared across the
//! workspace.

use serde::{Deserialize, Serialize};

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Completion-specific error type
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// No workspace root is open in the host
    #[error("workspace not found")]
    WorkspaceNotFound,

    /// Catalog configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error reported by the host while executing a request
    #[error("host error: {0}")]
    Host(String),
}

/// Position in a document (line and character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (0-based)
    pub character: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Range in a document (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

impl Range {
    /// Create a new range
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Text edit applied in addition to the suggestion's own insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Range to replace
    pub range: Range,
    /// New text
    pub new_text: String,
}

impl TextEdit {
    /// Create an edit that replaces `range` with `new_text`
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Create an edit that deletes `range`
    pub fn delete(range: Range) -> Self {
        Self::replace(range, "")
    }
}

/// Markup content attached to a suggestion as documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    /// Markdown source
    pub value: String,
    /// Whether the host may render raw HTML embedded in the markdown
    pub supports_html: bool,
}

impl MarkupContent {
    /// Create markdown content
    pub fn markdown(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            supports_html: false,
        }
    }

    /// Allow raw HTML in the rendered markdown
    pub fn with_html(mut self) -> Self {
        self.supports_html = true;
        self
    }
}

/// Command the host runs after a suggestion is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// Human-readable title
    pub title: String,
    /// Command identifier registered with the host
    pub command: String,
    /// Arguments passed to the command handler
    pub arguments: Vec<String>,
}

impl CommandInvocation {
    /// Create a new command invocation
    pub fn new(
        title: impl Into<String>,
        command: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            arguments,
        }
    }
}

/// Kind of a suggestion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Plain text entry
    Text,
    /// Snippet template entry
    Snippet,
}

/// A single completion candidate shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display label
    pub label: String,
    /// Entry kind
    pub kind: SuggestionKind,
    /// Text inserted on acceptance; may contain snippet tab-stop syntax
    pub insert_text: String,
    /// Secondary detail line
    pub detail: Option<String>,
    /// Documentation shown alongside the entry
    pub documentation: Option<MarkupContent>,
    /// Command the host runs after acceptance
    pub command: Option<CommandInvocation>,
    /// Extra edits applied together with the insertion
    pub additional_edits: Vec<TextEdit>,
}

impl Suggestion {
    /// Create a new suggestion with the given label, kind and insert text
    pub fn new(label: impl Into<String>, kind: SuggestionKind, insert_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            insert_text: insert_text.into(),
            detail: None,
            documentation: None,
            command: None,
            additional_edits: Vec::new(),
        }
    }

    /// Set the detail line
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation
    pub fn with_documentation(mut self, documentation: MarkupContent) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Set the post-acceptance command
    pub fn with_command(mut self, command: CommandInvocation) -> Self {
        self.command = Some(command);
        self
    }

    /// Add an additional text edit
    pub fn with_additional_edit(mut self, edit: TextEdit) -> Self {
        self.additional_edits.push(edit);
        self
    }
}

/// How a suggestion request was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Requested explicitly (user keybinding, or re-opened programmatically)
    Invoked,
    /// Fired because the user typed a trigger character
    Character(char),
}

/// Context of a single suggestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionContext {
    /// Cursor position the request was issued at
    pub position: Position,
    /// What triggered the request
    pub trigger: TriggerKind,
}

impl SuggestionContext {
    /// Create a context for a trigger-character request
    pub fn character(position: Position, character: char) -> Self {
        Self {
            position,
            trigger: TriggerKind::Character(character),
        }
    }

    /// Create a context for an explicit or programmatic request
    pub fn invoked(position: Position) -> Self {
        Self {
            position,
            trigger: TriggerKind::Invoked,
        }
    }
}

/// A child item of a catalog entry, insertable as a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildEntry {
    /// Display name of this instance
    pub instance_label: String,
    /// Short description shown as the suggestion detail
    pub description: String,
    /// Preview image embedded in the suggestion documentation
    pub preview_image_url: String,
    /// Snippet template inserted on acceptance; empty insertion when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_code: Option<String>,
}

/// A top-level catalog entry grouping related snippet instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentEntry {
    /// Display label, also the lookup key for the child pass
    pub label: String,
    /// Opaque key handed to the post-acceptance command
    pub command_key: String,
    /// Child items in catalog order
    pub children: Vec<ChildEntry>,
}
