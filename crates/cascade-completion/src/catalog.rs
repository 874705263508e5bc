//! Snippet catalog loading and lookup
//!
//! The catalog is read once at activation time and held in memory for the
//! process lifetime. File order is user-significant: it determines the order
//! suggestions are presented in, so the catalog never reorders entries.

use std::path::{Path, PathBuf};

use crate::types::{CompletionError, CompletionResult, ParentEntry};

/// Catalog file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON, the documented schema
    Json,
    /// YAML, accepted as an alternative encoding of the same schema
    Yaml,
}

/// In-memory snippet catalog, immutable after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCatalog {
    entries: Vec<ParentEntry>,
}

impl SnippetCatalog {
    /// Build a catalog from already-parsed entries
    pub fn from_entries(entries: Vec<ParentEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a file, picking the format from the extension
    ///
    /// `.yaml`/`.yml` files are parsed as YAML; everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse. The
    /// caller treats any failure as fatal to activation.
    pub fn load_from_path(path: &Path) -> CompletionResult<Self> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        };
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Parse a catalog from a string in the given format
    pub fn load_from_str(content: &str, format: CatalogFormat) -> CompletionResult<Self> {
        let entries: Vec<ParentEntry> = match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(Self::from_entries(entries))
    }

    /// Parent entries in catalog order
    pub fn parents(&self) -> &[ParentEntry] {
        &self.entries
    }

    /// Find a parent entry by label
    ///
    /// Linear scan, first match wins. Duplicate labels are not detected;
    /// later entries with the same label are shadowed.
    pub fn find_by_label(&self, label: &str) -> Option<&ParentEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Number of parent entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the configured relative catalog path against a workspace root
pub fn resolve_catalog_path(workspace_root: &Path, relative: &str) -> PathBuf {
    workspace_root.join(relative)
}

/// Map a catalog load failure onto the single user-visible activation message
pub fn load_error_message(error: &CompletionError) -> &'static str {
    match error {
        CompletionError::WorkspaceNotFound => "workspace not found",
        _ => "failed to read configuration file",
    }
}
