//! Host integration layer for the cascade completion engine
//!
//! This crate owns everything that touches the editor host: the
//! [`HostBridge`] capability trait, the user-facing [`ExtensionSettings`],
//! the post-acceptance [`SelectionCommand`], and the fail-fast
//! [`activate`] composition root that wires the engine's suggestion
//! sources for registration.
//!
//! # Example
//!
//! ```ignore
//! use cascade_host::{activate, ExtensionSettings};
//! use std::sync::Arc;
//!
//! let host = Arc::new(MyEditorBridge::new());
//! let settings = ExtensionSettings::with_config_path("snippets.json");
//! let activation = activate(host, settings)?;
//!
//! // Register with the real host:
//! //   activation.parent_source() for the trigger character,
//! //   activation.child_source() unrestricted,
//! //   activation.command() under activation.command_id().
//! ```

pub mod activation;
pub mod command;
pub mod host;
pub mod logging;
pub mod settings;

pub use activation::{activate, Activation};
pub use command::SelectionCommand;
pub use host::HostBridge;
pub use logging::init_logging;
pub use settings::ExtensionSettings;
