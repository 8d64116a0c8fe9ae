#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Locator bar engine.
//!
//! The locator is a single-line input that turns free-form text into one of a
//! small set of commands (jump to line, open a file, save as) while offering
//! filesystem-aware completion and history navigation as the user types.
//!
//! # Main Types
//!
//! - [`LocatorController`] - Owns the input and history, drives every event
//! - [`CommandRegistry`] - Total parser over the registered command variants
//! - [`PathCompletion`] - Directory listing, classification, and inline suffixes
//! - [`History`] - Submitted commands plus the in-progress slot
//!
//! # Event flow
//!
//! ```text
//! LocatorEvent
//! └── LocatorController::handle
//!     ├── CommandRegistry::parse(text)       // Command or help listing
//!     ├── Command::completer(text, cursor)   // PathCompletion when cursor sits after the path
//!     ├── Command::execute(workspace)        // on accept, only when ready
//!     └── LocatorView                        // text, cursor, ghost text, rows
//! ```
//!
//! Nothing is cached between events: every edit re-parses the text and
//! re-lists the directory under the cursor.

/// Command variants, grammar, and the editor collaborator.
pub mod command;
/// Path completion state and rows.
pub mod completion;
pub mod config;
/// Event handling and the rendered view.
pub mod controller;
pub mod error;
/// Filesystem collaborator.
pub mod fs;
pub mod history;
/// Path resolution for typed fragments.
pub mod paths;
pub mod registry;
#[cfg(test)]
mod test_support;

pub use command::{Command, CommandKind, CommandSpec, ExecContext, Workspace};
pub use completion::{CompletionRow, CompletionStatus, PathCompletion, RowKind};
pub use config::LocatorConfig;
pub use controller::{HelpRow, LocatorController, LocatorEvent, LocatorRows, LocatorView};
pub use error::{ConfigError, Result};
pub use fs::{Filesystem, LocalFs};
pub use history::History;
pub use registry::CommandRegistry;
