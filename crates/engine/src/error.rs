//! Error types for locator configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::command::CommandKind;

/// Errors that can occur when loading locator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or mapping it onto the config schema.
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A command appears more than once in the priority list.
	#[error("command '{0}' listed more than once")]
	DuplicateCommand(CommandKind),

	/// The priority list leaves the locator without commands.
	#[error("no commands configured")]
	NoCommands,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
