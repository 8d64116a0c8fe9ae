//! Locator configuration loaded from TOML.
//!
//! ```toml
//! wildcards = true
//! root = "/path/to/project"
//! commands = ["goto_line", "open", "save_as"]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::CommandKind;
use crate::error::{ConfigError, Result};
use crate::paths;
use crate::registry::CommandRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorConfig {
	/// Expand `*`, `?`, and `[...]` in open paths.
	pub wildcards: bool,
	/// Base directory for relative paths; the process working directory
	/// when unset.
	pub root: Option<PathBuf>,
	/// Command priority order.
	pub commands: Vec<CommandKind>,
}

impl Default for LocatorConfig {
	fn default() -> Self {
		Self {
			wildcards: true,
			root: None,
			commands: CommandKind::ALL.to_vec(),
		}
	}
}

impl LocatorConfig {
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), ?config, "loaded locator config");
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.commands.is_empty() {
			return Err(ConfigError::NoCommands);
		}
		let mut seen = HashSet::new();
		for kind in &self.commands {
			if !seen.insert(*kind) {
				return Err(ConfigError::DuplicateCommand(*kind));
			}
		}
		Ok(())
	}

	pub fn registry(&self) -> CommandRegistry {
		CommandRegistry::new(self.commands.iter().copied())
	}

	/// Configured root made absolute, falling back to the current directory.
	pub fn base_dir(&self) -> PathBuf {
		match &self.root {
			Some(root) => paths::absolute_base(root),
			None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
		}
	}
}
