//! CLI schema and config resolution for the locator binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use locator_engine::LocatorConfig;

#[derive(Parser, Debug)]
#[command(name = "locator")]
#[command(about = "Command locator with filesystem-aware completion, driven line by line from stdin")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to <config dir>/locator/config.toml when present)
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Base directory for relative paths (overrides the config file)
	#[arg(long, value_name = "DIR")]
	pub root: Option<PathBuf>,

	/// Treat `*`, `?` and `[...]` in open paths literally
	#[arg(long)]
	pub no_wildcards: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Explicit `--config`, else the per-user config file if it exists.
	pub fn config_path(&self) -> Option<PathBuf> {
		self.config.clone().or_else(|| {
			dirs::config_dir()
				.map(|dir| dir.join("locator").join("config.toml"))
				.filter(|path| path.is_file())
		})
	}

	/// Loads the config file and applies command-line overrides.
	pub fn load_config(&self) -> anyhow::Result<LocatorConfig> {
		let mut config = match self.config_path() {
			Some(path) => LocatorConfig::load(&path).with_context(|| format!("failed to load config {}", path.display()))?,
			None => LocatorConfig::default(),
		};

		if let Some(root) = &self.root {
			config.root = Some(root.clone());
		}
		if self.no_wildcards {
			config.wildcards = false;
		}
		Ok(config)
	}
}
