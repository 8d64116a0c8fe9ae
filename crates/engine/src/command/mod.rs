//! Locator command variants.
//!
//! The set of commands is closed: [`CommandKind`] names each variant and
//! [`CommandSpec`] is its static capability row (help text and grammar).
//! Parsed [`Command`] values carry the instance data and dispatch readiness,
//! completion, and execution by matching on the variant.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::completion::{PathCompletion, glob};
use crate::fs::Filesystem;
use crate::paths;

mod grammar;

/// Editor operations the locator delegates to.
pub trait Workspace {
	fn open_file(&mut self, path: &Path, line: Option<usize>);

	fn save_as(&mut self, path: &Path);

	fn goto_line(&mut self, line: usize);

	/// Whether a document is open; gates [`CommandKind::SaveAs`].
	fn has_document(&self) -> bool {
		true
	}
}

/// Host state shared by completion, readiness, and execution.
#[derive(Clone, Copy)]
pub struct ExecContext<'a> {
	pub fs: &'a dyn Filesystem,
	/// Directory relative paths resolve against.
	pub base: &'a Path,
	/// Treat wildcards in open paths as glob patterns.
	pub wildcards: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
	GotoLine,
	Open,
	SaveAs,
}

/// Static capabilities of a command variant.
#[derive(Debug)]
pub struct CommandSpec {
	pub kind: CommandKind,
	/// Grammar summary shown in the help listing.
	pub signature: &'static str,
	pub description: &'static str,
	/// Full-match parser over trimmed text.
	pub parse: fn(&str) -> Option<Command>,
}

pub static COMMANDS: [CommandSpec; 3] = [
	CommandSpec {
		kind: CommandKind::GotoLine,
		signature: "[l] [LINE]",
		description: "Go to line",
		parse: grammar::goto_line,
	},
	CommandSpec {
		kind: CommandKind::Open,
		signature: "[f] PATH [LINE]",
		description: "Open file",
		parse: grammar::open,
	},
	CommandSpec {
		kind: CommandKind::SaveAs,
		signature: "s PATH",
		description: "Save file as",
		parse: grammar::save_as,
	},
];

impl CommandKind {
	pub const ALL: [CommandKind; 3] = [Self::GotoLine, Self::Open, Self::SaveAs];

	pub fn spec(self) -> &'static CommandSpec {
		match self {
			Self::GotoLine => &COMMANDS[0],
			Self::Open => &COMMANDS[1],
			Self::SaveAs => &COMMANDS[2],
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::GotoLine => "goto_line",
			Self::Open => "open",
			Self::SaveAs => "save_as",
		}
	}

	/// Whether the variant takes part in parsing and help right now.
	pub fn is_available(self, workspace: &dyn Workspace) -> bool {
		match self {
			Self::GotoLine | Self::Open => true,
			Self::SaveAs => workspace.has_document(),
		}
	}

	pub fn parse(self, text: &str) -> Option<Command> {
		(self.spec().parse)(text)
	}
}

impl fmt::Display for CommandKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A parsed command. Offsets are chars into the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	GotoLine {
		line: Option<usize>,
	},
	Open {
		path: String,
		path_offset: usize,
		line: Option<usize>,
	},
	SaveAs {
		path: String,
		path_offset: usize,
	},
}

impl Command {
	pub fn kind(&self) -> CommandKind {
		match self {
			Self::GotoLine { .. } => CommandKind::GotoLine,
			Self::Open { .. } => CommandKind::Open,
			Self::SaveAs { .. } => CommandKind::SaveAs,
		}
	}

	pub fn spec(&self) -> &'static CommandSpec {
		self.kind().spec()
	}

	/// Path token and its offset, for commands that take one.
	pub fn path(&self) -> Option<(&str, usize)> {
		match self {
			Self::GotoLine { .. } => None,
			Self::Open { path, path_offset, .. } | Self::SaveAs { path, path_offset } => Some((path.as_str(), *path_offset)),
		}
	}

	/// Path completion for `text` with the cursor at `cursor` (chars).
	///
	/// Only offered while the cursor sits right after the path token, or at
	/// the end of the input when no path has been typed yet.
	pub fn completer(&self, text: &str, cursor: usize, ctx: &ExecContext<'_>) -> Option<PathCompletion> {
		let (path, path_offset) = self.path()?;
		let lead = text.chars().take_while(|ch| ch.is_whitespace()).count();
		let path_end = lead + path_offset + path.chars().count();
		let at_input_end = cursor == text.chars().count();

		if cursor != path_end && !(path.is_empty() && at_input_end) {
			return None;
		}
		Some(PathCompletion::complete(ctx.fs, ctx.base, path))
	}

	/// Whether accepting the input may execute this command.
	pub fn is_ready(&self, ctx: &ExecContext<'_>) -> bool {
		match self {
			Self::GotoLine { line } => line.is_some(),
			Self::Open { path, .. } if uses_glob(path, ctx) => !glob::expand(ctx.fs, path, ctx.base).is_empty(),
			Self::Open { path, .. } => !path.is_empty() && ctx.fs.is_file(&resolve(path, ctx)),
			Self::SaveAs { path, .. } => !path.is_empty(),
		}
	}

	/// Hands the command to the workspace. Callers check [`Self::is_ready`]
	/// first.
	pub fn execute(&self, ctx: &ExecContext<'_>, workspace: &mut dyn Workspace) {
		match self {
			Self::GotoLine { line: Some(line) } => {
				tracing::info!(line, "goto line");
				workspace.goto_line(*line);
			}
			Self::GotoLine { line: None } => {}
			Self::Open { path, line, .. } => {
				let targets = if uses_glob(path, ctx) {
					glob::expand(ctx.fs, path, ctx.base)
				} else {
					vec![resolve(path, ctx)]
				};
				for target in targets {
					tracing::info!(path = %target.display(), ?line, "open file");
					workspace.open_file(&target, *line);
				}
			}
			Self::SaveAs { path, .. } => {
				let target = resolve(path, ctx);
				tracing::info!(path = %target.display(), "save as");
				workspace.save_as(&target);
			}
		}
	}
}

fn uses_glob(path: &str, ctx: &ExecContext<'_>) -> bool {
	ctx.wildcards && glob::is_pattern(path)
}

fn resolve(path: &str, ctx: &ExecContext<'_>) -> PathBuf {
	let home = ctx.fs.home_dir();
	paths::resolve_user_path(path, ctx.base, home.as_deref())
}

#[cfg(test)]
mod tests;
