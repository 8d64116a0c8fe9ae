use std::path::{Path, PathBuf};

use crate::command::{CommandSpec, ExecContext, Workspace};
use crate::completion::{CompletionRow, PathCompletion};
use crate::config::LocatorConfig;
use crate::fs::{Filesystem, LocalFs};
use crate::history::History;
use crate::registry::CommandRegistry;

/// Discrete input events delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorEvent {
	/// Text or cursor changed; the input is replaced wholesale.
	Edit { text: String, cursor: usize },
	/// Cursor moved without a text change (click, arrow keys).
	MoveCursor(usize),
	/// Commit the ghost text at the cursor (Tab).
	AcceptInline,
	/// Enter.
	Accept,
	/// Click on a completion row: complete with that entry, then accept.
	RowClicked(usize),
	HistoryPrevious,
	HistoryNext,
}

/// Input text with a cursor, in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RawInput {
	text: String,
	cursor: usize,
}

impl RawInput {
	fn with_cursor_at_end(text: String) -> Self {
		let cursor = text.chars().count();
		Self { text, cursor }
	}

	fn insert_at_cursor(&mut self, insert: &str) {
		let idx = self.text.char_indices().nth(self.cursor).map_or(self.text.len(), |(idx, _)| idx);
		self.text.insert_str(idx, insert);
		self.cursor += insert.chars().count();
	}
}

/// Signature and description of one command in the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpRow {
	pub signature: &'static str,
	pub description: &'static str,
}

impl From<&CommandSpec> for HelpRow {
	fn from(spec: &CommandSpec) -> Self {
		Self {
			signature: spec.signature,
			description: spec.description,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorRows {
	/// Command help: every available command when nothing parsed, or the
	/// parsed command alone when it offers no completion.
	Help(Vec<HelpRow>),
	Paths(Vec<CompletionRow>),
}

/// Everything the host renders after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorView {
	pub text: String,
	pub cursor: usize,
	/// Inline suggestion to show after the cursor; `None` clears it.
	pub ghost: Option<String>,
	pub rows: LocatorRows,
}

/// Drives parse, completion, execution, and history for one locator.
pub struct LocatorController<W, F = LocalFs> {
	registry: CommandRegistry,
	history: History,
	input: RawInput,
	base: PathBuf,
	wildcards: bool,
	fs: F,
	workspace: W,
}

impl<W: Workspace> LocatorController<W> {
	pub fn new(config: &LocatorConfig, workspace: W) -> Self {
		Self::with_filesystem(config, workspace, LocalFs)
	}
}

impl<W: Workspace, F: Filesystem> LocatorController<W, F> {
	pub fn with_filesystem(config: &LocatorConfig, workspace: W, fs: F) -> Self {
		Self {
			registry: config.registry(),
			history: History::new(),
			input: RawInput::default(),
			base: config.base_dir(),
			wildcards: config.wildcards,
			fs,
			workspace,
		}
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut CommandRegistry {
		&mut self.registry
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	pub fn base_dir(&self) -> &Path {
		&self.base
	}

	pub fn workspace(&self) -> &W {
		&self.workspace
	}

	pub fn workspace_mut(&mut self) -> &mut W {
		&mut self.workspace
	}

	pub fn handle(&mut self, event: LocatorEvent) -> LocatorView {
		tracing::trace!(?event, "locator event");
		match event {
			LocatorEvent::Edit { text, cursor } => {
				let cursor = cursor.min(text.chars().count());
				self.input = RawInput { text, cursor };
				self.view()
			}
			LocatorEvent::MoveCursor(cursor) => {
				self.input.cursor = cursor.min(self.input.text.chars().count());
				self.view()
			}
			LocatorEvent::AcceptInline => {
				if let Some(inline) = self.completion().and_then(|completion| completion.inline())
					&& !inline.is_empty()
				{
					self.input.insert_at_cursor(&inline);
				}
				self.view()
			}
			LocatorEvent::Accept => self.accept(),
			LocatorEvent::RowClicked(row) => self.click_row(row),
			LocatorEvent::HistoryPrevious => {
				if let Some(entry) = self.history.older(&self.input.text) {
					self.input = RawInput::with_cursor_at_end(entry.to_string());
				}
				self.view()
			}
			LocatorEvent::HistoryNext => {
				if let Some(entry) = self.history.newer() {
					self.input = RawInput::with_cursor_at_end(entry.to_string());
				}
				self.view()
			}
		}
	}

	/// Re-parses the current input and builds the rows and ghost text.
	pub fn view(&self) -> LocatorView {
		let ctx = self.exec_context();
		let RawInput { text, cursor } = &self.input;

		let (ghost, rows) = match self.registry.parse(text, &self.workspace) {
			Some(command) => match command.completer(text, *cursor, &ctx) {
				Some(completion) => (completion.inline().filter(|inline| !inline.is_empty()), LocatorRows::Paths(completion.rows())),
				None => (None, LocatorRows::Help(vec![HelpRow::from(command.spec())])),
			},
			None => {
				let help = self.registry.available_commands(&self.workspace).into_iter().map(HelpRow::from).collect();
				(None, LocatorRows::Help(help))
			}
		};

		LocatorView {
			text: text.clone(),
			cursor: *cursor,
			ghost,
			rows,
		}
	}

	fn exec_context(&self) -> ExecContext<'_> {
		ExecContext {
			fs: &self.fs,
			base: &self.base,
			wildcards: self.wildcards,
		}
	}

	fn completion(&self) -> Option<PathCompletion> {
		let command = self.registry.parse(&self.input.text, &self.workspace)?;
		command.completer(&self.input.text, self.input.cursor, &self.exec_context())
	}

	fn accept(&mut self) -> LocatorView {
		let text = self.input.text.trim().to_string();
		let Some(command) = self.registry.parse(&text, &self.workspace) else {
			tracing::debug!(input = text.as_str(), "accept without a command");
			return self.view();
		};

		let ctx = ExecContext {
			fs: &self.fs,
			base: &self.base,
			wildcards: self.wildcards,
		};
		if !command.is_ready(&ctx) {
			tracing::debug!(input = text.as_str(), kind = %command.kind(), "command not ready");
			return self.view();
		}

		command.execute(&ctx, &mut self.workspace);
		self.history.commit(&text);
		self.input = RawInput::default();
		self.view()
	}

	fn click_row(&mut self, row: usize) -> LocatorView {
		let Some(suffix) = self.completion().and_then(|completion| completion.inline_for_row(row)) else {
			return self.view();
		};
		self.input.insert_at_cursor(&suffix);
		self.accept()
	}
}
