//! Ordered set of command variants and the total parse over them.

use crate::command::{Command, CommandKind, CommandSpec, Workspace};

/// Command variants in priority order.
///
/// When more than one grammar fully matches the input, the variant declared
/// first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
	order: Vec<CommandKind>,
}

impl Default for CommandRegistry {
	fn default() -> Self {
		Self::new(CommandKind::ALL)
	}
}

impl CommandRegistry {
	/// Creates a registry; repeated kinds keep their first position.
	pub fn new(order: impl IntoIterator<Item = CommandKind>) -> Self {
		let mut registry = Self { order: Vec::new() };
		for kind in order {
			registry.add(kind);
		}
		registry
	}

	/// Appends `kind` at the lowest priority. Returns false if already present.
	pub fn add(&mut self, kind: CommandKind) -> bool {
		if self.order.contains(&kind) {
			return false;
		}
		self.order.push(kind);
		true
	}

	/// Returns false if `kind` was not registered.
	pub fn remove(&mut self, kind: CommandKind) -> bool {
		let before = self.order.len();
		self.order.retain(|registered| *registered != kind);
		self.order.len() != before
	}

	pub fn kinds(&self) -> &[CommandKind] {
		&self.order
	}

	/// Specs of the variants available right now, in registry order.
	pub fn available_commands(&self, workspace: &dyn Workspace) -> Vec<&'static CommandSpec> {
		self.order
			.iter()
			.filter(|kind| kind.is_available(workspace))
			.map(|kind| kind.spec())
			.collect()
	}

	/// Parses `text` into the first available command whose grammar consumes
	/// all of the trimmed text.
	pub fn parse(&self, text: &str, workspace: &dyn Workspace) -> Option<Command> {
		let trimmed = text.trim();
		let command = self
			.order
			.iter()
			.filter(|kind| kind.is_available(workspace))
			.find_map(|kind| kind.parse(trimmed));
		tracing::trace!(input = trimmed, command = ?command.as_ref().map(Command::kind), "parse");
		command
	}
}
