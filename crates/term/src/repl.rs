//! Line protocol between stdin and a [`LocatorController`].
//!
//! Each input line is one of:
//!
//! * `TEXT` - replace the input with `TEXT` and press Enter
//! * `?TEXT` - replace the input with `TEXT` and show completion only
//! * `:tab` - accept the ghost text
//! * `:up` / `:down` - walk the history
//! * `:row N` - click completion row `N`
//! * `:quit` - exit

use std::io::{BufRead, Write};
use std::path::Path;

use locator_engine::{CompletionRow, LocatorConfig, LocatorController, LocatorEvent, LocatorRows, LocatorView, RowKind, Workspace};

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	Submit(String),
	Preview(String),
	Tab,
	Up,
	Down,
	Row(usize),
	Quit,
}

impl Input {
	/// Parses a line; `None` for an unknown `:` control.
	pub fn parse(line: &str) -> Option<Self> {
		let line = line.trim_end_matches(['\n', '\r']);
		if let Some(text) = line.strip_prefix('?') {
			return Some(Self::Preview(text.to_string()));
		}
		let Some(control) = line.strip_prefix(':') else {
			return Some(Self::Submit(line.to_string()));
		};

		match control.split_whitespace().collect::<Vec<_>>().as_slice() {
			["tab"] => Some(Self::Tab),
			["up"] => Some(Self::Up),
			["down"] => Some(Self::Down),
			["row", row] => row.parse().ok().map(Self::Row),
			["quit" | "q"] => Some(Self::Quit),
			_ => None,
		}
	}

	fn events(self) -> Vec<LocatorEvent> {
		let edit = |text: String| {
			let cursor = text.chars().count();
			LocatorEvent::Edit { text, cursor }
		};
		match self {
			Self::Submit(text) => vec![edit(text), LocatorEvent::Accept],
			Self::Preview(text) => vec![edit(text)],
			Self::Tab => vec![LocatorEvent::AcceptInline],
			Self::Up => vec![LocatorEvent::HistoryPrevious],
			Self::Down => vec![LocatorEvent::HistoryNext],
			Self::Row(row) => vec![LocatorEvent::RowClicked(row)],
			Self::Quit => Vec::new(),
		}
	}
}

/// Workspace that reports every action as a printable line.
#[derive(Debug, Default)]
pub struct TermWorkspace {
	actions: Vec<String>,
	has_document: bool,
}

impl TermWorkspace {
	fn drain(&mut self) -> Vec<String> {
		std::mem::take(&mut self.actions)
	}
}

impl Workspace for TermWorkspace {
	fn open_file(&mut self, path: &Path, line: Option<usize>) {
		let action = match line {
			Some(line) => format!("open {}:{line}", path.display()),
			None => format!("open {}", path.display()),
		};
		self.actions.push(action);
		self.has_document = true;
	}

	fn save_as(&mut self, path: &Path) {
		self.actions.push(format!("save as {}", path.display()));
	}

	fn goto_line(&mut self, line: usize) {
		self.actions.push(format!("goto line {line}"));
	}

	fn has_document(&self) -> bool {
		self.has_document
	}
}

/// Reads lines from `input` until EOF or `:quit`, printing each resulting view.
pub fn run(config: &LocatorConfig, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
	let mut locator = LocatorController::new(config, TermWorkspace::default());
	write!(out, "{}", render(&locator.view()))?;

	for line in input.lines() {
		let line = line?;
		let Some(parsed) = Input::parse(&line) else {
			writeln!(out, "unknown control: {line}")?;
			continue;
		};
		if parsed == Input::Quit {
			break;
		}

		let mut view = None;
		for event in parsed.events() {
			view = Some(locator.handle(event));
		}
		for action in locator.workspace_mut().drain() {
			writeln!(out, "* {action}")?;
		}
		if let Some(view) = view {
			write!(out, "{}", render(&view))?;
		}
	}

	out.flush()?;
	Ok(())
}

/// Renders the input line and rows as plain text.
pub fn render(view: &LocatorView) -> String {
	let mut text = format!("> {}", view.text);
	if let Some(ghost) = &view.ghost {
		text.push_str(&format!("[{ghost}]"));
	}
	text.push('\n');

	match &view.rows {
		LocatorRows::Help(rows) => {
			for row in rows {
				text.push_str(&format!("  {:<18}{}\n", row.signature, row.description));
			}
		}
		LocatorRows::Paths(rows) => {
			for (idx, row) in rows.iter().enumerate() {
				text.push_str(&format!("{idx:>3} {}\n", render_row(row)));
			}
		}
	}
	text
}

fn render_row(row: &CompletionRow) -> String {
	match row.kind {
		RowKind::CurrentDir => format!("in {}", row.text),
		RowKind::Status => format!("({})", row.text),
		RowKind::Error => format!("error: {}", row.text),
		RowKind::Directory | RowKind::File => {
			let (typed, rest) = row.split_typed();
			if typed.is_empty() { rest.to_string() } else { format!("{typed}|{rest}") }
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::io::Cursor;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parse_lines() {
		assert_eq!(Input::parse("f a.txt\n"), Some(Input::Submit("f a.txt".to_string())));
		assert_eq!(Input::parse("?s o"), Some(Input::Preview("s o".to_string())));
		assert_eq!(Input::parse(":row 3"), Some(Input::Row(3)));
		assert_eq!(Input::parse(":row x"), None);
		assert_eq!(Input::parse(":tab"), Some(Input::Tab));
		assert_eq!(Input::parse(":q"), Some(Input::Quit));
		assert_eq!(Input::parse(":nope"), None);
		assert_eq!(Input::parse(""), Some(Input::Submit(String::new())));
	}

	#[test]
	fn session_prints_actions_and_views() {
		let temp = tempfile::tempdir().expect("create tempdir");
		fs::write(temp.path().join("readme.md"), "").expect("write fixture");
		let config = LocatorConfig {
			root: Some(temp.path().to_path_buf()),
			..LocatorConfig::default()
		};

		let input = Cursor::new("?f re\n:tab\n:row 1\n12\n:quit\nl 99\n");
		let mut out = Vec::new();
		run(&config, input, &mut out).expect("session runs");
		let out = String::from_utf8(out).expect("utf-8 output");

		assert!(out.contains("> f re[adme.md]\n"));
		assert!(out.contains("  1 re|adme.md\n"));
		assert!(out.contains("> f readme.md\n"));
		assert!(out.contains(&format!("* open {}\n", temp.path().join("readme.md").display())));
		assert!(out.contains("* goto line 12\n"));
		assert!(!out.contains("goto line 99"));
	}
}
