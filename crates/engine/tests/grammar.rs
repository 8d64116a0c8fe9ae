//! Property tests for the command grammar.

use std::path::Path;

use locator_engine::{Command, CommandRegistry, Workspace};
use proptest::prelude::*;

struct NoEditor;

impl Workspace for NoEditor {
	fn open_file(&mut self, _path: &Path, _line: Option<usize>) {}

	fn save_as(&mut self, _path: &Path) {}

	fn goto_line(&mut self, _line: usize) {}
}

proptest! {
	#[test]
	fn parse_is_total_and_offsets_stay_in_bounds(text in "[lfs/0-9a-z~. \t]{0,16}") {
		let registry = CommandRegistry::default();
		let Some(command) = registry.parse(&text, &NoEditor) else {
			return Ok(());
		};

		let trimmed = text.trim();
		if let Some((path, offset)) = command.path() {
			let chars: Vec<char> = trimmed.chars().collect();
			prop_assert!(offset + path.chars().count() <= chars.len());
			let at_offset: String = chars[offset..offset + path.chars().count()].iter().collect();
			prop_assert_eq!(at_offset.as_str(), path);
			prop_assert!(!path.contains(char::is_whitespace));
		}
	}

	#[test]
	fn digits_always_parse_as_goto_line(line in 0usize..1_000_000) {
		let registry = CommandRegistry::default();
		prop_assert_eq!(registry.parse(&line.to_string(), &NoEditor), Some(Command::GotoLine { line: Some(line) }));
		prop_assert_eq!(registry.parse(&format!(" l {line} "), &NoEditor), Some(Command::GotoLine { line: Some(line) }));
	}
}
