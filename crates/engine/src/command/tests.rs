use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use super::{Command, CommandKind, ExecContext};
use crate::fs::LocalFs;
use crate::test_support::{RecordingWorkspace, WorkspaceCall};

fn ctx(base: &Path, wildcards: bool) -> ExecContext<'_> {
	ExecContext {
		fs: &LocalFs,
		base,
		wildcards,
	}
}

fn open(path: &str, path_offset: usize, line: Option<usize>) -> Command {
	Command::Open {
		path: path.to_string(),
		path_offset,
		line,
	}
}

#[test]
fn goto_line_accepts_keyword_and_bare_digits() {
	assert_eq!(CommandKind::GotoLine.parse("l 42"), Some(Command::GotoLine { line: Some(42) }));
	assert_eq!(CommandKind::GotoLine.parse("l   7"), Some(Command::GotoLine { line: Some(7) }));
	assert_eq!(CommandKind::GotoLine.parse("42"), Some(Command::GotoLine { line: Some(42) }));
	assert_eq!(CommandKind::GotoLine.parse("l"), Some(Command::GotoLine { line: None }));
}

#[test]
fn goto_line_rejects_partial_matches() {
	assert_eq!(CommandKind::GotoLine.parse("l42"), None);
	assert_eq!(CommandKind::GotoLine.parse("l 4x"), None);
	assert_eq!(CommandKind::GotoLine.parse("42 43"), None);
	assert_eq!(CommandKind::GotoLine.parse(""), None);
	assert_eq!(CommandKind::GotoLine.parse("99999999999999999999999999"), None);
}

#[test]
fn open_keyword_form_records_path_offset() {
	assert_eq!(CommandKind::Open.parse("f /etc/hosts"), Some(open("/etc/hosts", 2, None)));
	assert_eq!(CommandKind::Open.parse("f   src/lib.rs 12"), Some(open("src/lib.rs", 4, Some(12))));
	assert_eq!(CommandKind::Open.parse("f"), Some(open("", 1, None)));
	assert_eq!(CommandKind::Open.parse("f 10"), Some(open("10", 2, None)));
}

#[test]
fn open_shorthand_forms() {
	assert_eq!(CommandKind::Open.parse("/etc/hosts 10"), Some(open("/etc/hosts", 0, Some(10))));
	assert_eq!(CommandKind::Open.parse("/"), Some(open("/", 0, None)));
	assert_eq!(CommandKind::Open.parse("ma"), Some(open("ma", 0, None)));
	assert_eq!(CommandKind::Open.parse("foo"), Some(open("foo", 0, None)));
}

#[test]
fn open_rejects_single_chars_and_trailing_words() {
	assert_eq!(CommandKind::Open.parse("m"), None);
	assert_eq!(CommandKind::Open.parse(""), None);
	assert_eq!(CommandKind::Open.parse("f a b"), None);
	assert_eq!(CommandKind::Open.parse("a.txt 1x"), None);
}

#[test]
fn save_as_grammar() {
	assert_eq!(
		CommandKind::SaveAs.parse("s /tmp/out.txt"),
		Some(Command::SaveAs {
			path: "/tmp/out.txt".to_string(),
			path_offset: 2,
		})
	);
	assert_eq!(
		CommandKind::SaveAs.parse("s"),
		Some(Command::SaveAs {
			path: String::new(),
			path_offset: 1,
		})
	);
	assert_eq!(CommandKind::SaveAs.parse("save"), None);
	assert_eq!(CommandKind::SaveAs.parse("s a 10"), None);
}

#[test]
fn offsets_count_chars_not_bytes() {
	assert_eq!(CommandKind::Open.parse("f\u{3000}ü.txt"), Some(open("ü.txt", 2, None)));
}

#[test]
fn goto_line_readiness_and_execution() {
	let base = Path::new("/");
	let mut workspace = RecordingWorkspace::default();

	assert!(!Command::GotoLine { line: None }.is_ready(&ctx(base, true)));

	let command = Command::GotoLine { line: Some(42) };
	assert!(command.is_ready(&ctx(base, true)));
	assert!(command.completer("42", 2, &ctx(base, true)).is_none());
	command.execute(&ctx(base, true), &mut workspace);
	assert_eq!(workspace.calls, [WorkspaceCall::GotoLine(42)]);
}

#[test]
fn plain_open_requires_existing_regular_file() {
	let temp = tempfile::tempdir().expect("create tempdir");
	fs::write(temp.path().join("main.rs"), "fn main() {}").expect("write file");
	fs::create_dir(temp.path().join("src")).expect("create dir");
	let ctx = ctx(temp.path(), false);

	assert!(open("main.rs", 0, None).is_ready(&ctx));
	assert!(!open("src", 0, None).is_ready(&ctx));
	assert!(!open("missing.rs", 0, None).is_ready(&ctx));
	assert!(!open("", 1, None).is_ready(&ctx));
	assert!(!open("*.rs", 0, None).is_ready(&ctx));

	let mut workspace = RecordingWorkspace::default();
	open("./src/../main.rs", 0, Some(3)).execute(&ctx, &mut workspace);
	assert_eq!(workspace.calls, [WorkspaceCall::Open(temp.path().join("main.rs"), Some(3))]);
}

#[test]
fn glob_open_executes_every_match() {
	let temp = tempfile::tempdir().expect("create tempdir");
	fs::write(temp.path().join("a.rs"), "").expect("write a");
	fs::write(temp.path().join("b.rs"), "").expect("write b");
	fs::write(temp.path().join("c.md"), "").expect("write c");
	let ctx = ctx(temp.path(), true);

	let command = open("*.rs", 0, Some(1));
	assert!(command.is_ready(&ctx));
	assert!(!open("*.txt", 0, None).is_ready(&ctx));

	let mut workspace = RecordingWorkspace::default();
	command.execute(&ctx, &mut workspace);
	assert_eq!(
		workspace.calls,
		[
			WorkspaceCall::Open(temp.path().join("a.rs"), Some(1)),
			WorkspaceCall::Open(temp.path().join("b.rs"), Some(1)),
		]
	);
}

#[test]
fn glob_open_counts_directory_matches() {
	let temp = tempfile::tempdir().expect("create tempdir");
	fs::create_dir(temp.path().join("src_a")).expect("create src_a");
	fs::create_dir(temp.path().join("src_b")).expect("create src_b");
	let ctx = ctx(temp.path(), true);

	let command = open("src_*", 0, None);
	assert!(command.is_ready(&ctx));

	let mut workspace = RecordingWorkspace::default();
	command.execute(&ctx, &mut workspace);
	assert_eq!(
		workspace.calls,
		[
			WorkspaceCall::Open(temp.path().join("src_a"), None),
			WorkspaceCall::Open(temp.path().join("src_b"), None),
		]
	);
}

#[test]
fn save_as_is_ready_for_any_non_empty_path() {
	let temp = tempfile::tempdir().expect("create tempdir");
	let ctx = ctx(temp.path(), true);
	let command = CommandKind::SaveAs.parse("s out/new.txt").expect("save as parses");

	assert!(command.is_ready(&ctx));
	assert!(!CommandKind::SaveAs.parse("s").expect("bare save as parses").is_ready(&ctx));

	let mut workspace = RecordingWorkspace::default();
	command.execute(&ctx, &mut workspace);
	assert_eq!(workspace.calls, [WorkspaceCall::SaveAs(temp.path().join("out/new.txt"))]);
}

#[test]
fn save_as_availability_follows_open_document() {
	let mut workspace = RecordingWorkspace::default();
	assert!(CommandKind::SaveAs.is_available(&workspace));
	workspace.has_document = false;
	assert!(!CommandKind::SaveAs.is_available(&workspace));
	assert!(CommandKind::Open.is_available(&workspace));
}

#[test]
fn completer_only_when_cursor_follows_path() {
	let temp = tempfile::tempdir().expect("create tempdir");
	fs::write(temp.path().join("notes.md"), "").expect("write file");
	let ctx = ctx(temp.path(), true);

	let text = "f no 12";
	let command = CommandKind::Open.parse(text).expect("open parses");
	let completion = command.completer(text, 4, &ctx).expect("cursor after path");
	assert_eq!(completion.inline().as_deref(), Some("tes.md"));
	assert!(command.completer(text, 7, &ctx).is_none());
	assert!(command.completer(text, 3, &ctx).is_none());
}

#[test]
fn completer_accounts_for_leading_whitespace() {
	let temp = tempfile::tempdir().expect("create tempdir");
	let ctx = ctx(temp.path(), true);

	let text = "  f ab";
	let command = CommandKind::Open.parse(text.trim()).expect("open parses");
	assert!(command.completer(text, 6, &ctx).is_some());
	assert!(command.completer(text, 4, &ctx).is_none());
}

#[test]
fn empty_path_completes_at_end_of_input() {
	let temp = tempfile::tempdir().expect("create tempdir");
	fs::write(temp.path().join("only.txt"), "").expect("write file");
	let ctx = ctx(temp.path(), true);

	let text = "f ";
	let command = CommandKind::Open.parse(text.trim()).expect("open parses");
	let completion = command.completer(text, 2, &ctx).expect("cursor at input end");
	assert_eq!(completion.files(), ["only.txt"]);
	assert_eq!(completion.inline().as_deref(), Some("only.txt"));
}
