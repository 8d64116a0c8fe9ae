//! Filesystem-aware completion for a typed path fragment.
//!
//! [`PathCompletion::complete`] lists the directory under the typed text,
//! keeps the entries that extend the typed segment, and classifies them into
//! directories and files. Listing failures become an [`CompletionStatus::Error`]
//! row instead of an error value, so a bad directory never interrupts editing.

use std::path::Path;

use crate::fs::Filesystem;
use crate::paths::ResolvedPath;

/// Shell-style wildcard expansion used by the glob-aware open command.
pub mod glob;

/// Outcome of listing the directory under the typed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
	/// At least one entry matches the typed segment.
	Ok,
	/// The directory is missing or could not be listed.
	Error(String),
	/// The directory has no entries at all.
	Empty,
	/// Entries exist but none extends the typed segment.
	NoMatch,
}

impl CompletionStatus {
	/// Text shown in the status or error row.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Ok => None,
			Self::Error(message) => Some(message),
			Self::Empty => Some("Empty directory"),
			Self::NoMatch => Some("No matching files"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
	CurrentDir,
	Status,
	Error,
	Directory,
	File,
}

/// One renderable completion line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
	pub kind: RowKind,
	pub text: String,
	/// Chars of `text` already typed by the user; zero for non-entry rows.
	pub typed_len: usize,
}

impl CompletionRow {
	fn plain(kind: RowKind, text: impl Into<String>) -> Self {
		Self {
			kind,
			text: text.into(),
			typed_len: 0,
		}
	}

	/// Only directory and file rows can be clicked to complete.
	pub fn is_selectable(&self) -> bool {
		matches!(self.kind, RowKind::Directory | RowKind::File)
	}

	/// Splits the row text into the typed part and the remainder.
	pub fn split_typed(&self) -> (&str, &str) {
		let idx = self.text.char_indices().nth(self.typed_len).map_or(self.text.len(), |(idx, _)| idx);
		self.text.split_at(idx)
	}
}

/// Listing of the directory under a typed path fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCompletion {
	resolved: ResolvedPath,
	status: CompletionStatus,
	directories: Vec<String>,
	files: Vec<String>,
}

impl PathCompletion {
	/// Lists and classifies the entries that extend `text`.
	///
	/// Hidden entries are skipped unless the typed segment itself starts with
	/// a dot. Directories carry a trailing `/`; both groups are sorted
	/// byte-wise.
	pub fn complete(fs: &dyn Filesystem, base: &Path, text: &str) -> Self {
		let home = fs.home_dir();
		let resolved = ResolvedPath::resolve(text, base, home.as_deref());
		let mut completion = Self {
			resolved,
			status: CompletionStatus::Ok,
			directories: Vec::new(),
			files: Vec::new(),
		};

		let dir = completion.resolved.dir.clone();
		if !fs.is_dir(&dir) {
			completion.status = CompletionStatus::Error(format!("No directory {}", completion.resolved.dir_label()));
			return completion;
		}

		let names = match fs.read_dir(&dir) {
			Ok(names) => names,
			Err(error) => {
				tracing::warn!(dir = %dir.display(), %error, "directory listing failed");
				completion.status = CompletionStatus::Error(error.to_string());
				return completion;
			}
		};

		if names.is_empty() {
			completion.status = CompletionStatus::Empty;
			return completion;
		}

		let basename = completion.resolved.basename.as_str();
		let show_hidden = basename.starts_with('.');
		for name in names {
			if !name.starts_with(basename) || (!show_hidden && name.starts_with('.')) {
				continue;
			}
			if fs.is_dir(&dir.join(&name)) {
				completion.directories.push(format!("{name}/"));
			} else {
				completion.files.push(name);
			}
		}

		if completion.directories.is_empty() && completion.files.is_empty() {
			completion.status = CompletionStatus::NoMatch;
			return completion;
		}

		completion.directories.sort();
		completion.files.sort();
		tracing::trace!(
			dir = %dir.display(),
			typed = basename,
			directories = completion.directories.len(),
			files = completion.files.len(),
			"path completion"
		);
		completion
	}

	pub fn status(&self) -> &CompletionStatus {
		&self.status
	}

	/// Matching directory names, each ending in `/`.
	pub fn directories(&self) -> &[String] {
		&self.directories
	}

	pub fn files(&self) -> &[String] {
		&self.files
	}

	/// Length in chars of the last typed path segment.
	pub fn typed_len(&self) -> usize {
		self.resolved.typed_len()
	}

	/// Flattens the state into rows: the current directory, an optional
	/// status line, then directories and files. An error replaces everything
	/// with a single error row.
	pub fn rows(&self) -> Vec<CompletionRow> {
		if let CompletionStatus::Error(message) = &self.status {
			return vec![CompletionRow::plain(RowKind::Error, message.clone())];
		}

		let mut rows = Vec::with_capacity(2 + self.directories.len() + self.files.len());
		rows.push(CompletionRow::plain(RowKind::CurrentDir, self.resolved.dir_label()));
		if let Some(message) = self.status.message() {
			rows.push(CompletionRow::plain(RowKind::Status, message));
		}

		let typed_len = self.typed_len();
		let entries = self
			.directories
			.iter()
			.map(|name| (RowKind::Directory, name))
			.chain(self.files.iter().map(|name| (RowKind::File, name)));
		rows.extend(entries.map(|(kind, name)| CompletionRow {
			kind,
			text: name.clone(),
			typed_len,
		}));
		rows
	}

	/// Ghost text: the longest common prefix of all matches beyond what is
	/// already typed.
	///
	/// `None` on error, empty when nothing matched.
	pub fn inline(&self) -> Option<String> {
		if matches!(self.status, CompletionStatus::Error(_)) {
			return None;
		}

		let names = self.directories.iter().chain(&self.files).map(String::as_str);
		let Some(common) = common_prefix(names) else {
			return Some(String::new());
		};
		Some(common.chars().skip(self.typed_len()).collect())
	}

	/// Suffix that completes the entry shown at `row` of [`Self::rows`].
	///
	/// Row 0 is the current directory; status and error rows yield `None`.
	pub fn inline_for_row(&self, row: usize) -> Option<String> {
		if self.status != CompletionStatus::Ok || row == 0 {
			return None;
		}

		let idx = row - 1;
		let name = match self.directories.get(idx) {
			Some(name) => name,
			None => self.files.get(idx - self.directories.len())?,
		};
		Some(name.chars().skip(self.typed_len()).collect())
	}
}

/// Longest prefix shared by every name, compared char by char.
fn common_prefix<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
	let first = names.next()?;
	let mut end = first.len();
	for name in names {
		end = first[..end]
			.char_indices()
			.zip(name.chars())
			.find(|((_, a), b)| a != b)
			.map_or(end.min(name.len()), |((idx, _), _)| idx);
	}
	Some(&first[..end])
}
