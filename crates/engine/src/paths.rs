use std::path::{Component, Path, PathBuf};

/// A typed path fragment split into the directory to list and the segment
/// being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
	/// Absolute, lexically normalized directory.
	pub dir: PathBuf,
	/// Final segment of the text as typed; used as the listing prefix.
	pub basename: String,
}

impl ResolvedPath {
	/// Resolves `text` against `base` (the host's current directory).
	///
	/// Absolute fragments keep their textual dirname, `~` and `~/...` expand
	/// to `home`, anything else is taken relative to `base`. Resolution never
	/// touches the disk, so it cannot fail; a missing directory is reported by
	/// the completer.
	pub fn resolve(text: &str, base: &Path, home: Option<&Path>) -> Self {
		let (dir_part, basename) = split_dirname(text);

		let dir = if text.starts_with('/') {
			PathBuf::from(dir_part)
		} else if let Some(expanded) = text.starts_with('~').then(|| expand_home(text, home)).flatten() {
			let expanded = expanded.to_string_lossy().into_owned();
			let (expanded_dir, _) = split_dirname(&expanded);
			PathBuf::from(expanded_dir)
		} else {
			PathBuf::from(dir_part)
		};

		let abs = if dir.is_absolute() { dir } else { absolute_base(base).join(dir) };
		Self {
			dir: normalize_lexical(&abs),
			basename: basename.to_string(),
		}
	}

	/// Directory label with a trailing separator, except for the root.
	pub fn dir_label(&self) -> String {
		let mut label = self.dir.to_string_lossy().into_owned();
		if !label.ends_with('/') {
			label.push('/');
		}
		label
	}

	/// Length in chars of the typed segment.
	pub fn typed_len(&self) -> usize {
		self.basename.chars().count()
	}
}

/// Splits `text` at its last separator, mirroring POSIX `dirname`/`basename`
/// on the raw text: trailing separators are stripped from the directory part
/// unless it consists only of separators.
pub fn split_dirname(text: &str) -> (&str, &str) {
	let Some(idx) = text.rfind('/') else {
		return ("", text);
	};

	let head = &text[..=idx];
	let tail = &text[idx + 1..];
	let trimmed = head.trim_end_matches('/');
	if trimmed.is_empty() { (head, tail) } else { (trimmed, tail) }
}

/// Expands a leading `~` or `~/` to `home`. Returns `None` when the text has
/// no expandable prefix or no home directory is known.
pub fn expand_home(input: &str, home: Option<&Path>) -> Option<PathBuf> {
	let home = home?;
	if input == "~" {
		return Some(home.to_path_buf());
	}
	input.strip_prefix("~/").map(|rest| home.join(rest))
}

/// Resolves a user-entered path to an absolute, normalized path.
pub fn resolve_user_path(input: &str, base: &Path, home: Option<&Path>) -> PathBuf {
	let path = expand_home(input, home).unwrap_or_else(|| PathBuf::from(input));
	let abs = if path.is_absolute() { path } else { absolute_base(base).join(path) };
	normalize_lexical(&abs)
}

/// Anchors a relative base at the process working directory.
pub fn absolute_base(base: &Path) -> PathBuf {
	if base.is_absolute() {
		return base.to_path_buf();
	}
	let abs = std::path::absolute(base).unwrap_or_else(|_| Path::new("/").join(base));
	normalize_lexical(&abs)
}

/// Collapses `.`, `..`, and redundant separators without consulting the
/// filesystem. `..` never climbs above the root.
pub fn normalize_lexical(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::Prefix(prefix) => out.push(prefix.as_os_str()),
			Component::RootDir => out.push(Component::RootDir.as_os_str()),
			Component::CurDir => {}
			Component::ParentDir => match out.components().next_back() {
				Some(Component::Normal(_)) => {
					out.pop();
				}
				Some(Component::RootDir | Component::Prefix(_)) => {}
				_ => out.push(".."),
			},
			Component::Normal(part) => out.push(part),
		}
	}

	if out.as_os_str().is_empty() {
		out.push(".");
	}
	out
}
