use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::fs::Filesystem;
use crate::paths;

/// True when `text` contains a wildcard character.
pub fn is_pattern(text: &str) -> bool {
	text.contains(['*', '?', '['])
}

/// Expands a shell-style pattern into the existing paths it names.
///
/// The pattern is resolved like any typed path (`~` expansion, relative to
/// `base`) and matched one component at a time, so `*` never crosses a
/// separator. Wildcards skip hidden entries unless the component itself
/// starts with a dot. Results are sorted.
pub fn expand(fs: &dyn Filesystem, pattern: &str, base: &Path) -> Vec<PathBuf> {
	if pattern.is_empty() {
		return Vec::new();
	}

	let home = fs.home_dir();
	let resolved = paths::resolve_user_path(pattern, base, home.as_deref());

	let mut candidates = vec![PathBuf::new()];
	for component in resolved.components() {
		let Component::Normal(part) = component else {
			for candidate in &mut candidates {
				candidate.push(component.as_os_str());
			}
			continue;
		};

		let part = part.to_string_lossy();
		let Some(matcher) = is_pattern(&part).then(|| compile(&part)).flatten() else {
			for candidate in &mut candidates {
				candidate.push(&*part);
			}
			continue;
		};

		let show_hidden = part.starts_with('.');
		let mut next = Vec::new();
		for candidate in &candidates {
			let Ok(names) = fs.read_dir(candidate) else {
				continue;
			};
			next.extend(
				names
					.into_iter()
					.filter(|name| show_hidden || !name.starts_with('.'))
					.filter(|name| matcher.is_match(name))
					.map(|name| candidate.join(name)),
			);
		}
		candidates = next;
		if candidates.is_empty() {
			break;
		}
	}

	candidates.retain(|path| fs.is_dir(path) || fs.is_file(path));
	candidates.sort();
	candidates
}

fn compile(part: &str) -> Option<GlobMatcher> {
	match GlobBuilder::new(part).literal_separator(true).build() {
		Ok(glob) => Some(glob.compile_matcher()),
		Err(error) => {
			tracing::debug!(pattern = part, %error, "invalid glob component, matching literally");
			None
		}
	}
}
