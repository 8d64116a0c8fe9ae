use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations the locator consumes from its host.
///
/// Everything the completer, the readiness checks, and glob expansion learn
/// about disk goes through this trait, so a listing failure is just an
/// `io::Error` coming back from [`Filesystem::read_dir`].
pub trait Filesystem {
	/// Names of the entries directly inside `dir`, in no particular order.
	/// Entries whose names are not valid UTF-8 are left out.
	fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>>;

	fn is_dir(&self, path: &Path) -> bool;

	/// True for regular files (following symlinks).
	fn is_file(&self, path: &Path) -> bool;

	fn home_dir(&self) -> Option<PathBuf>;
}

/// [`Filesystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
	fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
		let mut names = Vec::new();
		for entry in std::fs::read_dir(dir)? {
			let name = entry?.file_name();
			match name.into_string() {
				Ok(name) => names.push(name),
				Err(name) => tracing::trace!(?name, dir = %dir.display(), "skipping non-UTF-8 entry"),
			}
		}
		Ok(names)
	}

	fn is_dir(&self, path: &Path) -> bool {
		path.is_dir()
	}

	fn is_file(&self, path: &Path) -> bool {
		path.is_file()
	}

	fn home_dir(&self) -> Option<PathBuf> {
		dirs::home_dir()
	}
}
