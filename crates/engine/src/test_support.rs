//! Shared fixtures for unit tests.

use std::path::{Path, PathBuf};

use crate::command::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkspaceCall {
	Open(PathBuf, Option<usize>),
	SaveAs(PathBuf),
	GotoLine(usize),
}

/// Workspace that records every delegated call.
#[derive(Debug)]
pub(crate) struct RecordingWorkspace {
	pub calls: Vec<WorkspaceCall>,
	pub has_document: bool,
}

impl Default for RecordingWorkspace {
	fn default() -> Self {
		Self {
			calls: Vec::new(),
			has_document: true,
		}
	}
}

impl Workspace for RecordingWorkspace {
	fn open_file(&mut self, path: &Path, line: Option<usize>) {
		self.calls.push(WorkspaceCall::Open(path.to_path_buf(), line));
	}

	fn save_as(&mut self, path: &Path) {
		self.calls.push(WorkspaceCall::SaveAs(path.to_path_buf()));
	}

	fn goto_line(&mut self, line: usize) {
		self.calls.push(WorkspaceCall::GotoLine(line));
	}

	fn has_document(&self) -> bool {
		self.has_document
	}
}
