//! Submitted-command history with Up/Down navigation.

/// Committed entries followed by one in-progress slot.
///
/// `entries` is never empty and `cursor` always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
	entries: Vec<String>,
	cursor: usize,
}

impl Default for History {
	fn default() -> Self {
		Self {
			entries: vec![String::new()],
			cursor: 0,
		}
	}
}

impl History {
	pub fn new() -> Self {
		Self::default()
	}

	/// All entries, the trailing in-progress slot included.
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	/// Entries submitted so far, oldest first.
	pub fn committed(&self) -> &[String] {
		&self.entries[..self.last()]
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	fn last(&self) -> usize {
		self.entries.len() - 1
	}

	/// Records a submitted command and opens a fresh in-progress slot.
	///
	/// Submitting the same text twice in a row keeps a single entry.
	pub fn commit(&mut self, text: &str) {
		self.entries.pop();
		if self.entries.last().is_some_and(|previous| previous.trim() == text) {
			self.entries.pop();
		}
		self.entries.push(text.to_string());
		self.entries.push(String::new());
		self.cursor = self.last();
	}

	/// Steps back one entry. `live` is the text currently in the input; it is
	/// saved into the in-progress slot when leaving it.
	///
	/// Returns the entry to show, or `None` when already at the oldest.
	pub fn older(&mut self, live: &str) -> Option<&str> {
		if self.cursor == self.last() {
			let last = self.last();
			self.entries[last] = live.to_string();
		}
		if self.cursor == 0 {
			return None;
		}
		self.cursor -= 1;
		Some(&self.entries[self.cursor])
	}

	/// Steps forward one entry, ending on the in-progress slot.
	pub fn newer(&mut self) -> Option<&str> {
		if self.cursor >= self.last() {
			return None;
		}
		self.cursor += 1;
		Some(&self.entries[self.cursor])
	}
}
