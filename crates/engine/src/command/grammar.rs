//! Hand-written grammars for the locator commands.
//!
//! Every function here receives already-trimmed text and either consumes all
//! of it or returns `None`. Offsets are counted in chars.

use super::Command;

/// `l [LINE]` or a bare `LINE`.
pub(super) fn goto_line(text: &str) -> Option<Command> {
	let mut scan = Scanner::new(text);
	let line = if scan.eat_keyword('l') {
		scan.skip_ws();
		if scan.is_done() { None } else { Some(scan.digits()?) }
	} else {
		Some(scan.digits()?)
	};

	if !scan.is_done() {
		return None;
	}
	let line = match line {
		Some(digits) => Some(digits.parse().ok()?),
		None => None,
	};
	Some(Command::GotoLine { line })
}

/// `f [PATH] [LINE]`, `/PATH [LINE]`, or a bare path of at least two chars.
pub(super) fn open(text: &str) -> Option<Command> {
	let mut scan = Scanner::new(text);
	let (path, path_offset) = if scan.eat_keyword('f') {
		scan.skip_ws();
		let offset = scan.char_pos();
		(scan.token(), offset)
	} else {
		let token = scan.token();
		if !token.starts_with('/') && token.chars().count() < 2 {
			return None;
		}
		(token, 0)
	};

	let line = scan.trailing_line()?;
	Some(Command::Open {
		path: path.to_string(),
		path_offset,
		line,
	})
}

/// `s [PATH]`.
pub(super) fn save_as(text: &str) -> Option<Command> {
	let mut scan = Scanner::new(text);
	if !scan.eat_keyword('s') {
		return None;
	}
	scan.skip_ws();
	let path_offset = scan.char_pos();
	let path = scan.token();

	if !scan.is_done() {
		return None;
	}
	Some(Command::SaveAs {
		path: path.to_string(),
		path_offset,
	})
}

struct Scanner<'a> {
	text: &'a str,
	pos: usize,
	char_pos: usize,
}

impl<'a> Scanner<'a> {
	fn new(text: &'a str) -> Self {
		Self { text, pos: 0, char_pos: 0 }
	}

	fn rest(&self) -> &'a str {
		&self.text[self.pos..]
	}

	fn is_done(&self) -> bool {
		self.pos == self.text.len()
	}

	fn char_pos(&self) -> usize {
		self.char_pos
	}

	/// Consumes chars while `pred` holds and returns them.
	fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
		let rest = self.rest();
		let mut len = 0;
		for ch in rest.chars().take_while(|&ch| pred(ch)) {
			len += ch.len_utf8();
			self.char_pos += 1;
		}
		self.pos += len;
		&rest[..len]
	}

	/// Consumes a single-char keyword when it stands alone or is followed by
	/// whitespace.
	fn eat_keyword(&mut self, keyword: char) -> bool {
		let mut chars = self.rest().chars();
		if chars.next() != Some(keyword) {
			return false;
		}
		if !chars.next().is_none_or(char::is_whitespace) {
			return false;
		}
		self.pos += keyword.len_utf8();
		self.char_pos += 1;
		true
	}

	fn skip_ws(&mut self) -> usize {
		self.take_while(char::is_whitespace).chars().count()
	}

	/// Run of non-whitespace chars, possibly empty.
	fn token(&mut self) -> &'a str {
		self.take_while(|ch| !ch.is_whitespace())
	}

	/// Non-empty run of ASCII digits.
	fn digits(&mut self) -> Option<&'a str> {
		let digits = self.take_while(|ch| ch.is_ascii_digit());
		(!digits.is_empty()).then_some(digits)
	}

	/// Optional `WS LINE` suffix that must end the text.
	fn trailing_line(&mut self) -> Option<Option<usize>> {
		if self.is_done() {
			return Some(None);
		}
		if self.skip_ws() == 0 {
			return None;
		}
		let digits = self.digits()?;
		if !self.is_done() {
			return None;
		}
		Some(Some(digits.parse().ok()?))
	}
}
