use crate::bencode::{BencodeError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// The slice is the whole readable extent; no method reads past its end.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor starting at `pos`, clamped to the slice length.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self {
			bytes,
			pos: pos.min(bytes.len()),
		}
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Return the next byte without consuming it.
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Consume and return the next byte.
	pub fn next_byte(&mut self) -> Option<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Some(byte)
	}

	/// Skip one byte if any remain.
	pub fn bump(&mut self) {
		if self.pos < self.bytes.len() {
			self.pos += 1;
		}
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BencodeError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Consume bytes while `pred` holds and return them.
	pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
		let start = self.pos;
		let len = self.bytes[start..].iter().take_while(|byte| pred(**byte)).count();
		self.pos += len;
		&self.bytes[start..self.pos]
	}

	/// Return the bytes before the next `delim` and advance past it.
	///
	/// Leaves the cursor untouched when `delim` does not occur before the end.
	pub fn take_until(&mut self, delim: u8) -> Option<&'a [u8]> {
		let start = self.pos;
		let rel_end = self.bytes[start..].iter().position(|byte| *byte == delim)?;
		let end = start + rel_end;
		self.pos = end + 1;
		Some(&self.bytes[start..end])
	}
}
