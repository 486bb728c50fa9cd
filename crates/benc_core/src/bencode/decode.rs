use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::bencode::bytes::Cursor;
use crate::bencode::value::{DictEntry, Value};
use crate::bencode::{BencodeError, Result};

/// Longest accepted digit span for integers and byte-string lengths.
const MAX_NUMBER_DIGITS: usize = 23;

/// Compile-time grammar extensions layered on the base format.
///
/// Dialects are marker types; a decoder is monomorphized per dialect, so the grammar in use
/// cannot change while decoding.
pub trait Dialect {
	/// Skip ASCII whitespace between list/dict items and before closing `e`.
	const SKIP_WHITESPACE: bool;
	/// Accept `s"..."` quoted literals as byte strings.
	const QUOTED_STRINGS: bool;
}

/// Base grammar only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

/// Base grammar plus whitespace between container items.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spaced;

/// Base grammar plus quoted string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quoted;

/// Both grammar extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extended;

impl Dialect for Strict {
	const SKIP_WHITESPACE: bool = false;
	const QUOTED_STRINGS: bool = false;
}

impl Dialect for Spaced {
	const SKIP_WHITESPACE: bool = true;
	const QUOTED_STRINGS: bool = false;
}

impl Dialect for Quoted {
	const SKIP_WHITESPACE: bool = false;
	const QUOTED_STRINGS: bool = true;
}

impl Dialect for Extended {
	const SKIP_WHITESPACE: bool = true;
	const QUOTED_STRINGS: bool = true;
}

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Maximum number of items in a single list or dict.
	pub max_container_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			max_container_len: usize::MAX,
		}
	}
}

impl DecodeOptions {
	/// Preset with tighter limits for input from untrusted peers.
	pub fn for_untrusted() -> Self {
		Self {
			max_depth: 64,
			max_container_len: 1 << 20,
		}
	}
}

/// One successfully decoded top-level value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
	/// Offset of the value's first byte.
	pub offset: usize,
	/// Number of bytes the encoded value spans.
	pub consumed: usize,
	/// Decoded value tree.
	pub value: Value,
}

/// Decode one value from the start of `buffer[..length]` with the base grammar.
///
/// On success `out` holds the value and the return is the number of bytes consumed. On
/// any failure `out` is `None` and the return is `0`.
pub fn parse(buffer: &[u8], length: usize, out: &mut Option<Value>) -> usize {
	parse_with::<Strict>(buffer, length, out)
}

/// [`parse`] with an explicit grammar dialect.
pub fn parse_with<D: Dialect>(buffer: &[u8], length: usize, out: &mut Option<Value>) -> usize {
	*out = None;
	let bound = length.min(buffer.len());
	match decode_prefix::<D>(&buffer[..bound], &DecodeOptions::default()) {
		Ok(decoded) => {
			*out = Some(decoded.value);
			decoded.consumed
		}
		Err(_) => 0,
	}
}

/// Decode one value from the start of `bytes`, allowing trailing data.
pub fn decode_prefix<D: Dialect>(bytes: &[u8], opt: &DecodeOptions) -> Result<Decoded> {
	decode_at::<D>(bytes, 0, opt)
}

/// Decode one value that must span all of `bytes`.
pub fn decode_exact<D: Dialect>(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let decoded = decode_prefix::<D>(bytes, opt)?;
	if decoded.consumed < bytes.len() {
		return Err(BencodeError::TrailingBytes {
			at: decoded.consumed,
			rem: bytes.len() - decoded.consumed,
		});
	}
	Ok(decoded.value)
}

fn decode_at<D: Dialect>(bytes: &[u8], offset: usize, opt: &DecodeOptions) -> Result<Decoded> {
	let mut decoder = Decoder::<D> {
		cursor: Cursor::at(bytes, offset),
		opt,
		dialect: PhantomData,
	};

	match decoder.value(0) {
		Ok(value) => Ok(Decoded {
			offset,
			consumed: decoder.cursor.pos() - offset,
			value,
		}),
		Err(err) => {
			debug!(kind = err.kind().as_str(), offset = ?err.offset(), "decode failed: {err}");
			Err(err)
		}
	}
}

/// Iterator over concatenated top-level values.
///
/// Yields each value in order and stops after the end of input or the first error.
pub struct ValueIter<'a, D: Dialect = Strict> {
	bytes: &'a [u8],
	pos: usize,
	opt: DecodeOptions,
	done: bool,
	dialect: PhantomData<D>,
}

impl<'a, D: Dialect> ValueIter<'a, D> {
	/// Create an iterator positioned at the start of `bytes`.
	pub fn new(bytes: &'a [u8], opt: DecodeOptions) -> Self {
		Self {
			bytes,
			pos: 0,
			opt,
			done: false,
			dialect: PhantomData,
		}
	}

	/// Offset where the next value would start.
	pub fn pos(&self) -> usize {
		self.pos
	}
}

impl<D: Dialect> Iterator for ValueIter<'_, D> {
	type Item = Result<Decoded>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if D::SKIP_WHITESPACE {
			let mut cursor = Cursor::at(self.bytes, self.pos);
			cursor.take_while(|byte| byte.is_ascii_whitespace());
			self.pos = cursor.pos();
		}

		if self.pos >= self.bytes.len() {
			self.done = true;
			return None;
		}

		match decode_at::<D>(self.bytes, self.pos, &self.opt) {
			Ok(decoded) => {
				self.pos += decoded.consumed;
				Some(Ok(decoded))
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

struct Decoder<'a, 'o, D> {
	cursor: Cursor<'a>,
	opt: &'o DecodeOptions,
	dialect: PhantomData<D>,
}

impl<D: Dialect> Decoder<'_, '_, D> {
	fn value(&mut self, depth: u32) -> Result<Value> {
		let at = self.cursor.pos();
		let Some(lead) = self.cursor.peek() else {
			return Err(BencodeError::Truncated { at, expected: "value" });
		};

		match lead {
			b'i' => self.integer().map(Value::Integer),
			b'0'..=b'9' => self.byte_string().map(Value::Bytes),
			b's' if D::QUOTED_STRINGS => self.quoted_string().map(Value::Bytes),
			b'l' => self.list(depth),
			b'd' => self.dict(depth),
			byte => Err(BencodeError::UnexpectedByte { at, byte }),
		}
	}

	fn integer(&mut self) -> Result<i64> {
		let at = self.cursor.pos();
		self.cursor.bump();
		let span = self.cursor.take_until(b'e').ok_or(BencodeError::Truncated { at, expected: "e" })?;
		parse_integer(span, at)
	}

	fn byte_string(&mut self) -> Result<Vec<u8>> {
		let at = self.cursor.pos();
		let digits = self.cursor.take_while(|byte| byte.is_ascii_digit());
		if digits.len() > MAX_NUMBER_DIGITS {
			return Err(BencodeError::MalformedLength { at });
		}

		match self.cursor.next_byte() {
			Some(b':') => {}
			Some(_) => return Err(BencodeError::MalformedLength { at }),
			None => return Err(BencodeError::Truncated { at, expected: ":" }),
		}

		let len = parse_length(digits).ok_or(BencodeError::MalformedLength { at })?;
		let payload = self.cursor.read_exact(len)?;
		Ok(payload.to_vec())
	}

	/// `s"..."` literal; `\` takes the next byte verbatim. The payload gets a trailing zero.
	fn quoted_string(&mut self) -> Result<Vec<u8>> {
		let at = self.cursor.pos();
		self.cursor.bump();
		match self.cursor.next_byte() {
			Some(b'"') => {}
			Some(byte) => {
				return Err(BencodeError::UnexpectedByte {
					at: self.cursor.pos() - 1,
					byte,
				});
			}
			None => return Err(BencodeError::Truncated { at, expected: "\"" }),
		}

		let mut out = Vec::new();
		loop {
			match self.cursor.next_byte() {
				Some(b'"') => break,
				Some(b'\\') => {
					let escaped = self.cursor.next_byte().ok_or(BencodeError::Truncated { at, expected: "\"" })?;
					out.push(escaped);
				}
				Some(byte) => out.push(byte),
				None => return Err(BencodeError::Truncated { at, expected: "\"" }),
			}
		}

		out.push(0);
		Ok(out)
	}

	fn list(&mut self, depth: u32) -> Result<Value> {
		let at = self.enter_container(depth)?;
		let mut items = Vec::new();

		loop {
			self.skip_whitespace();
			match self.cursor.peek() {
				None => return Err(BencodeError::Unterminated { at, kind: "list" }),
				Some(b'e') => {
					self.cursor.bump();
					break;
				}
				Some(_) => {
					self.check_container_len(items.len(), at)?;
					items.push(self.value(depth + 1)?);
				}
			}
		}

		trace!(offset = at, items = items.len(), "list decoded");
		Ok(Value::List(items))
	}

	fn dict(&mut self, depth: u32) -> Result<Value> {
		let at = self.enter_container(depth)?;
		let mut entries = Vec::new();

		loop {
			self.skip_whitespace();
			let key_at = self.cursor.pos();
			let key = match self.cursor.peek() {
				None => return Err(BencodeError::Unterminated { at, kind: "dict" }),
				Some(b'e') => {
					self.cursor.bump();
					break;
				}
				Some(b'0'..=b'9') => {
					self.check_container_len(entries.len(), at)?;
					self.byte_string()?
				}
				Some(b's') if D::QUOTED_STRINGS => {
					self.check_container_len(entries.len(), at)?;
					self.quoted_string()?
				}
				Some(found) => return Err(BencodeError::NonStringKey { at: key_at, found }),
			};

			self.skip_whitespace();
			let value = self.value(depth + 1)?;
			entries.push(DictEntry { key, value });
		}

		trace!(offset = at, entries = entries.len(), "dict decoded");
		Ok(Value::Dict(entries))
	}

	/// Check the depth budget and step over the container's lead byte.
	fn enter_container(&mut self, depth: u32) -> Result<usize> {
		let at = self.cursor.pos();
		if depth >= self.opt.max_depth {
			return Err(BencodeError::DepthExceeded {
				at,
				max_depth: self.opt.max_depth,
			});
		}
		self.cursor.bump();
		Ok(at)
	}

	fn check_container_len(&self, len: usize, at: usize) -> Result<()> {
		if len >= self.opt.max_container_len {
			return Err(BencodeError::ContainerTooLarge {
				at,
				max: self.opt.max_container_len,
			});
		}
		Ok(())
	}

	fn skip_whitespace(&mut self) {
		if D::SKIP_WHITESPACE {
			self.cursor.take_while(|byte| byte.is_ascii_whitespace());
		}
	}
}

/// Parse the span between `i` and `e`.
fn parse_integer(span: &[u8], at: usize) -> Result<i64> {
	if span.is_empty() || span.len() > MAX_NUMBER_DIGITS {
		return Err(BencodeError::MalformedInteger { at });
	}

	let (negative, digits) = match span.split_first() {
		Some((b'-', rest)) => (true, rest),
		_ => (false, span),
	};
	if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
		return Err(BencodeError::MalformedInteger { at });
	}
	// `0` is the only spelling of zero: no `-0`, no leading zeros.
	if digits[0] == b'0' && (negative || digits.len() > 1) {
		return Err(BencodeError::MalformedInteger { at });
	}

	let mut value = 0_i64;
	for byte in digits {
		let digit = i64::from(byte - b'0');
		let next = value
			.checked_mul(10)
			.and_then(|scaled| if negative { scaled.checked_sub(digit) } else { scaled.checked_add(digit) });
		value = next.ok_or(BencodeError::IntegerOverflow { at })?;
	}
	Ok(value)
}

fn parse_length(digits: &[u8]) -> Option<usize> {
	if digits.is_empty() {
		return None;
	}

	let mut value = 0_usize;
	for byte in digits {
		value = value.checked_mul(10)?.checked_add(usize::from(byte - b'0'))?;
	}
	Some(value)
}
