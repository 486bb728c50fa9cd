use std::fmt;

use crate::bencode::lookup::{KeyMatch, lookup_with};
use crate::bencode::value::Value;
use crate::bencode::{BencodeError, Result};

/// One parsed operation in a key path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a dictionary entry by key.
	Key(Vec<u8>),
	/// Select a list element by zero-based index.
	Index(usize),
}

/// Parsed key path expression, e.g. `info.files[0].length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl KeyPath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// A key is any non-empty run of bytes other than `.`, `[` and `]`. A path may also start
	/// with an index (`[2].name`) to address into a top-level list.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || BencodeError::InvalidKeyPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(bytes[start..idx].to_vec()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Key(key) => {
					if i > 0 {
						f.write_str(".")?;
					}
					f.write_str(&String::from_utf8_lossy(key))?;
				}
				PathStep::Index(n) => write!(f, "[{n}]")?,
			}
		}
		Ok(())
	}
}

/// Follow `path` from `root`; `None` when any step misses.
pub fn lookup_path<'a>(root: &'a Value, path: &KeyPath, mode: KeyMatch) -> Option<&'a Value> {
	let mut current = root;
	for step in &path.steps {
		current = match step {
			PathStep::Key(key) => lookup_with(current, key, mode)?,
			PathStep::Index(n) => current.as_list()?.get(*n)?,
		};
	}
	Some(current)
}
