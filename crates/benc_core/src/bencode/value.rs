use crate::bencode::lookup::lookup;

/// One decoded bencode value.
///
/// A value owns every node and buffer reachable from it. Trees only come out of the
/// decoder and are never mutated through the public API afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Signed 64-bit integer (`i<decimal>e`).
	Integer(i64),
	/// Raw byte string (`<len>:<bytes>`), not necessarily text.
	Bytes(Vec<u8>),
	/// Ordered list (`l...e`).
	List(Vec<Value>),
	/// Ordered dictionary (`d...e`); encoded order and duplicate keys are kept.
	Dict(Vec<DictEntry>),
}

/// One key/value pair of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
	/// Raw key bytes.
	pub key: Vec<u8>,
	/// Owned entry value.
	pub value: Value,
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// [`Value::Integer`].
	Integer,
	/// [`Value::Bytes`].
	Bytes,
	/// [`Value::List`].
	List,
	/// [`Value::Dict`].
	Dict,
}

impl ValueKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Integer => "integer",
			Self::Bytes => "bytes",
			Self::List => "list",
			Self::Dict => "dict",
		}
	}
}

impl Value {
	/// Return the kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Integer(_) => ValueKind::Integer,
			Self::Bytes(_) => ValueKind::Bytes,
			Self::List(_) => ValueKind::List,
			Self::Dict(_) => ValueKind::Dict,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Integer(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// View a byte string as UTF-8 text when it is valid.
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_dict(&self) -> Option<&[DictEntry]> {
		match self {
			Self::Dict(entries) => Some(entries),
			_ => None,
		}
	}

	/// Exact-match dictionary lookup; `None` for non-dicts.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		lookup(self, key)
	}
}

/// Tear down the tree held in `slot` and leave `None` behind.
///
/// Calling this again on the same slot is a no-op. Nodes are freed from an explicit work
/// stack, so teardown does not recurse on the call stack.
pub fn release(slot: &mut Option<Value>) {
	let Some(root) = slot.take() else {
		return;
	};

	let mut pending = vec![root];
	while let Some(value) = pending.pop() {
		match value {
			Value::List(items) => pending.extend(items),
			Value::Dict(entries) => pending.extend(entries.into_iter().map(|entry| entry.value)),
			Value::Integer(_) | Value::Bytes(_) => {}
		}
	}
}
