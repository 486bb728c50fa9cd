use crate::bencode::value::{DictEntry, Value};

/// Key comparison rule for dictionary lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMatch {
	/// Stored key and query must have equal length and content.
	#[default]
	Exact,
	/// Compare only the shorter of the two lengths, so `age` also matches `agency`.
	///
	/// Kept for callers that depend on the older loose matching.
	Prefix,
}

impl KeyMatch {
	/// Test a stored key against a query.
	pub fn matches(self, stored: &[u8], query: &[u8]) -> bool {
		match self {
			Self::Exact => stored == query,
			Self::Prefix => {
				let len = stored.len().min(query.len());
				stored[..len] == query[..len]
			}
		}
	}
}

/// Return the value of the first entry whose key equals `key`.
pub fn lookup<'a>(value: &'a Value, key: &[u8]) -> Option<&'a Value> {
	lookup_with(value, key, KeyMatch::Exact)
}

/// Return the value of the first entry whose key matches under `mode`.
pub fn lookup_with<'a>(value: &'a Value, key: &[u8], mode: KeyMatch) -> Option<&'a Value> {
	lookup_entry(value, key, mode).map(|entry| &entry.value)
}

/// Return the first matching entry, including its stored key.
pub fn lookup_entry<'a>(value: &'a Value, key: &[u8], mode: KeyMatch) -> Option<&'a DictEntry> {
	value.as_dict()?.iter().find(|entry| mode.matches(&entry.key, key))
}
