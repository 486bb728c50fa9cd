use crate::bencode::value::Value;

/// Aggregate node counts from a tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Number of integer nodes.
	pub integers: usize,
	/// Number of byte-string nodes (dict keys not included).
	pub byte_strings: usize,
	/// Number of list nodes.
	pub lists: usize,
	/// Number of dict nodes.
	pub dicts: usize,
	/// Total dict entries across all dicts.
	pub dict_entries: usize,
	/// Sum of byte-string payload and dict key lengths.
	pub payload_bytes: usize,
	/// Deepest container nesting; a scalar root has depth 0.
	pub max_depth: u32,
}

impl TreeStats {
	/// Walk `root` without recursion and count its nodes.
	pub fn collect(root: &Value) -> Self {
		let mut stats = Self::default();
		let mut stack = vec![(root, 0_u32)];

		while let Some((value, depth)) = stack.pop() {
			match value {
				Value::Integer(_) => stats.integers += 1,
				Value::Bytes(bytes) => {
					stats.byte_strings += 1;
					stats.payload_bytes += bytes.len();
				}
				Value::List(items) => {
					stats.lists += 1;
					stats.max_depth = stats.max_depth.max(depth + 1);
					stack.extend(items.iter().map(|item| (item, depth + 1)));
				}
				Value::Dict(entries) => {
					stats.dicts += 1;
					stats.dict_entries += entries.len();
					stats.max_depth = stats.max_depth.max(depth + 1);
					for entry in entries {
						stats.payload_bytes += entry.key.len();
						stack.push((&entry.value, depth + 1));
					}
				}
			}
		}

		stats
	}

	/// Fold another tree's counts into this one.
	pub fn merge(&mut self, other: &Self) {
		self.integers += other.integers;
		self.byte_strings += other.byte_strings;
		self.lists += other.lists;
		self.dicts += other.dicts;
		self.dict_entries += other.dict_entries;
		self.payload_bytes += other.payload_bytes;
		self.max_depth = self.max_depth.max(other.max_depth);
	}

	/// Total number of value nodes.
	pub fn nodes(&self) -> usize {
		self.integers + self.byte_strings + self.lists + self.dicts
	}
}
