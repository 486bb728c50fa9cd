use std::fmt::{self, Write};

use benc::bencode::Value;

use crate::cmd::util::render_bytes;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of characters printed for one byte string.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum number of entries printed for dicts.
	pub max_dict_entries: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_list_items: 16,
			max_dict_entries: 80,
			max_print_depth: 8,
		}
	}
}

impl PrintOptions {
	/// Preset for short previews.
	pub fn for_preview() -> Self {
		Self {
			max_string_len: 60,
			max_list_items: 4,
			max_dict_entries: 16,
			max_print_depth: 3,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, options: PrintOptions) {
	let mut out = String::new();
	if write_value(&mut out, value, 0, 0, options).is_ok() {
		print!("{out}");
	}
}

/// Write `value` starting at the current column; nested lines are indented from `indent`.
pub fn write_value<W: Write>(out: &mut W, value: &Value, indent: usize, depth: u32, options: PrintOptions) -> fmt::Result {
	let pad = " ".repeat(indent);
	match value {
		Value::Integer(v) => writeln!(out, "{v}"),
		Value::Bytes(v) => writeln!(out, "{}", render_bytes(v, options.max_string_len)),
		Value::List(items) => {
			if items.is_empty() {
				return writeln!(out, "[]");
			}
			if depth >= options.max_print_depth {
				return writeln!(out, "[... {} items]", items.len());
			}
			writeln!(out, "[")?;
			for item in items.iter().take(options.max_list_items) {
				write!(out, "{pad}  ")?;
				write_value(out, item, indent + 2, depth + 1, options)?;
			}
			if items.len() > options.max_list_items {
				writeln!(out, "{pad}  ... {} more", items.len() - options.max_list_items)?;
			}
			writeln!(out, "{pad}]")
		}
		Value::Dict(entries) => {
			if entries.is_empty() {
				return writeln!(out, "{{}}");
			}
			if depth >= options.max_print_depth {
				return writeln!(out, "{{ ... {} entries }}", entries.len());
			}
			writeln!(out, "{{")?;
			for entry in entries.iter().take(options.max_dict_entries) {
				write!(out, "{pad}  {} = ", render_bytes(&entry.key, options.max_string_len))?;
				write_value(out, &entry.value, indent + 2, depth + 1, options)?;
			}
			if entries.len() > options.max_dict_entries {
				writeln!(out, "{pad}  ... {} more entries", entries.len() - options.max_dict_entries)?;
			}
			writeln!(out, "{pad}}}")
		}
	}
}

#[cfg(test)]
mod tests;
