use benc::bencode::Value;
use serde_json::{Value as JsonValue, json};

use crate::cmd::util::hex;

/// Convert a value tree to JSON.
///
/// Byte strings become JSON strings when they are valid UTF-8 and `{"hex": ...}` objects
/// otherwise. Dicts become arrays of `{key, value}` objects so order and duplicates survive.
pub(crate) fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Integer(v) => json!(v),
		Value::Bytes(v) => bytes_to_json(v),
		Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Value::Dict(entries) => JsonValue::Array(
			entries
				.iter()
				.map(|entry| json!({ "key": bytes_to_json(&entry.key), "value": value_to_json(&entry.value) }))
				.collect(),
		),
	}
}

fn bytes_to_json(bytes: &[u8]) -> JsonValue {
	match std::str::from_utf8(bytes) {
		Ok(text) => json!(text),
		Err(_) => json!({ "hex": hex(bytes) }),
	}
}
