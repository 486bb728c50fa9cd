use benc::bencode::{BencodeError, KeyMatch, KeyPath, Result, lookup_path};

use crate::cmd::json::value_to_json;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{DecodeMode, InputArgs, decode_input, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Key path such as `info.files[0].length`.
	pub key_path: String,
	/// Match dict keys on their common prefix instead of exactly.
	#[arg(long = "prefix-keys")]
	pub prefix_keys: bool,
	#[arg(long)]
	pub json: bool,
}

/// Resolve a key path inside the first decoded value.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		key_path,
		prefix_keys,
		json,
	} = args;

	let path = KeyPath::parse(&key_path)?;
	let mode = if prefix_keys { KeyMatch::Prefix } else { KeyMatch::Exact };

	let loaded = input.load()?;
	let values = decode_input(&input, &loaded.bytes, DecodeMode::First)?;
	let root = values.first().map(|decoded| &decoded.value).ok_or(BencodeError::KeyPathNotFound { path: key_path.clone() })?;
	let found = lookup_path(root, &path, mode).ok_or(BencodeError::KeyPathNotFound { path: key_path.clone() })?;

	if json {
		emit_json(&GetJson {
			path: loaded.path.display().to_string(),
			key_path: path.to_string(),
			kind: found.kind().as_str(),
			value: value_to_json(found),
		});
		return Ok(());
	}

	print_value(found, PrintOptions::default());
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	path: String,
	key_path: String,
	kind: &'static str,
	value: serde_json::Value,
}
