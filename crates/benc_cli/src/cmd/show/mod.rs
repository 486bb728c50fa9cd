use benc::bencode::{Decoded, Result};

use crate::cmd::json::value_to_json;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{DecodeMode, InputArgs, Loaded, decode_input, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Decode every concatenated top-level value instead of the first.
	#[arg(long)]
	pub all: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub preview: bool,
	#[arg(long = "print-depth")]
	pub print_depth: Option<u32>,
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
}

/// Decode and print value trees.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		all,
		json,
		preview,
		print_depth,
		max_string,
	} = args;

	let loaded = input.load()?;
	let mode = if all { DecodeMode::All } else { DecodeMode::First };
	let values = decode_input(&input, &loaded.bytes, mode)?;

	if json {
		print_json(&loaded, input.dialect_label(), &values);
		return Ok(());
	}

	let mut options = if preview { PrintOptions::for_preview() } else { PrintOptions::default() };
	if let Some(print_depth) = print_depth {
		options.max_print_depth = print_depth;
	}
	if let Some(max_string) = max_string {
		options.max_string_len = max_string;
	}

	println!("path: {}", loaded.path.display());
	println!("compression: {}", loaded.compression.as_str());
	println!("dialect: {}", input.dialect_label());
	println!("bytes: {}", loaded.bytes.len());
	for decoded in &values {
		println!("value @{} ({} bytes, {}):", decoded.offset, decoded.consumed, decoded.value.kind().as_str());
		print_value(&decoded.value, options);
	}

	Ok(())
}

fn print_json(loaded: &Loaded, dialect: &'static str, values: &[Decoded]) {
	let payload = ShowJson {
		path: loaded.path.display().to_string(),
		compression: loaded.compression.as_str(),
		dialect,
		bytes: loaded.bytes.len(),
		values: values
			.iter()
			.map(|decoded| ShowValueJson {
				offset: decoded.offset,
				consumed: decoded.consumed,
				kind: decoded.value.kind().as_str(),
				value: value_to_json(&decoded.value),
			})
			.collect(),
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	compression: &'static str,
	dialect: &'static str,
	bytes: usize,
	values: Vec<ShowValueJson>,
}

#[derive(serde::Serialize)]
struct ShowValueJson {
	offset: usize,
	consumed: usize,
	kind: &'static str,
	value: serde_json::Value,
}
