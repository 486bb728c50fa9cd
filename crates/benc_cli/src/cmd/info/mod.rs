use benc::bencode::{Result, TreeStats};

use crate::cmd::util::{DecodeMode, InputArgs, decode_input, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print node statistics across every top-level value in the input.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let loaded = input.load()?;
	let values = decode_input(&input, &loaded.bytes, DecodeMode::All)?;

	let mut stats = TreeStats::default();
	let mut kinds = Vec::with_capacity(values.len());
	for decoded in &values {
		stats.merge(&TreeStats::collect(&decoded.value));
		kinds.push(decoded.value.kind().as_str());
	}
	let consumed: usize = values.iter().map(|decoded| decoded.consumed).sum();

	if json {
		emit_json(&InfoJson {
			path: loaded.path.display().to_string(),
			compression: loaded.compression.as_str(),
			dialect: input.dialect_label(),
			bytes: loaded.bytes.len(),
			consumed,
			values: kinds,
			nodes: stats.nodes(),
			integers: stats.integers,
			byte_strings: stats.byte_strings,
			lists: stats.lists,
			dicts: stats.dicts,
			dict_entries: stats.dict_entries,
			payload_bytes: stats.payload_bytes,
			max_depth: stats.max_depth,
		});
		return Ok(());
	}

	println!("path: {}", loaded.path.display());
	println!("compression: {}", loaded.compression.as_str());
	println!("dialect: {}", input.dialect_label());
	println!("bytes: {}", loaded.bytes.len());
	println!("consumed: {consumed}");
	println!("values: {}", kinds.join(", "));
	println!("nodes: {}", stats.nodes());
	println!("  integers: {}", stats.integers);
	println!("  byte_strings: {}", stats.byte_strings);
	println!("  lists: {}", stats.lists);
	println!("  dicts: {} ({} entries)", stats.dicts, stats.dict_entries);
	println!("payload_bytes: {}", stats.payload_bytes);
	println!("max_depth: {}", stats.max_depth);

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	dialect: &'static str,
	bytes: usize,
	consumed: usize,
	values: Vec<&'static str>,
	nodes: usize,
	integers: usize,
	byte_strings: usize,
	lists: usize,
	dicts: usize,
	dict_entries: usize,
	payload_bytes: usize,
	max_depth: u32,
}
