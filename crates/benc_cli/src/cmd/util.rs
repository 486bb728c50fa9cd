use std::fmt::Write as _;
use std::path::PathBuf;

use benc::bencode::{
	Compression, DecodeOptions, Decoded, Dialect, Extended, Quoted, Result, Spaced, Strict, ValueIter, decode_exact, decode_prefix, read_input,
};
use tracing::warn;

/// Input file and grammar flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
	/// Input file, or `-` for stdin. zstd-compressed input is inflated.
	pub file: PathBuf,
	/// Allow whitespace between list and dict items.
	#[arg(long)]
	pub spaced: bool,
	/// Accept `s"..."` quoted string literals.
	#[arg(long)]
	pub quoted: bool,
	/// Maximum container nesting depth.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Maximum items in a single list or dict.
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
}

/// Raw input after loading and decompression.
pub(crate) struct Loaded {
	pub path: PathBuf,
	pub compression: Compression,
	pub bytes: Vec<u8>,
}

/// How much of the input a command decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeMode {
	/// First value only; trailing bytes are ignored with a warning.
	First,
	/// Every concatenated top-level value.
	All,
	/// Exactly one value spanning the whole input.
	Exact,
}

impl InputArgs {
	pub(crate) fn load(&self) -> Result<Loaded> {
		let (compression, bytes) = read_input(&self.file)?;
		Ok(Loaded {
			path: self.file.clone(),
			compression,
			bytes,
		})
	}

	pub(crate) fn decode_options(&self) -> DecodeOptions {
		let mut options = DecodeOptions::default();
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		if let Some(max_items) = self.max_items {
			options.max_container_len = max_items;
		}
		options
	}

	/// Stable label of the selected grammar.
	pub(crate) fn dialect_label(&self) -> &'static str {
		match (self.spaced, self.quoted) {
			(false, false) => "strict",
			(true, false) => "spaced",
			(false, true) => "quoted",
			(true, true) => "extended",
		}
	}
}

/// Decode `bytes` with the grammar selected by `input`.
pub(crate) fn decode_input(input: &InputArgs, bytes: &[u8], mode: DecodeMode) -> Result<Vec<Decoded>> {
	let options = input.decode_options();
	match (input.spaced, input.quoted) {
		(false, false) => decode_as::<Strict>(bytes, &options, mode),
		(true, false) => decode_as::<Spaced>(bytes, &options, mode),
		(false, true) => decode_as::<Quoted>(bytes, &options, mode),
		(true, true) => decode_as::<Extended>(bytes, &options, mode),
	}
}

fn decode_as<D: Dialect>(bytes: &[u8], options: &DecodeOptions, mode: DecodeMode) -> Result<Vec<Decoded>> {
	match mode {
		DecodeMode::First => {
			let decoded = decode_prefix::<D>(bytes, options)?;
			let rest = bytes.len() - decoded.consumed;
			if rest > 0 {
				warn!(offset = decoded.consumed, rest, "ignoring bytes after first value");
			}
			Ok(vec![decoded])
		}
		DecodeMode::All => ValueIter::<D>::new(bytes, options.clone()).collect(),
		DecodeMode::Exact => {
			let value = decode_exact::<D>(bytes, options)?;
			Ok(vec![Decoded {
				offset: 0,
				consumed: bytes.len(),
				value,
			}])
		}
	}
}

/// Render bytes for display: quoted and escaped when ASCII, otherwise a hex preview.
pub(crate) fn render_bytes(bytes: &[u8], max_len: usize) -> String {
	if bytes.is_ascii() {
		let escaped = bytes.escape_ascii().to_string();
		return format!("\"{}\"", truncate(&escaped, max_len));
	}

	const PREVIEW: usize = 16;
	let shown = bytes.len().min(PREVIEW);
	let suffix = if bytes.len() > PREVIEW { "..." } else { "" };
	format!("bytes[{}] {}{suffix}", bytes.len(), hex(&bytes[..shown]))
}

/// Lowercase hex encoding.
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		let _ = write!(out, "{byte:02x}");
	}
	out
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}
