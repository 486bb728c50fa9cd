use benc::bencode::Result;

use crate::cmd::util::{DecodeMode, InputArgs, decode_input};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Accept several concatenated top-level values.
	#[arg(long)]
	pub all: bool,
}

/// Validate the input, printing the failure kind and offset on error.
pub fn run(args: Args) -> Result<()> {
	let Args { input, all } = args;

	let loaded = input.load()?;
	let mode = if all { DecodeMode::All } else { DecodeMode::Exact };
	match decode_input(&input, &loaded.bytes, mode) {
		Ok(values) => {
			println!("ok: {} value(s), {} bytes", values.len(), loaded.bytes.len());
			Ok(())
		}
		Err(err) => {
			println!("kind: {}", err.kind().as_str());
			if let Some(at) = err.offset() {
				println!("offset: {at}");
			}
			Err(err)
		}
	}
}
