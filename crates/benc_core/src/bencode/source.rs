use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::bencode::{BencodeError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw bytes.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Read an input file, or stdin when `path` is `-`, and undo any compression.
pub fn read_input(path: &Path) -> Result<(Compression, Vec<u8>)> {
	let raw = if path.as_os_str() == "-" {
		let mut buf = Vec::new();
		std::io::stdin().lock().read_to_end(&mut buf)?;
		buf
	} else {
		fs::read(path)?
	};

	debug!(path = %path.display(), bytes = raw.len(), "input read");
	decode_bytes(raw)
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, MAX_DECOMPRESSED_BYTES)?;
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(BencodeError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	debug!(compressed = raw.len(), inflated = out.len(), "zstd input inflated");
	Ok(out)
}

#[cfg(test)]
mod tests;
