use super::{Compression, ZSTD_MAGIC, decode_bytes, decode_zstd, read_input};
use crate::bencode::{BencodeError, ErrorKind};

#[test]
fn raw_bytes_pass_through() {
	let (mode, out) = decode_bytes(b"d3:agei69ee".to_vec()).expect("raw input");
	assert_eq!(mode, Compression::None);
	assert_eq!(mode.as_str(), "none");
	assert_eq!(out, b"d3:agei69ee");
}

#[test]
fn zstd_input_is_inflated() {
	let compressed = zstd::encode_all(&b"li42e4:spame"[..], 3).expect("compresses");
	assert!(compressed.starts_with(&ZSTD_MAGIC));

	let (mode, out) = decode_bytes(compressed).expect("zstd input");
	assert_eq!(mode, Compression::Zstd);
	assert_eq!(out, b"li42e4:spame");
}

#[test]
fn zstd_output_limit_is_enforced() {
	let compressed = zstd::encode_all(&[b'x'; 4096][..], 3).expect("compresses");
	let err = decode_zstd(&compressed, 1024).expect_err("output exceeds limit");
	assert!(matches!(err, BencodeError::DecompressedTooLarge { limit: 1024 }));
	assert_eq!(err.kind(), ErrorKind::LimitExceeded);
}

#[test]
fn corrupt_zstd_frame_is_io_error() {
	let mut bytes = ZSTD_MAGIC.to_vec();
	bytes.extend_from_slice(b"not a real frame");
	let err = decode_bytes(bytes).expect_err("corrupt frame");
	assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn reads_fixture_file() {
	let (mode, out) = read_input(&benc_testkit::fixture_path("person.benc")).expect("fixture reads");
	assert_eq!(mode, Compression::None);
	assert!(out.starts_with(b"d"));
}

#[test]
fn missing_file_is_io_error() {
	let err = read_input(&benc_testkit::fixture_path("does-not-exist.benc")).expect_err("missing file");
	assert!(matches!(err, BencodeError::Io(_)));
}
