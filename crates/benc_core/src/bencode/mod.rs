mod bytes;
mod decode;
mod error;
mod lookup;
mod path;
mod source;
mod stats;
mod value;

/// Bounded byte cursor used by the decoder.
pub use bytes::Cursor;
/// Decoding entry points, limits, and grammar dialects.
pub use decode::{DecodeOptions, Decoded, Dialect, Extended, Quoted, Spaced, Strict, ValueIter, decode_exact, decode_prefix, parse, parse_with};
/// Error, error classification, and result alias.
pub use error::{BencodeError, ErrorKind, Result};
/// Dictionary lookup helpers.
pub use lookup::{KeyMatch, lookup, lookup_entry, lookup_with};
/// Key path parser and resolver.
pub use path::{KeyPath, PathStep, lookup_path};
/// Input loading and compression detection.
pub use source::{Compression, ZSTD_MAGIC, decode_bytes, read_input};
/// Tree statistics.
pub use stats::TreeStats;
/// Decoded value tree types and teardown.
pub use value::{DictEntry, Value, ValueKind, release};
