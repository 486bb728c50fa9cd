use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BencodeError>;

/// Coarse classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Input ended before a terminator or declared payload length.
	TruncatedInput,
	/// Integer or length prefix is not a valid decimal lexeme.
	MalformedLexeme,
	/// Integer literal does not fit in `i64`.
	NumericOverflow,
	/// Dictionary key is not a byte string, or a container never terminates.
	MalformedContainer,
	/// First byte of a value matches no known kind.
	UnrecognizedLeadByte,
	/// Configured depth or size limit was exceeded.
	LimitExceeded,
	/// Bytes remained after a value that had to span the whole input.
	TrailingData,
	/// Reading or inflating the input failed.
	Io,
	/// Caller-supplied argument was invalid.
	Usage,
}

impl ErrorKind {
	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TruncatedInput => "truncated_input",
			Self::MalformedLexeme => "malformed_lexeme",
			Self::NumericOverflow => "numeric_overflow",
			Self::MalformedContainer => "malformed_container",
			Self::UnrecognizedLeadByte => "unrecognized_lead_byte",
			Self::LimitExceeded => "limit_exceeded",
			Self::TrailingData => "trailing_data",
			Self::Io => "io",
			Self::Usage => "usage",
		}
	}
}

/// Errors produced while loading, decoding, and querying bencoded data.
#[derive(Debug, Error)]
pub enum BencodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Input ended before an expected terminator or value.
	#[error("truncated input at offset {at}: expected {expected:?}")]
	Truncated {
		/// Offset of the lexeme being read.
		at: usize,
		/// What was still expected.
		expected: &'static str,
	},
	/// Not enough bytes remained for a declared byte-string payload.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Integer lexeme is empty, non-decimal, `-0`, or has a leading zero.
	#[error("malformed integer at offset {at}")]
	MalformedInteger {
		/// Offset of the leading `i`.
		at: usize,
	},
	/// Byte-string length prefix is not a bounded decimal.
	#[error("malformed byte-string length at offset {at}")]
	MalformedLength {
		/// Offset of the first length digit.
		at: usize,
	},
	/// Integer literal is outside the `i64` range.
	#[error("integer overflow at offset {at}")]
	IntegerOverflow {
		/// Offset of the leading `i`.
		at: usize,
	},
	/// Dictionary key position holds something other than a byte string.
	#[error("dict key at offset {at} is not a byte string (lead byte 0x{found:02x})")]
	NonStringKey {
		/// Offset of the key lexeme.
		at: usize,
		/// Lead byte found at the key position.
		found: u8,
	},
	/// List or dict reached the end of input without its `e` terminator.
	#[error("unterminated {kind} starting at offset {at}")]
	Unterminated {
		/// Offset of the container's opening byte.
		at: usize,
		/// Container kind label.
		kind: &'static str,
	},
	/// Lead byte matches no known value kind.
	#[error("unexpected byte 0x{byte:02x} at offset {at}")]
	UnexpectedByte {
		/// Offset of the offending byte.
		at: usize,
		/// Offending byte.
		byte: u8,
	},
	/// Container nesting exceeded configured limit.
	#[error("nesting depth exceeded at offset {at} (max={max_depth})")]
	DepthExceeded {
		/// Offset of the container that went too deep.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Container element count exceeded configured limit.
	#[error("container at offset {at} has more than {max} items")]
	ContainerTooLarge {
		/// Offset of the container's opening byte.
		at: usize,
		/// Maximum permitted items.
		max: usize,
	},
	/// Bytes remained after a value that was required to span the input.
	#[error("{rem} trailing bytes after value at offset {at}")]
	TrailingBytes {
		/// Offset of the first trailing byte.
		at: usize,
		/// Number of trailing bytes.
		rem: usize,
	},
	/// Key path expression syntax is invalid.
	#[error("invalid key path: {path}")]
	InvalidKeyPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Key path did not resolve inside the decoded tree.
	#[error("key path not found: {path}")]
	KeyPathNotFound {
		/// Path that failed to resolve.
		path: String,
	},
}

impl BencodeError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Truncated { .. } | Self::UnexpectedEof { .. } => ErrorKind::TruncatedInput,
			Self::MalformedInteger { .. } | Self::MalformedLength { .. } => ErrorKind::MalformedLexeme,
			Self::IntegerOverflow { .. } => ErrorKind::NumericOverflow,
			Self::NonStringKey { .. } | Self::Unterminated { .. } => ErrorKind::MalformedContainer,
			Self::UnexpectedByte { .. } => ErrorKind::UnrecognizedLeadByte,
			Self::DepthExceeded { .. } | Self::ContainerTooLarge { .. } | Self::DecompressedTooLarge { .. } => ErrorKind::LimitExceeded,
			Self::TrailingBytes { .. } => ErrorKind::TrailingData,
			Self::Io(_) => ErrorKind::Io,
			Self::InvalidKeyPath { .. } | Self::KeyPathNotFound { .. } => ErrorKind::Usage,
		}
	}

	/// Input offset the error refers to, when it has one.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::Truncated { at, .. }
			| Self::UnexpectedEof { at, .. }
			| Self::MalformedInteger { at }
			| Self::MalformedLength { at }
			| Self::IntegerOverflow { at }
			| Self::NonStringKey { at, .. }
			| Self::Unterminated { at, .. }
			| Self::UnexpectedByte { at, .. }
			| Self::DepthExceeded { at, .. }
			| Self::ContainerTooLarge { at, .. }
			| Self::TrailingBytes { at, .. } => Some(*at),
			Self::Io(_) | Self::DecompressedTooLarge { .. } | Self::InvalidKeyPath { .. } | Self::KeyPathNotFound { .. } => None,
		}
	}
}
