//! Public library API for decoding bencoded values from bounded buffers.

/// Value tree, bounded decoder, lookup, and input loading helpers.
pub mod bencode;
