pub mod keccak;
pub mod sha256;

pub const MAX_HEIGHT: usize = 32;

/// Roots of empty subtrees, `ZERO_BYTES[i]` being the root of an empty subtree
/// of height `i`. `ZERO_BYTES[0]` is the empty leaf.
pub type ZeroBytes = [[u8; 32]; MAX_HEIGHT + 1];
