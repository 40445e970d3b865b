pub mod errors;
pub mod keccak;
pub mod sha256;
pub mod zero_bytes;

pub use keccak::Keccak;
pub use sha256::Sha256;

pub use crate::errors::HasherError;
use crate::zero_bytes::ZeroBytes;

pub const HASH_BYTES: usize = 32;

pub type Hash = [u8; HASH_BYTES];

/// Hash function used to combine Merkle tree nodes.
///
/// Parents are computed as `hashv(&[left, right])`, with no domain
/// separation prefix. Trees and verifiers sharing a root have to agree on the
/// implementation.
pub trait Hasher {
    fn hash(val: &[u8]) -> Result<Hash, HasherError>;
    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError>;
    fn zero_bytes() -> ZeroBytes;
}

/// 8-byte prefix identifying instructions and accounts of a program.
pub trait Discriminator {
    const DISCRIMINATOR: [u8; 8];
    fn discriminator() -> [u8; 8] {
        Self::DISCRIMINATOR
    }
}
