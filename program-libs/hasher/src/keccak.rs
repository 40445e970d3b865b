use crate::{
    errors::HasherError,
    zero_bytes::{keccak::ZERO_BYTES, ZeroBytes},
    Hash, Hasher,
};

/// Keccak-256 (the original submission, not NIST SHA3-256). This is the hash
/// used by the account compression program.
#[derive(Clone, Copy, Debug)]
pub struct Keccak;

impl Hasher for Keccak {
    fn hash(val: &[u8]) -> Result<Hash, HasherError> {
        Self::hashv(&[val])
    }

    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError> {
        use sha3::{Digest, Keccak256};

        if vals.is_empty() {
            return Err(HasherError::EmptyInput);
        }

        let mut hasher = Keccak256::default();
        for val in vals {
            hasher.update(val);
        }
        Ok(hasher.finalize().into())
    }

    fn zero_bytes() -> ZeroBytes {
        ZERO_BYTES
    }
}
