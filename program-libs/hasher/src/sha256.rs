use crate::{
    errors::HasherError,
    zero_bytes::{sha256::ZERO_BYTES, ZeroBytes},
    Hash, Hasher,
};

#[derive(Clone, Copy, Debug)]
pub struct Sha256;

impl Hasher for Sha256 {
    fn hash(val: &[u8]) -> Result<Hash, HasherError> {
        Self::hashv(&[val])
    }

    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError> {
        use sha2::{Digest, Sha256};

        if vals.is_empty() {
            return Err(HasherError::EmptyInput);
        }

        let mut hasher = Sha256::default();
        for val in vals {
            hasher.update(val);
        }
        Ok(hasher.finalize().into())
    }

    fn zero_bytes() -> ZeroBytes {
        ZERO_BYTES
    }
}
