use std::io;

use compression_concurrent_merkle_tree::errors::ConcurrentMerkleTreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountCompressionClientError {
    #[error(transparent)]
    ConcurrentMerkleTree(#[from] ConcurrentMerkleTreeError),

    #[error("IoError: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),

    #[error("Unsupported tree size, depth {0} with buffer size {1}")]
    UnsupportedTreeSize(u32, u32),

    #[error("Invalid instruction data: {0}")]
    InvalidInstructionData(String),

    #[error("Invalid path node index {0} for a tree with depth {1}")]
    InvalidPathNodeIndex(u32, u32),
}

impl From<AccountCompressionClientError> for u32 {
    fn from(e: AccountCompressionClientError) -> u32 {
        match e {
            AccountCompressionClientError::ConcurrentMerkleTree(e) => e.into(),
            AccountCompressionClientError::IoError(_) => 9001,
            AccountCompressionClientError::InvalidPubkey(_) => 9002,
            AccountCompressionClientError::UnsupportedTreeSize(_, _) => 9003,
            AccountCompressionClientError::InvalidInstructionData(_) => 9004,
            AccountCompressionClientError::InvalidPathNodeIndex(_, _) => 9005,
        }
    }
}
