use std::{fmt, str::FromStr};

use borsh::{BorshDeserialize, BorshSerialize};
pub use compression_concurrent_merkle_tree::{
    account::{
        CompressionAccountType, ConcurrentMerkleTreeHeader, ConcurrentMerkleTreeHeaderData,
        ConcurrentMerkleTreeHeaderDataV1, TreeSummary,
    },
    config::ConcurrentMerkleTreeConfig,
    event::{
        AccountCompressionEvent, ApplicationDataEvent, ApplicationDataEventV1, ChangelogEvent,
        ChangelogEventV1, PathNode,
    },
};

use crate::errors::AccountCompressionClientError;

/// 32-byte account address, displayed in base58.
#[derive(
    BorshDeserialize, BorshSerialize, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    pub const fn new_from_array(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = AccountCompressionClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buffer = [0u8; 32];
        let decoded_len = bs58::decode(s)
            .onto(&mut buffer)
            .map_err(|_| AccountCompressionClientError::InvalidPubkey(s.to_string()))?;
        if decoded_len != 32 {
            return Err(AccountCompressionClientError::InvalidPubkey(s.to_string()));
        }
        Ok(Self(buffer))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

/// Account passed to an instruction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn new(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    pub fn new_readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// Serialized program invocation, ready to be put in a transaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}
