use compression_concurrent_merkle_tree::{
    account::{read_tree_summary, tree_from_bytes, TreeSummary},
    ConcurrentMerkleTree,
};
use compression_hasher::Hasher;
use tracing::debug;

use crate::{errors::AccountCompressionClientError, types::Pubkey, utils::check_standard_size};

/// Tree account fetched from the chain.
///
/// Decoding only reads the header and the counters, the full tree (which
/// needs its height at compile time) is deserialized on demand with
/// [`MerkleTreeAccount::tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTreeAccount {
    pub pubkey: Pubkey,
    pub summary: TreeSummary,
    data: Vec<u8>,
}

impl MerkleTreeAccount {
    pub fn from_bytes(pubkey: Pubkey, data: Vec<u8>) -> Result<Self, AccountCompressionClientError> {
        let summary = read_tree_summary(&data)?;
        debug!(
            %pubkey,
            max_depth = summary.max_depth(),
            max_buffer_size = summary.max_buffer_size(),
            sequence_number = summary.sequence_number,
            "decoded tree account"
        );
        Ok(Self {
            pubkey,
            summary,
            data,
        })
    }

    /// Same as [`MerkleTreeAccount::from_bytes`], but rejects trees whose
    /// depth and buffer size are not accepted by the on-chain program.
    pub fn from_bytes_standard(
        pubkey: Pubkey,
        data: Vec<u8>,
    ) -> Result<Self, AccountCompressionClientError> {
        let account = Self::from_bytes(pubkey, data)?;
        check_standard_size(account.max_depth(), account.max_buffer_size())?;
        Ok(account)
    }

    pub fn root(&self) -> [u8; 32] {
        self.summary.root
    }

    pub fn authority(&self) -> Pubkey {
        Pubkey::new_from_array(self.summary.header.get_authority())
    }

    pub fn creation_slot(&self) -> u64 {
        self.summary.header.get_creation_slot()
    }

    pub fn max_depth(&self) -> u32 {
        self.summary.max_depth()
    }

    pub fn max_buffer_size(&self) -> u32 {
        self.summary.max_buffer_size()
    }

    pub fn sequence_number(&self) -> u64 {
        self.summary.sequence_number
    }

    pub fn next_index(&self) -> u64 {
        self.summary.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.summary.next_index == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Deserializes the whole tree, including its changelog.
    pub fn tree<H, const HEIGHT: usize>(
        &self,
    ) -> Result<ConcurrentMerkleTree<H, HEIGHT>, AccountCompressionClientError>
    where
        H: Hasher,
    {
        let (_, tree) = tree_from_bytes::<H, HEIGHT>(&self.data)?;
        Ok(tree)
    }
}
