use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::ConcurrentMerkleTreeError;

/// Maximum supported tree height. Node indices of a tree with this height
/// still fit in `u32`.
pub const MAX_HEIGHT: usize = 30;
/// Maximum supported number of changelog entries.
pub const MAX_CHANGELOG_SIZE: usize = 2048;

pub const DEFAULT_MAX_DEPTH: u32 = 14;
pub const DEFAULT_MAX_BUFFER_SIZE: u32 = 64;

/// Parameters of a tree, as written to the account header on creation.
#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcurrentMerkleTreeConfig {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub authority: [u8; 32],
    pub creation_slot: u64,
}

impl Default for ConcurrentMerkleTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            authority: [0u8; 32],
            creation_slot: 0,
        }
    }
}

impl ConcurrentMerkleTreeConfig {
    pub fn new(max_depth: u32, max_buffer_size: u32) -> Self {
        Self {
            max_depth,
            max_buffer_size,
            ..Default::default()
        }
    }

    pub fn with_authority(mut self, authority: [u8; 32]) -> Self {
        self.authority = authority;
        self
    }

    pub fn with_creation_slot(mut self, creation_slot: u64) -> Self {
        self.creation_slot = creation_slot;
        self
    }

    /// Checks the parameters against the global limits.
    pub fn validate(&self) -> Result<(), ConcurrentMerkleTreeError> {
        let max_depth = self.max_depth as usize;
        let max_buffer_size = self.max_buffer_size as usize;
        if max_depth == 0 {
            return Err(ConcurrentMerkleTreeError::HeightZero);
        }
        if max_depth > MAX_HEIGHT {
            return Err(ConcurrentMerkleTreeError::HeightHigherThanMax(
                max_depth, MAX_HEIGHT,
            ));
        }
        if max_buffer_size == 0 {
            return Err(ConcurrentMerkleTreeError::ChangelogZero);
        }
        if max_buffer_size > MAX_CHANGELOG_SIZE {
            return Err(ConcurrentMerkleTreeError::ChangelogHigherThanMax(
                max_buffer_size,
                MAX_CHANGELOG_SIZE,
            ));
        }
        Ok(())
    }

    /// Same as [`validate`](Self::validate), additionally requiring the depth
    /// to match the tree height `HEIGHT`.
    pub fn validate_for<const HEIGHT: usize>(&self) -> Result<(), ConcurrentMerkleTreeError> {
        self.validate()?;
        if self.max_depth as usize != HEIGHT {
            return Err(ConcurrentMerkleTreeError::HeightMismatch(
                HEIGHT,
                self.max_depth as usize,
            ));
        }
        Ok(())
    }
}
