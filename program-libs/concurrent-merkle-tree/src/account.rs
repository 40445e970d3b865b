//! Account layout of a tree.
//!
//! ```text
//! header (56 bytes, borsh)
//!   account_type u8 | version u8 | max_buffer_size u32 | max_depth u32
//!   | authority [u8; 32] | creation_slot u64 | padding [u8; 6]
//! body (little-endian, fixed width)
//!   sequence_number u64 | active_index u64 | buffer_len u64
//!   | changelog entries (max_buffer_size slots)
//!   | rightmost_proof [[u8; 32]; max_depth] | rightmost_leaf [u8; 32]
//!   | next_index u64
//! ```

use borsh::{BorshDeserialize, BorshSerialize};
use compression_hasher::Hasher;

use crate::{
    changelog::{ChangelogBuffer, ChangelogEntry},
    config::ConcurrentMerkleTreeConfig,
    errors::ConcurrentMerkleTreeError,
    offset::{read_array_at, read_u32_at, read_u64_at, write_at, write_u32_at, write_u64_at},
    ConcurrentMerkleTree,
};

pub const CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1: usize = 2 + 54;

/// Size of the fixed body fields preceding the changelog.
const BODY_PREFIX_SIZE: usize = 24;

#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CompressionAccountType {
    Uninitialized,
    ConcurrentMerkleTree,
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConcurrentMerkleTreeHeaderDataV1 {
    pub max_buffer_size: u32,
    pub max_depth: u32,
    /// Account allowed to modify the tree.
    pub authority: [u8; 32],
    /// Slot in which the tree was created. Indexers use it to know where to
    /// start replaying events from.
    pub creation_slot: u64,
    pub padding: [u8; 6],
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConcurrentMerkleTreeHeaderData {
    V1(ConcurrentMerkleTreeHeaderDataV1),
}

/// Initialization parameters of a tree, stored in front of the tree data.
#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcurrentMerkleTreeHeader {
    pub account_type: CompressionAccountType,
    pub header: ConcurrentMerkleTreeHeaderData,
}

impl ConcurrentMerkleTreeHeader {
    pub fn new(config: &ConcurrentMerkleTreeConfig) -> Self {
        Self {
            account_type: CompressionAccountType::ConcurrentMerkleTree,
            header: ConcurrentMerkleTreeHeaderData::V1(ConcurrentMerkleTreeHeaderDataV1 {
                max_buffer_size: config.max_buffer_size,
                max_depth: config.max_depth,
                authority: config.authority,
                creation_slot: config.creation_slot,
                padding: [0u8; 6],
            }),
        }
    }

    pub fn get_max_depth(&self) -> u32 {
        match &self.header {
            ConcurrentMerkleTreeHeaderData::V1(header) => header.max_depth,
        }
    }

    pub fn get_max_buffer_size(&self) -> u32 {
        match &self.header {
            ConcurrentMerkleTreeHeaderData::V1(header) => header.max_buffer_size,
        }
    }

    pub fn get_authority(&self) -> [u8; 32] {
        match &self.header {
            ConcurrentMerkleTreeHeaderData::V1(header) => header.authority,
        }
    }

    pub fn get_creation_slot(&self) -> u64 {
        match &self.header {
            ConcurrentMerkleTreeHeaderData::V1(header) => header.creation_slot,
        }
    }

    pub fn set_authority(&mut self, authority: [u8; 32]) {
        match &mut self.header {
            ConcurrentMerkleTreeHeaderData::V1(header) => header.authority = authority,
        }
    }

    pub fn config(&self) -> ConcurrentMerkleTreeConfig {
        ConcurrentMerkleTreeConfig {
            max_depth: self.get_max_depth(),
            max_buffer_size: self.get_max_buffer_size(),
            authority: self.get_authority(),
            creation_slot: self.get_creation_slot(),
        }
    }

    /// Decodes the header from the beginning of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConcurrentMerkleTreeError> {
        if bytes.len() < CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1 {
            return Err(ConcurrentMerkleTreeError::BufferSize(
                CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1,
                bytes.len(),
            ));
        }
        if bytes[0] != CompressionAccountType::ConcurrentMerkleTree as u8 {
            return Err(ConcurrentMerkleTreeError::InvalidAccountType(bytes[0]));
        }
        if bytes[1] != 0 {
            return Err(ConcurrentMerkleTreeError::UnsupportedHeaderVersion(bytes[1]));
        }
        let header = Self::try_from_slice(&bytes[..CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1])
            .map_err(|e| ConcurrentMerkleTreeError::InvalidHeader(e.to_string()))?;
        header.config().validate()?;
        Ok(header)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConcurrentMerkleTreeError> {
        self.try_to_vec()
            .map_err(|e| ConcurrentMerkleTreeError::InvalidHeader(e.to_string()))
    }
}

/// Size of the tree body (everything after the header).
pub const fn tree_body_size(height: usize, changelog_size: usize) -> usize {
    BODY_PREFIX_SIZE
        + changelog_size * (32 + 32 * height + 4 + 4 + 8)
        + 32 * height
        + 32
        + 8
}

/// Size of an account holding a tree with the given parameters.
pub const fn merkle_tree_account_size(height: usize, changelog_size: usize) -> usize {
    CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1 + tree_body_size(height, changelog_size)
}

fn write_entry<const HEIGHT: usize>(
    bytes: &mut [u8],
    entry: &ChangelogEntry<HEIGHT>,
    offset: &mut usize,
) {
    write_at(bytes, &entry.root, offset);
    for node in entry.path.iter() {
        write_at(bytes, node, offset);
    }
    write_u32_at(bytes, entry.index, offset);
    write_u32_at(bytes, 0, offset);
    write_u64_at(bytes, entry.sequence_number, offset);
}

fn read_entry<const HEIGHT: usize>(bytes: &[u8], offset: &mut usize) -> ChangelogEntry<HEIGHT> {
    let root = read_array_at(bytes, offset);
    let path = std::array::from_fn(|_| read_array_at(bytes, offset));
    let index = read_u32_at(bytes, offset);
    let _padding = read_u32_at(bytes, offset);
    let sequence_number = read_u64_at(bytes, offset);
    ChangelogEntry::new(root, path, index, sequence_number)
}

/// Checks the changelog counters of a serialized tree against each other.
///
/// The entry with sequence number `s` lives in slot `s % changelog_size` and
/// the buffer holds every entry since creation until it wraps.
fn check_changelog_counters(
    sequence_number: u64,
    active_index: u64,
    buffer_len: u64,
    changelog_size: usize,
) -> Result<(), ConcurrentMerkleTreeError> {
    let changelog_size = changelog_size as u64;
    let expected_len = sequence_number.saturating_add(1).min(changelog_size);
    if buffer_len != expected_len || active_index != sequence_number % changelog_size {
        return Err(ConcurrentMerkleTreeError::CorruptedChangelog);
    }
    Ok(())
}

/// Serializes `header` followed by `tree` into account bytes.
pub fn tree_to_bytes<H, const HEIGHT: usize>(
    header: &ConcurrentMerkleTreeHeader,
    tree: &ConcurrentMerkleTree<H, HEIGHT>,
) -> Result<Vec<u8>, ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    let changelog_size = tree.changelog.capacity();
    if header.get_max_depth() as usize != HEIGHT {
        return Err(ConcurrentMerkleTreeError::HeightMismatch(
            HEIGHT,
            header.get_max_depth() as usize,
        ));
    }
    if header.get_max_buffer_size() as usize != changelog_size {
        return Err(ConcurrentMerkleTreeError::ChangelogSizeMismatch(
            changelog_size,
            header.get_max_buffer_size() as usize,
        ));
    }

    let mut bytes = vec![0u8; merkle_tree_account_size(HEIGHT, changelog_size)];
    let mut offset = 0;
    write_at(&mut bytes, &header.to_bytes()?, &mut offset);

    write_u64_at(&mut bytes, tree.sequence_number, &mut offset);
    write_u64_at(&mut bytes, tree.changelog.active_index() as u64, &mut offset);
    write_u64_at(&mut bytes, tree.changelog.len() as u64, &mut offset);
    let entries_offset = offset;
    for entry in tree.changelog.as_slice() {
        write_entry(&mut bytes, entry, &mut offset);
    }
    // Unwritten slots stay zeroed.
    offset = entries_offset + changelog_size * ChangelogEntry::<HEIGHT>::size_in_account();
    for node in tree.rightmost_proof.iter() {
        write_at(&mut bytes, node, &mut offset);
    }
    write_at(&mut bytes, &tree.rightmost_leaf, &mut offset);
    write_u64_at(&mut bytes, tree.next_index, &mut offset);

    Ok(bytes)
}

/// Deserializes account bytes into the header and the tree.
pub fn tree_from_bytes<H, const HEIGHT: usize>(
    bytes: &[u8],
) -> Result<(ConcurrentMerkleTreeHeader, ConcurrentMerkleTree<H, HEIGHT>), ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    let header = ConcurrentMerkleTreeHeader::from_bytes(bytes)?;
    header.config().validate_for::<HEIGHT>()?;
    let changelog_size = header.get_max_buffer_size() as usize;

    let expected_size = merkle_tree_account_size(HEIGHT, changelog_size);
    if bytes.len() < expected_size {
        return Err(ConcurrentMerkleTreeError::BufferSize(
            expected_size,
            bytes.len(),
        ));
    }

    let mut offset = CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1;
    let sequence_number = read_u64_at(bytes, &mut offset);
    let active_index = read_u64_at(bytes, &mut offset);
    let buffer_len = read_u64_at(bytes, &mut offset);
    check_changelog_counters(sequence_number, active_index, buffer_len, changelog_size)?;
    let active_index = active_index as usize;

    let entries_offset = offset;
    let entries = (0..buffer_len)
        .map(|_| read_entry::<HEIGHT>(bytes, &mut offset))
        .collect();
    offset = entries_offset + changelog_size * ChangelogEntry::<HEIGHT>::size_in_account();
    let changelog = ChangelogBuffer::from_entries(entries, changelog_size, active_index)?;
    if changelog.active().sequence_number != sequence_number {
        return Err(ConcurrentMerkleTreeError::CorruptedChangelog);
    }

    let rightmost_proof = std::array::from_fn(|_| read_array_at(bytes, &mut offset));
    let rightmost_leaf = read_array_at(bytes, &mut offset);
    let next_index = read_u64_at(bytes, &mut offset);
    if next_index > 1u64 << HEIGHT {
        return Err(ConcurrentMerkleTreeError::CorruptedChangelog);
    }

    let tree = ConcurrentMerkleTree {
        sequence_number,
        changelog,
        next_index,
        rightmost_proof,
        rightmost_leaf,
        _hasher: std::marker::PhantomData,
    };
    Ok((header, tree))
}

/// Fields of a serialized tree which can be read without knowing its height
/// at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeSummary {
    pub header: ConcurrentMerkleTreeHeader,
    pub sequence_number: u64,
    pub active_index: u64,
    pub buffer_len: u64,
    pub root: [u8; 32],
    pub rightmost_leaf: [u8; 32],
    pub next_index: u64,
}

impl TreeSummary {
    pub fn max_depth(&self) -> u32 {
        self.header.get_max_depth()
    }

    pub fn max_buffer_size(&self) -> u32 {
        self.header.get_max_buffer_size()
    }

    /// Number of leaves which can still be appended.
    pub fn remaining_capacity(&self) -> u64 {
        (1u64 << self.max_depth()).saturating_sub(self.next_index)
    }
}

/// Reads the header, the current root and the counters of a serialized tree.
pub fn read_tree_summary(bytes: &[u8]) -> Result<TreeSummary, ConcurrentMerkleTreeError> {
    let header = ConcurrentMerkleTreeHeader::from_bytes(bytes)?;
    let height = header.get_max_depth() as usize;
    let changelog_size = header.get_max_buffer_size() as usize;

    let expected_size = merkle_tree_account_size(height, changelog_size);
    if bytes.len() < expected_size {
        return Err(ConcurrentMerkleTreeError::BufferSize(
            expected_size,
            bytes.len(),
        ));
    }

    let mut offset = CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1;
    let sequence_number = read_u64_at(bytes, &mut offset);
    let active_index = read_u64_at(bytes, &mut offset);
    let buffer_len = read_u64_at(bytes, &mut offset);
    check_changelog_counters(sequence_number, active_index, buffer_len, changelog_size)?;

    let entry_size = 32 + 32 * height + 4 + 4 + 8;
    let mut root_offset = offset + active_index as usize * entry_size;
    let root = read_array_at(bytes, &mut root_offset);

    let mut offset = offset + changelog_size * entry_size + 32 * height;
    let rightmost_leaf = read_array_at(bytes, &mut offset);
    let next_index = read_u64_at(bytes, &mut offset);

    Ok(TreeSummary {
        header,
        sequence_number,
        active_index,
        buffer_len,
        root,
        rightmost_leaf,
        next_index,
    })
}

#[cfg(test)]
mod test {
    use compression_hasher::Keccak;

    use super::*;

    #[test]
    fn test_header_layout() {
        let config = ConcurrentMerkleTreeConfig::new(14, 64)
            .with_authority([3u8; 32])
            .with_creation_slot(0x0102);
        let header = ConcurrentMerkleTreeHeader::new(&config);
        let bytes = header.to_bytes().unwrap();

        assert_eq!(bytes.len(), CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1);
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[1], 0);
        assert_eq!(&bytes[2..6], &64u32.to_le_bytes());
        assert_eq!(&bytes[6..10], &14u32.to_le_bytes());
        assert_eq!(&bytes[10..42], &[3u8; 32]);
        assert_eq!(&bytes[42..50], &0x0102u64.to_le_bytes());
        assert_eq!(&bytes[50..], &[0u8; 6]);

        let decoded = ConcurrentMerkleTreeHeader::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.config(), config);
    }

    #[test]
    fn test_header_rejects_invalid() {
        let header = ConcurrentMerkleTreeHeader::new(&ConcurrentMerkleTreeConfig::default());
        let bytes = header.to_bytes().unwrap();

        assert_eq!(
            ConcurrentMerkleTreeHeader::from_bytes(&bytes[..10]),
            Err(ConcurrentMerkleTreeError::BufferSize(56, 10))
        );

        let mut uninitialized = bytes.clone();
        uninitialized[0] = 0;
        assert_eq!(
            ConcurrentMerkleTreeHeader::from_bytes(&uninitialized),
            Err(ConcurrentMerkleTreeError::InvalidAccountType(0))
        );

        let mut future_version = bytes.clone();
        future_version[1] = 1;
        assert_eq!(
            ConcurrentMerkleTreeHeader::from_bytes(&future_version),
            Err(ConcurrentMerkleTreeError::UnsupportedHeaderVersion(1))
        );

        let mut too_deep = bytes;
        too_deep[6..10].copy_from_slice(&31u32.to_le_bytes());
        assert_eq!(
            ConcurrentMerkleTreeHeader::from_bytes(&too_deep),
            Err(ConcurrentMerkleTreeError::HeightHigherThanMax(31, 30))
        );
    }

    #[test]
    fn test_account_size() {
        // 24 + 64 * (32 + 14 * 32 + 16) + 14 * 32 + 32 + 8
        assert_eq!(tree_body_size(14, 64), 32_256);
        assert_eq!(merkle_tree_account_size(14, 64), 32_312);
        assert_eq!(
            merkle_tree_account_size(3, 8),
            56 + 24 + 8 * ChangelogEntry::<3>::size_in_account() + 3 * 32 + 32 + 8
        );
    }

    #[test]
    fn test_tree_bytes() {
        let config = ConcurrentMerkleTreeConfig::new(3, 4);
        let header = ConcurrentMerkleTreeHeader::new(&config);
        let mut tree = ConcurrentMerkleTree::<Keccak, 3>::from_config(&config).unwrap();
        for i in 0..6u8 {
            tree.append(&[i + 1; 32]).unwrap();
        }

        let bytes = tree_to_bytes(&header, &tree).unwrap();
        assert_eq!(bytes.len(), merkle_tree_account_size(3, 4));

        let (decoded_header, decoded_tree) = tree_from_bytes::<Keccak, 3>(&bytes).unwrap();
        assert_eq!(decoded_header, header);
        assert_eq!(decoded_tree, tree);

        let summary = read_tree_summary(&bytes).unwrap();
        assert_eq!(summary.root, tree.root());
        assert_eq!(summary.sequence_number, 6);
        assert_eq!(summary.active_index, 2);
        assert_eq!(summary.buffer_len, 4);
        assert_eq!(summary.next_index, 6);
        assert_eq!(summary.rightmost_leaf, [6u8; 32]);
        assert_eq!(summary.remaining_capacity(), 2);

        assert_eq!(
            tree_from_bytes::<Keccak, 4>(&bytes),
            Err(ConcurrentMerkleTreeError::HeightMismatch(4, 3))
        );
        assert_eq!(
            tree_from_bytes::<Keccak, 3>(&bytes[..bytes.len() - 1]),
            Err(ConcurrentMerkleTreeError::BufferSize(
                bytes.len(),
                bytes.len() - 1
            ))
        );
    }

    fn write_u64(bytes: &mut [u8], field: usize, value: u64) {
        let offset = CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1 + field * 8;
        bytes[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_rejects_rewound_counters() {
        let config = ConcurrentMerkleTreeConfig::new(3, 8);
        let header = ConcurrentMerkleTreeHeader::new(&config);
        let mut tree = ConcurrentMerkleTree::<Keccak, 3>::from_config(&config).unwrap();
        for i in 0..3u8 {
            tree.append(&[i + 1; 32]).unwrap();
        }
        let bytes = tree_to_bytes(&header, &tree).unwrap();

        // Sequence number and active slot rewound to the first entry.
        let mut rewound = bytes.clone();
        write_u64(&mut rewound, 0, 0);
        write_u64(&mut rewound, 1, 0);
        assert_eq!(
            tree_from_bytes::<Keccak, 3>(&rewound),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );
        assert_eq!(
            read_tree_summary(&rewound),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );

        // Active slot pointing away from `sequence_number % buffer size`.
        let mut wrong_slot = bytes.clone();
        write_u64(&mut wrong_slot, 1, 1);
        assert_eq!(
            tree_from_bytes::<Keccak, 3>(&wrong_slot),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );

        // Fewer written slots than changes since creation.
        let mut short = bytes.clone();
        write_u64(&mut short, 2, 2);
        assert_eq!(
            tree_from_bytes::<Keccak, 3>(&short),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );

        let (_, mut decoded) = tree_from_bytes::<Keccak, 3>(&bytes).unwrap();
        let entry = decoded.append(&[4u8; 32]).unwrap();
        assert_eq!(entry.root, decoded.root());
        assert_eq!(decoded.changelog().active().sequence_number, 4);
    }

    #[test]
    fn test_corrupted_sequence_number() {
        let config = ConcurrentMerkleTreeConfig::new(3, 4);
        let header = ConcurrentMerkleTreeHeader::new(&config);
        let mut tree = ConcurrentMerkleTree::<Keccak, 3>::from_config(&config).unwrap();
        tree.append(&[1u8; 32]).unwrap();

        let mut bytes = tree_to_bytes(&header, &tree).unwrap();
        bytes[CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1] = 7;
        assert_eq!(
            tree_from_bytes::<Keccak, 3>(&bytes),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );
    }
}
