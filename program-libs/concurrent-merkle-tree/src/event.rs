use borsh::{BorshDeserialize, BorshSerialize};

use crate::changelog::ChangelogEntry;

/// Node of the Merkle path with an index representing the position in a
/// non-sparse Merkle tree.
///
/// Nodes are numbered level by level starting from the root (`1`), so the
/// children of node `i` are `2i` and `2i + 1` and the leaves of a tree with
/// height `h` occupy `2^h..2^(h+1)`.
#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PathNode {
    pub node: [u8; 32],
    pub index: u32,
}

impl PathNode {
    /// Length of the wire format: `node | index (u32 LE)`.
    pub const LEN: usize = 36;

    pub fn new(node: [u8; 32], index: u32) -> Self {
        Self { node, index }
    }

    /// Index of the node at `level` (leaves are at level 0) on the path of
    /// `leaf_index` in a tree with the given `height`.
    ///
    /// Trees are at most 30 levels deep, so the index always fits in `u32`.
    pub fn index_of(height: usize, level: usize, leaf_index: u32) -> u32 {
        ((1u64 << (height - level)) + (u64::from(leaf_index) >> level)) as u32
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[..32].copy_from_slice(&self.node);
        bytes[32..].copy_from_slice(&self.index.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        let mut node = [0u8; 32];
        node.copy_from_slice(&bytes[..32]);
        let mut index = [0u8; 4];
        index.copy_from_slice(&bytes[32..]);
        Self {
            node,
            index: u32::from_le_bytes(index),
        }
    }
}

/// Event containing the Merkle path of a single tree change. Indexers can
/// use this type of events to re-build a non-sparse version of the tree.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum ChangelogEvent {
    V1(ChangelogEventV1),
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
pub struct ChangelogEventV1 {
    /// Public key of the tree.
    pub id: [u8; 32],
    /// Merkle path, from the leaf up to the root (inclusive).
    pub path: Vec<PathNode>,
    /// Number of successful operations on the tree.
    pub seq: u64,
    /// Index of the modified leaf.
    pub index: u32,
}

impl ChangelogEventV1 {
    pub fn new<const HEIGHT: usize>(id: [u8; 32], entry: &ChangelogEntry<HEIGHT>) -> Self {
        Self {
            id,
            path: entry
                .path_nodes()
                .into_iter()
                .chain(std::iter::once(PathNode::new(entry.root, 1)))
                .collect(),
            seq: entry.sequence_number,
            index: entry.index,
        }
    }

    pub fn leaf(&self) -> Option<&PathNode> {
        self.path.first()
    }

    pub fn root(&self) -> Option<&PathNode> {
        self.path.last()
    }
}

impl<const HEIGHT: usize> From<(&[u8; 32], &ChangelogEntry<HEIGHT>)> for ChangelogEvent {
    fn from((id, entry): (&[u8; 32], &ChangelogEntry<HEIGHT>)) -> Self {
        ChangelogEvent::V1(ChangelogEventV1::new(*id, entry))
    }
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum ApplicationDataEvent {
    V1(ApplicationDataEventV1),
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
pub struct ApplicationDataEventV1 {
    pub application_data: Vec<u8>,
}

/// Everything emitted through the noop program.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum AccountCompressionEvent {
    ChangeLog(ChangelogEvent),
    ApplicationData(ApplicationDataEvent),
}
