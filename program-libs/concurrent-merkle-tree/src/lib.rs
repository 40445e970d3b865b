use std::marker::PhantomData;

pub use compression_bounded_vec;
pub use compression_hasher;
use compression_hasher::Hasher;
use tracing::{debug, trace};

pub mod account;
pub mod changelog;
pub mod config;
pub mod errors;
pub mod event;
pub mod hash;
pub mod offset;

use crate::{
    changelog::{rebase_proof, ChangelogBuffer, ChangelogEntry},
    config::{ConcurrentMerkleTreeConfig, MAX_CHANGELOG_SIZE, MAX_HEIGHT},
    errors::{ConcurrentMerkleTreeError, ErrorKind},
    hash::{compute_parent_node, compute_root},
};

/// [Concurrent Merkle tree](https://drive.google.com/file/d/1BOpa5OFmara50fTvL0VIVYjtg-qzHCVc/view)
/// which allows for multiple requests of updating leaves, without making any
/// of the requests invalid, as long as they are not:
///
/// * Modyfing the same leaf.
/// * Exceeding the capacity of the changelog.
///
/// When any of the above happens, some of the concurrent requests are going to
/// be invalid, forcing the clients to re-generate the Merkle proof. But that's
/// still better than having such a failure after any update happening in the
/// middle of requesting the update.
///
/// The tree doesn't store its leaves. Every change is validated against the
/// current root, or against one of the roots kept in the changelog, in which
/// case the proof gets fast-forwarded over the newer changes first.
pub struct ConcurrentMerkleTree<H, const HEIGHT: usize>
where
    H: Hasher,
{
    /// Number of successful operations on the tree.
    pub(crate) sequence_number: u64,
    /// History of changes, the newest entry holds the current root.
    pub(crate) changelog: ChangelogBuffer<HEIGHT>,
    /// Index of the first leaf which was never written.
    pub(crate) next_index: u64,
    /// Merkle proof of the leaf under `next_index - 1`.
    pub(crate) rightmost_proof: [[u8; 32]; HEIGHT],
    /// Leaf under `next_index - 1`.
    pub(crate) rightmost_leaf: [u8; 32],

    _hasher: PhantomData<H>,
}

pub type ConcurrentMerkleTree14<H> = ConcurrentMerkleTree<H, 14>;
pub type ConcurrentMerkleTree20<H> = ConcurrentMerkleTree<H, 20>;
pub type ConcurrentMerkleTree24<H> = ConcurrentMerkleTree<H, 24>;
pub type ConcurrentMerkleTree26<H> = ConcurrentMerkleTree<H, 26>;
pub type ConcurrentMerkleTree30<H> = ConcurrentMerkleTree<H, 30>;

impl<H, const HEIGHT: usize> Clone for ConcurrentMerkleTree<H, HEIGHT>
where
    H: Hasher,
{
    fn clone(&self) -> Self {
        Self {
            sequence_number: self.sequence_number,
            changelog: self.changelog.clone(),
            next_index: self.next_index,
            rightmost_proof: self.rightmost_proof,
            rightmost_leaf: self.rightmost_leaf,
            _hasher: PhantomData,
        }
    }
}

impl<H, const HEIGHT: usize> std::fmt::Debug for ConcurrentMerkleTree<H, HEIGHT>
where
    H: Hasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentMerkleTree")
            .field("height", &HEIGHT)
            .field("sequence_number", &self.sequence_number)
            .field("next_index", &self.next_index)
            .field("root", &self.root())
            .field("changelog", &self.changelog)
            .finish()
    }
}

impl<H, const HEIGHT: usize> PartialEq for ConcurrentMerkleTree<H, HEIGHT>
where
    H: Hasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.sequence_number == other.sequence_number
            && self.changelog == other.changelog
            && self.next_index == other.next_index
            && self.rightmost_proof == other.rightmost_proof
            && self.rightmost_leaf == other.rightmost_leaf
    }
}

impl<H, const HEIGHT: usize> ConcurrentMerkleTree<H, HEIGHT>
where
    H: Hasher,
{
    /// Creates an empty tree with a changelog of `changelog_size` entries.
    pub fn new(changelog_size: usize) -> Result<Self, ConcurrentMerkleTreeError> {
        if HEIGHT == 0 {
            return Err(ConcurrentMerkleTreeError::HeightZero);
        }
        if HEIGHT > MAX_HEIGHT {
            return Err(ConcurrentMerkleTreeError::HeightHigherThanMax(
                HEIGHT, MAX_HEIGHT,
            ));
        }
        if changelog_size == 0 {
            return Err(ConcurrentMerkleTreeError::ChangelogZero);
        }
        if changelog_size > MAX_CHANGELOG_SIZE {
            return Err(ConcurrentMerkleTreeError::ChangelogHigherThanMax(
                changelog_size,
                MAX_CHANGELOG_SIZE,
            ));
        }

        let zero_bytes = H::zero_bytes();
        let empty_path: [[u8; 32]; HEIGHT] = std::array::from_fn(|level| zero_bytes[level]);
        let initial_entry = ChangelogEntry::new(zero_bytes[HEIGHT], empty_path, 0, 0);

        Ok(Self {
            sequence_number: 0,
            changelog: ChangelogBuffer::new(changelog_size, initial_entry)?,
            next_index: 0,
            rightmost_proof: empty_path,
            rightmost_leaf: zero_bytes[0],
            _hasher: PhantomData,
        })
    }

    /// Creates an empty tree from a validated `config`, which has to describe
    /// a tree with height `HEIGHT`.
    pub fn from_config(config: &ConcurrentMerkleTreeConfig) -> Result<Self, ConcurrentMerkleTreeError> {
        config.validate_for::<HEIGHT>()?;
        Self::new(config.max_buffer_size as usize)
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Maximum number of leaves.
    pub fn capacity(&self) -> u64 {
        1u64 << HEIGHT
    }

    /// Returns the current root.
    pub fn root(&self) -> [u8; 32] {
        self.changelog.active().root
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn rightmost_leaf(&self) -> [u8; 32] {
        self.rightmost_leaf
    }

    pub fn rightmost_proof(&self) -> &[[u8; 32]; HEIGHT] {
        &self.rightmost_proof
    }

    pub fn changelog(&self) -> &ChangelogBuffer<HEIGHT> {
        &self.changelog
    }

    /// Slot of the changelog holding the current root.
    pub fn changelog_index(&self) -> usize {
        self.changelog.active_index()
    }

    pub fn changelog_capacity(&self) -> usize {
        self.changelog.capacity()
    }

    /// Whether changes older than the changelog were already evicted.
    fn history_evicted(&self) -> bool {
        self.sequence_number >= self.changelog.capacity() as u64
    }

    /// Checks the shape of the request and converts `proof` to an array.
    fn check_request(
        &self,
        leaf_index: u32,
        proof: &[[u8; 32]],
    ) -> Result<[[u8; 32]; HEIGHT], ConcurrentMerkleTreeError> {
        if u64::from(leaf_index) >= self.capacity() {
            return Err(ConcurrentMerkleTreeError::LeafIndexOutOfBounds(
                leaf_index,
                self.capacity(),
            ));
        }
        <[[u8; 32]; HEIGHT]>::try_from(proof)
            .map_err(|_| ConcurrentMerkleTreeError::ProofLength(HEIGHT, proof.len()))
    }

    /// Checks whether the given Merkle `proof` for the given `leaf` (with
    /// index `leaf_index`) is valid against the current root.
    pub fn validate_proof(
        &self,
        leaf: &[u8; 32],
        leaf_index: u32,
        proof: &[[u8; 32]],
    ) -> Result<(), ConcurrentMerkleTreeError> {
        let proof = self.check_request(leaf_index, proof)?;
        let expected_root = self.root();
        let computed_root = compute_root::<H>(leaf, leaf_index, &proof)?;
        if computed_root == expected_root {
            Ok(())
        } else {
            Err(ConcurrentMerkleTreeError::InvalidProof(
                expected_root,
                computed_root,
            ))
        }
    }

    /// Returns a proof of `leaf` valid against the current root.
    ///
    /// A proof valid against the current root is returned as is. A proof
    /// valid against one of the older roots in the changelog gets
    /// fast-forwarded over the newer changes, unless one of them modified
    /// the same leaf.
    fn find_valid_proof(
        &self,
        leaf_index: u32,
        leaf: &[u8; 32],
        proof: [[u8; 32]; HEIGHT],
    ) -> Result<[[u8; 32]; HEIGHT], ConcurrentMerkleTreeError> {
        let current_root = self.root();
        let claimed_root = compute_root::<H>(leaf, leaf_index, &proof)?;
        if claimed_root == current_root {
            return Ok(proof);
        }

        let Some(slot) = self.changelog.slot_with_root(&claimed_root) else {
            if self.history_evicted() {
                debug!(
                    leaf_index,
                    sequence_number = self.sequence_number,
                    "root of the proof is not in the changelog"
                );
                return Err(ConcurrentMerkleTreeError::StaleProof);
            }
            return Err(ConcurrentMerkleTreeError::InvalidProof(
                current_root,
                claimed_root,
            ));
        };

        let rebased_proof = rebase_proof(&self.changelog, slot, leaf_index, leaf, &proof)?;
        let rebased_root = compute_root::<H>(leaf, leaf_index, &rebased_proof)?;
        if rebased_root != current_root {
            return Err(ConcurrentMerkleTreeError::InvalidProof(
                current_root,
                rebased_root,
            ));
        }
        debug!(
            leaf_index,
            from_sequence_number = self.changelog.get(slot).map(|e| e.sequence_number),
            to_sequence_number = self.sequence_number,
            "fast-forwarded proof"
        );
        Ok(rebased_proof)
    }

    /// Checks whether `leaf` is stored under `leaf_index`. The `proof` may be
    /// valid against any root kept in the changelog.
    pub fn verify_leaf(
        &self,
        leaf_index: u32,
        leaf: &[u8; 32],
        proof: &[[u8; 32]],
    ) -> Result<(), ConcurrentMerkleTreeError> {
        let proof = self.check_request(leaf_index, proof)?;
        self.find_valid_proof(leaf_index, leaf, proof)?;
        Ok(())
    }

    /// Returns the Merkle proof for the leaf under `next_index`.
    ///
    /// Below the lowest level at which the paths of `next_index` and
    /// `next_index - 1` meet, all siblings are empty subtrees. At that level
    /// the sibling is the node on the path of the rightmost leaf. Above it
    /// both leaves share the proof.
    fn append_proof(&self) -> Result<[[u8; 32]; HEIGHT], ConcurrentMerkleTreeError> {
        let zero_bytes = H::zero_bytes();
        if self.next_index == 0 {
            return Ok(std::array::from_fn(|level| zero_bytes[level]));
        }

        let rightmost_index = (self.next_index - 1) as u32;
        let intersection_index = self.next_index.trailing_zeros() as usize;
        let mut proof = self.rightmost_proof;
        let mut intersection_node = self.rightmost_leaf;
        for (level, node) in proof.iter_mut().enumerate().take(intersection_index) {
            intersection_node = compute_parent_node::<H>(
                &intersection_node,
                &self.rightmost_proof[level],
                rightmost_index,
                level,
            )?;
            *node = zero_bytes[level];
        }
        proof[intersection_index] = intersection_node;
        Ok(proof)
    }

    /// Keeps the rightmost proof and leaf up to date with the change
    /// described by `changelog_entry`, which wrote `new_leaf` using `proof`.
    fn update_rightmost(
        &mut self,
        changelog_entry: &ChangelogEntry<HEIGHT>,
        new_leaf: &[u8; 32],
        proof: &[[u8; 32]; HEIGHT],
    ) {
        let leaf_index = u64::from(changelog_entry.index);
        if leaf_index >= self.next_index {
            self.rightmost_proof = *proof;
            self.rightmost_leaf = *new_leaf;
            self.next_index = leaf_index + 1;
        } else if leaf_index + 1 == self.next_index {
            self.rightmost_leaf = *new_leaf;
        } else {
            let mut rightmost_leaf = self.rightmost_leaf;
            changelog_entry.update_proof(
                (self.next_index - 1) as u32,
                &mut rightmost_leaf,
                &mut self.rightmost_proof,
            );
        }
    }

    /// Writes `new_leaf` under `leaf_index`.
    ///
    /// 1. Computes the new path and root from `new_leaf` and Merkle proof
    ///    (`proof`).
    /// 2. Updates the rightmost proof and leaf.
    /// 3. Stores the new path as the newest changelog entry and increments
    ///    the sequence number.
    ///
    /// # Validation
    ///
    /// This method doesn't validate the proof. Caller is responsible for
    /// doing that before.
    fn update_leaf_in_tree(
        &mut self,
        new_leaf: &[u8; 32],
        leaf_index: u32,
        proof: &[[u8; 32]; HEIGHT],
    ) -> Result<ChangelogEntry<HEIGHT>, ConcurrentMerkleTreeError> {
        let mut node = *new_leaf;
        let mut changelog_path = [[0u8; 32]; HEIGHT];

        for (level, sibling) in proof.iter().enumerate() {
            changelog_path[level] = node;
            node = compute_parent_node::<H>(&node, sibling, leaf_index, level)?;
        }

        let sequence_number = self
            .sequence_number
            .checked_add(1)
            .ok_or(ConcurrentMerkleTreeError::IntegerOverflow)?;
        let changelog_entry = ChangelogEntry::new(node, changelog_path, leaf_index, sequence_number);

        self.update_rightmost(&changelog_entry, new_leaf, proof);
        self.changelog.push(changelog_entry);
        self.sequence_number = sequence_number;

        trace!(
            leaf_index,
            sequence_number,
            active_index = self.changelog.active_index(),
            "tree updated"
        );

        Ok(changelog_entry)
    }

    /// Replaces the `old_leaf` under the `leaf_index` with a `new_leaf`,
    /// using the given `proof`, which has to be valid against the current
    /// root or one of the roots kept in the changelog.
    pub fn update(
        &mut self,
        leaf_index: u32,
        old_leaf: &[u8; 32],
        new_leaf: &[u8; 32],
        proof: &[[u8; 32]],
    ) -> Result<ChangelogEntry<HEIGHT>, ConcurrentMerkleTreeError> {
        let proof = self.check_request(leaf_index, proof)?;
        let proof = self.find_valid_proof(leaf_index, old_leaf, proof)?;
        self.update_leaf_in_tree(new_leaf, leaf_index, &proof)
    }

    /// Appends a new leaf to the tree.
    pub fn append(
        &mut self,
        leaf: &[u8; 32],
    ) -> Result<ChangelogEntry<HEIGHT>, ConcurrentMerkleTreeError> {
        if self.next_index >= self.capacity() {
            return Err(ConcurrentMerkleTreeError::TreeFull);
        }
        let leaf_index = self.next_index as u32;
        let proof = self.append_proof()?;
        self.update_leaf_in_tree(leaf, leaf_index, &proof)
    }

    /// Appends a batch of new leaves to the tree. Fails without appending
    /// anything when the batch doesn't fit.
    pub fn append_batch(
        &mut self,
        leaves: &[&[u8; 32]],
    ) -> Result<Vec<ChangelogEntry<HEIGHT>>, ConcurrentMerkleTreeError> {
        let last_index = self
            .next_index
            .checked_add(leaves.len() as u64)
            .ok_or(ConcurrentMerkleTreeError::IntegerOverflow)?;
        if last_index > self.capacity() {
            return Err(ConcurrentMerkleTreeError::TreeFull);
        }
        leaves.iter().map(|leaf| self.append(leaf)).collect()
    }

    /// Writes `leaf` under `leaf_index` if that slot is empty (holds the zero
    /// leaf), proven by `proof`. Otherwise appends `leaf` to the tree.
    ///
    /// Leaves at or beyond `next_index` were never written, so a failed proof
    /// for them is returned as an error instead of falling back to append.
    pub fn insert_or_append(
        &mut self,
        leaf_index: u32,
        leaf: &[u8; 32],
        proof: &[[u8; 32]],
    ) -> Result<ChangelogEntry<HEIGHT>, ConcurrentMerkleTreeError> {
        let proof = self.check_request(leaf_index, proof)?;
        let empty_leaf = H::zero_bytes()[0];
        match self.find_valid_proof(leaf_index, &empty_leaf, proof) {
            Ok(proof) => self.update_leaf_in_tree(leaf, leaf_index, &proof),
            Err(e)
                if u64::from(leaf_index) < self.next_index
                    && matches!(e.kind(), ErrorKind::InvalidProof | ErrorKind::StaleProof) =>
            {
                debug!(leaf_index, error = %e, "leaf is not empty, appending");
                self.append(leaf)
            }
            Err(e) => Err(e),
        }
    }
}
