use compression_bounded_vec::CyclicBoundedVec;

use crate::{errors::ConcurrentMerkleTreeError, event::PathNode};

/// A single successful modification of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct ChangelogEntry<const HEIGHT: usize> {
    /// Root after the change.
    pub root: [u8; 32],
    /// Nodes on the path of the modified leaf after the change, from the leaf
    /// (`path[0]`) up to the child of the root.
    pub path: [[u8; 32]; HEIGHT],
    /// Index of the affected leaf.
    pub index: u32,
    /// Sequence number of the tree after the change.
    pub sequence_number: u64,
}

pub type ChangelogEntry14 = ChangelogEntry<14>;
pub type ChangelogEntry20 = ChangelogEntry<20>;
pub type ChangelogEntry24 = ChangelogEntry<24>;
pub type ChangelogEntry26 = ChangelogEntry<26>;
pub type ChangelogEntry30 = ChangelogEntry<30>;

impl<const HEIGHT: usize> ChangelogEntry<HEIGHT> {
    pub fn new(root: [u8; 32], path: [[u8; 32]; HEIGHT], index: u32, sequence_number: u64) -> Self {
        Self {
            root,
            path,
            index,
            sequence_number,
        }
    }

    /// Number of bytes an entry takes in the account:
    /// `root | path | index (u32) | padding (u32) | sequence_number (u64)`.
    pub const fn size_in_account() -> usize {
        32 + 32 * HEIGHT + 4 + 4 + 8
    }

    /// Returns an intersection index in the changelog entry which affects the
    /// provided path.
    ///
    /// Determining it can be done by taking a XOR of the leaf index (which was
    /// directly updated in the changelog entry) and the leaf index we are
    /// trying to update. The highest set bit is the level at which both paths
    /// meet, so the sibling of `leaf_index` at that level is a node on the path
    /// of this entry.
    ///
    /// For example, for the tree with height 4, update attempt of leaf under
    /// index 2 and changelog affecting index 4, critbit would be:
    ///
    /// 2 ^ 4 = 0b_0010 ^ 0b_0100 = 0b_0110 -> 2
    ///
    /// `leaf_index` must differ from `self.index`.
    pub fn intersection_index(&self, leaf_index: u32) -> usize {
        let diff = leaf_index ^ self.index;
        (u32::BITS - diff.leading_zeros() - 1) as usize
    }

    /// Whether the path of this entry shares any node below the root with the
    /// path of `leaf_index`.
    pub fn touches(&self, leaf_index: u32) -> bool {
        HEIGHT > 0 && (self.index >> (HEIGHT - 1)) == (leaf_index >> (HEIGHT - 1))
    }

    /// Replays this change on top of a proof for `leaf_index`.
    ///
    /// For a different leaf, the sibling at the intersection level gets
    /// replaced with the node written by this change. For the same leaf, the
    /// expected `leaf` value becomes the one written by this change.
    pub fn update_proof(
        &self,
        leaf_index: u32,
        leaf: &mut [u8; 32],
        proof: &mut [[u8; 32]; HEIGHT],
    ) {
        if leaf_index != self.index {
            let intersection_index = self.intersection_index(leaf_index);
            proof[intersection_index] = self.path[intersection_index];
        } else {
            *leaf = self.path[0];
        }
    }

    /// Nodes of the path with their node indices, one per level, ordered
    /// from the leaf up to the child of the root.
    pub fn path_nodes(&self) -> [PathNode; HEIGHT] {
        std::array::from_fn(|level| {
            PathNode::new(
                self.path[level],
                PathNode::index_of(HEIGHT, level, self.index),
            )
        })
    }
}

/// Ring buffer of the most recent [`ChangelogEntry`]s.
///
/// The entry with sequence number `s` lives in slot `s % capacity`. The buffer
/// is never empty: a tree seeds it with the entry describing the empty tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangelogBuffer<const HEIGHT: usize> {
    entries: CyclicBoundedVec<ChangelogEntry<HEIGHT>>,
}

impl<const HEIGHT: usize> ChangelogBuffer<HEIGHT> {
    pub fn new(
        capacity: usize,
        initial: ChangelogEntry<HEIGHT>,
    ) -> Result<Self, ConcurrentMerkleTreeError> {
        let mut entries = CyclicBoundedVec::with_capacity(capacity)?;
        entries.push(initial);
        Ok(Self { entries })
    }

    /// Restores a buffer from its written slots, as stored in an account.
    pub fn from_entries(
        entries: Vec<ChangelogEntry<HEIGHT>>,
        capacity: usize,
        active_index: usize,
    ) -> Result<Self, ConcurrentMerkleTreeError> {
        if entries.is_empty() {
            return Err(ConcurrentMerkleTreeError::CorruptedChangelog);
        }
        if capacity > 0
            && entries
                .iter()
                .enumerate()
                .any(|(slot, entry)| entry.sequence_number % capacity as u64 != slot as u64)
        {
            return Err(ConcurrentMerkleTreeError::CorruptedChangelog);
        }
        let entries = CyclicBoundedVec::from_parts(entries, capacity, active_index)?;
        Ok(Self { entries })
    }

    pub fn push(&mut self, entry: ChangelogEntry<HEIGHT>) {
        debug_assert_eq!(
            entry.sequence_number,
            self.active().sequence_number + 1,
            "changelog entries have to be pushed in sequence order"
        );
        self.entries.push(entry);
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot of the newest entry.
    pub fn active_index(&self) -> usize {
        self.entries.last_index()
    }

    /// The newest entry.
    pub fn active(&self) -> &ChangelogEntry<HEIGHT> {
        &self.entries[self.entries.last_index()]
    }

    pub fn get(&self, slot: usize) -> Option<&ChangelogEntry<HEIGHT>> {
        self.entries.get(slot)
    }

    /// Physical slots, in slot order.
    pub fn as_slice(&self) -> &[ChangelogEntry<HEIGHT>] {
        self.entries.as_slice()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &ChangelogEntry<HEIGHT>> {
        self.entries.iter_rev()
    }

    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &ChangelogEntry<HEIGHT>> {
        self.entries.iter()
    }

    /// Entries whose path shares a node below the root with `leaf_index`,
    /// newest first.
    pub fn lookup(&self, leaf_index: u32) -> impl Iterator<Item = &ChangelogEntry<HEIGHT>> {
        self.iter_newest_first()
            .filter(move |entry| entry.touches(leaf_index))
    }

    /// Slot of the newest entry with the given `root`.
    pub fn slot_with_root(&self, root: &[u8; 32]) -> Option<usize> {
        let capacity = self.capacity();
        let active_index = self.active_index();
        self.iter_newest_first()
            .position(|entry| entry.root == *root)
            .map(|age| (active_index + capacity - age) % capacity)
    }

    /// Entries newer than the one in `slot`, oldest first.
    pub fn entries_after(&self, slot: usize) -> impl Iterator<Item = &ChangelogEntry<HEIGHT>> {
        let (start, is_active) = if slot == self.active_index() {
            (slot, true)
        } else {
            ((slot + 1) % self.capacity(), false)
        };
        self.entries
            .iter_from(start)
            .skip(usize::from(is_active))
    }
}

/// Fast-forwards `proof` of `leaf` (at `leaf_index`), which was valid against
/// the root of the entry in `from_slot`, over all newer entries.
///
/// Neither `changelog` nor `proof` is modified. Fails with
/// [`ConcurrentMerkleTreeError::LeafModified`] when a newer entry replaced the
/// leaf with a different value.
pub fn rebase_proof<const HEIGHT: usize>(
    changelog: &ChangelogBuffer<HEIGHT>,
    from_slot: usize,
    leaf_index: u32,
    leaf: &[u8; 32],
    proof: &[[u8; 32]; HEIGHT],
) -> Result<[[u8; 32]; HEIGHT], ConcurrentMerkleTreeError> {
    let mut updated_leaf = *leaf;
    let mut updated_proof = *proof;
    for entry in changelog.entries_after(from_slot) {
        entry.update_proof(leaf_index, &mut updated_leaf, &mut updated_proof);
    }
    if updated_leaf != *leaf {
        return Err(ConcurrentMerkleTreeError::LeafModified(leaf_index));
    }
    Ok(updated_proof)
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry<const HEIGHT: usize>(index: u32, sequence_number: u64) -> ChangelogEntry<HEIGHT> {
        let mut path = [[0u8; 32]; HEIGHT];
        for (level, node) in path.iter_mut().enumerate() {
            node[0] = sequence_number as u8;
            node[1] = level as u8;
        }
        ChangelogEntry::new([sequence_number as u8; 32], path, index, sequence_number)
    }

    #[test]
    fn test_intersection_index() {
        let e = entry::<4>(4, 1);
        assert_eq!(e.intersection_index(2), 2);
        assert_eq!(e.intersection_index(5), 0);
        assert_eq!(e.intersection_index(6), 1);
        assert_eq!(e.intersection_index(12), 3);
    }

    #[test]
    fn test_touches() {
        let e = entry::<3>(1, 1);
        assert!(e.touches(0));
        assert!(e.touches(3));
        assert!(!e.touches(4));
        assert!(!e.touches(7));
    }

    #[test]
    fn test_update_proof() {
        let e = entry::<3>(1, 1);
        let mut leaf = [7u8; 32];
        let mut proof = [[9u8; 32]; 3];

        e.update_proof(0, &mut leaf, &mut proof);
        assert_eq!(proof[0], e.path[0]);
        assert_eq!(proof[1], [9u8; 32]);
        assert_eq!(leaf, [7u8; 32]);

        e.update_proof(1, &mut leaf, &mut proof);
        assert_eq!(leaf, e.path[0]);
    }

    #[test]
    fn test_path_nodes() {
        let e = entry::<3>(5, 1);
        let nodes = e.path_nodes();
        let indices: Vec<u32> = nodes.iter().map(|node| node.index).collect();
        assert_eq!(indices, vec![13, 6, 3]);
        assert_eq!(nodes[0].node, e.path[0]);
    }

    #[test]
    fn test_buffer_wraps() {
        let mut buffer = ChangelogBuffer::new(4, entry::<3>(0, 0)).unwrap();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.active_index(), 0);

        for sequence_number in 1..=9u64 {
            buffer.push(entry((sequence_number % 8) as u32, sequence_number));
            assert_eq!(buffer.active_index(), (sequence_number % 4) as usize);
            assert_eq!(buffer.active().sequence_number, sequence_number);
        }
        assert_eq!(buffer.len(), 4);

        let newest_first: Vec<u64> = buffer
            .iter_newest_first()
            .map(|e| e.sequence_number)
            .collect();
        assert_eq!(newest_first, vec![9, 8, 7, 6]);

        let oldest_first: Vec<u64> = buffer
            .iter_oldest_first()
            .map(|e| e.sequence_number)
            .collect();
        assert_eq!(oldest_first, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_from_entries_checks_slots() {
        let entries: Vec<ChangelogEntry<3>> = (4..8u64).map(|seq| entry(0, seq)).collect();
        let buffer = ChangelogBuffer::from_entries(entries.clone(), 4, 3).unwrap();
        assert_eq!(buffer.active().sequence_number, 7);

        // Entry with sequence number 5 stored in slot 0.
        let shifted: Vec<ChangelogEntry<3>> = (5..9u64).map(|seq| entry(0, seq)).collect();
        assert_eq!(
            ChangelogBuffer::from_entries(shifted, 4, 3),
            Err(ConcurrentMerkleTreeError::CorruptedChangelog)
        );

        // Not wrapped yet, the newest entry has to be in the last written slot.
        let partial: Vec<ChangelogEntry<3>> = (0..2u64).map(|seq| entry(0, seq)).collect();
        assert!(matches!(
            ChangelogBuffer::from_entries(partial, 4, 0),
            Err(ConcurrentMerkleTreeError::BoundedVec(_))
        ));
        assert!(ChangelogBuffer::from_entries(Vec::<ChangelogEntry<3>>::new(), 4, 0).is_err());
    }

    #[test]
    fn test_slot_with_root_and_entries_after() {
        let mut buffer = ChangelogBuffer::new(4, entry::<3>(0, 0)).unwrap();
        for sequence_number in 1..=5u64 {
            buffer.push(entry(sequence_number as u32, sequence_number));
        }
        // Sequence numbers 2..=5 are buffered, 0 and 1 were evicted.
        assert_eq!(buffer.slot_with_root(&[1u8; 32]), None);
        let slot = buffer.slot_with_root(&[3u8; 32]).unwrap();
        assert_eq!(slot, 3);

        let after: Vec<u64> = buffer
            .entries_after(slot)
            .map(|e| e.sequence_number)
            .collect();
        assert_eq!(after, vec![4, 5]);

        let active = buffer.active_index();
        assert_eq!(buffer.entries_after(active).count(), 0);
    }

    #[test]
    fn test_lookup() {
        let mut buffer = ChangelogBuffer::new(8, entry::<3>(0, 0)).unwrap();
        buffer.push(entry(5, 1));
        buffer.push(entry(2, 2));
        buffer.push(entry(6, 3));

        let touching: Vec<u64> = buffer.lookup(4).map(|e| e.sequence_number).collect();
        assert_eq!(touching, vec![3, 1]);
        let touching: Vec<u64> = buffer.lookup(1).map(|e| e.sequence_number).collect();
        assert_eq!(touching, vec![2, 0]);
    }

    #[test]
    fn test_rebase_proof_leaf_modified() {
        let mut buffer = ChangelogBuffer::new(4, entry::<3>(0, 0)).unwrap();
        buffer.push(entry(3, 1));
        let proof = [[0u8; 32]; 3];
        let leaf = [42u8; 32];

        assert_eq!(
            rebase_proof(&buffer, 0, 3, &leaf, &proof),
            Err(ConcurrentMerkleTreeError::LeafModified(3))
        );
        let rebased = rebase_proof(&buffer, 0, 2, &leaf, &proof).unwrap();
        assert_eq!(rebased[0], buffer.active().path[0]);
        assert_eq!(rebased[1], [0u8; 32]);
        // The input proof stays untouched.
        assert_eq!(proof, [[0u8; 32]; 3]);
    }
}
