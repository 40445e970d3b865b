use std::marker::PhantomData;

use compression_hasher::{errors::HasherError, Hasher};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReferenceMerkleTreeError {
    #[error("Leaf {0} does not exist")]
    LeafDoesNotExist(usize),
    #[error("Merkle tree is full")]
    TreeFull,
    #[error("Hasher error: {0}")]
    Hasher(#[from] HasherError),
    #[error("Invalid proof length provided: {0} required {1}")]
    InvalidProofLength(usize, usize),
}

/// Merkle tree which keeps all of its nodes in memory. Slow, but trivially
/// correct, used to check the results of the concurrent tree.
#[derive(Debug)]
pub struct MerkleTree<H>
where
    H: Hasher,
{
    pub height: usize,
    pub capacity: usize,
    /// Nodes of each level below the root. Nodes missing from the end of a
    /// layer are empty subtrees.
    pub layers: Vec<Vec<[u8; 32]>>,
    pub roots: Vec<[u8; 32]>,
    /// Index of the first leaf after the highest written one.
    pub next_index: usize,
    pub sequence_number: usize,
    _hasher: PhantomData<H>,
}

impl<H> Clone for MerkleTree<H>
where
    H: Hasher,
{
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            capacity: self.capacity,
            layers: self.layers.clone(),
            roots: self.roots.clone(),
            next_index: self.next_index,
            sequence_number: self.sequence_number,
            _hasher: PhantomData,
        }
    }
}

impl<H> MerkleTree<H>
where
    H: Hasher,
{
    pub fn new(height: usize) -> Self {
        Self {
            height,
            capacity: 1 << height,
            layers: vec![Vec::new(); height],
            roots: vec![H::zero_bytes()[height]],
            next_index: 0,
            sequence_number: 0,
            _hasher: PhantomData,
        }
    }

    fn node(&self, level: usize, index: usize) -> [u8; 32] {
        self.layers[level]
            .get(index)
            .cloned()
            .unwrap_or(H::zero_bytes()[level])
    }

    fn set_node(&mut self, level: usize, index: usize, node: [u8; 32]) {
        let layer = &mut self.layers[level];
        if layer.len() <= index {
            // Fill the gap with empty subtrees.
            layer.resize(index + 1, H::zero_bytes()[level]);
        }
        layer[index] = node;
    }

    fn update_upper_layers(&mut self, mut i: usize) -> Result<(), HasherError> {
        for level in 1..self.height {
            i /= 2;

            let left_child = self.node(level - 1, i * 2);
            let right_child = self.node(level - 1, i * 2 + 1);
            let node = H::hashv(&[&left_child[..], &right_child[..]])?;
            self.set_node(level, i, node);
        }

        let left_child = self.node(self.height - 1, 0);
        let right_child = self.node(self.height - 1, 1);
        let root = H::hashv(&[&left_child[..], &right_child[..]])?;

        self.roots.push(root);

        Ok(())
    }

    pub fn append(&mut self, leaf: &[u8; 32]) -> Result<(), ReferenceMerkleTreeError> {
        if self.next_index == self.capacity {
            return Err(ReferenceMerkleTreeError::TreeFull);
        }
        let i = self.next_index;
        self.set_node(0, i, *leaf);
        self.next_index += 1;

        self.update_upper_layers(i)?;

        self.sequence_number += 1;
        Ok(())
    }

    pub fn append_batch(&mut self, leaves: &[&[u8; 32]]) -> Result<(), ReferenceMerkleTreeError> {
        for leaf in leaves {
            self.append(leaf)?;
        }
        Ok(())
    }

    /// Writes `leaf` under any `leaf_index` within the capacity.
    pub fn update(
        &mut self,
        leaf: &[u8; 32],
        leaf_index: usize,
    ) -> Result<(), ReferenceMerkleTreeError> {
        if leaf_index >= self.capacity {
            return Err(ReferenceMerkleTreeError::LeafDoesNotExist(leaf_index));
        }
        self.set_node(0, leaf_index, *leaf);
        self.next_index = self.next_index.max(leaf_index + 1);

        self.update_upper_layers(leaf_index)?;

        self.sequence_number += 1;
        Ok(())
    }

    pub fn root(&self) -> [u8; 32] {
        // PANICS: We always initialize the Merkle tree with a
        // root (from zero bytes), so the following should never
        // panic.
        self.roots.last().cloned().unwrap()
    }

    /// Nodes on the path from the leaf up to the child of the root.
    pub fn get_path_of_leaf(
        &self,
        mut index: usize,
    ) -> Result<Vec<[u8; 32]>, ReferenceMerkleTreeError> {
        if index >= self.capacity {
            return Err(ReferenceMerkleTreeError::LeafDoesNotExist(index));
        }
        let mut path = Vec::with_capacity(self.height);
        for level in 0..self.height {
            path.push(self.node(level, index));
            index /= 2;
        }
        Ok(path)
    }

    pub fn get_proof_of_leaf(
        &self,
        mut index: usize,
    ) -> Result<Vec<[u8; 32]>, ReferenceMerkleTreeError> {
        if index >= self.capacity {
            return Err(ReferenceMerkleTreeError::LeafDoesNotExist(index));
        }
        let mut proof = Vec::with_capacity(self.height);
        for level in 0..self.height {
            let sibling_index = index ^ 1;
            proof.push(self.node(level, sibling_index));
            index /= 2;
        }
        Ok(proof)
    }

    pub fn leaf(&self, leaf_index: usize) -> [u8; 32] {
        self.node(0, leaf_index)
    }

    pub fn get_leaf_index(&self, leaf: &[u8; 32]) -> Option<usize> {
        self.layers[0].iter().position(|node| node == leaf)
    }

    pub fn leaves(&self) -> &[[u8; 32]] {
        self.layers[0].as_slice()
    }

    pub fn verify(
        &self,
        leaf: &[u8; 32],
        proof: &[[u8; 32]],
        leaf_index: usize,
    ) -> Result<bool, ReferenceMerkleTreeError> {
        if leaf_index >= self.capacity {
            return Err(ReferenceMerkleTreeError::LeafDoesNotExist(leaf_index));
        }
        if proof.len() != self.height {
            return Err(ReferenceMerkleTreeError::InvalidProofLength(
                proof.len(),
                self.height,
            ));
        }

        let mut computed_hash = *leaf;
        let mut current_index = leaf_index;

        for sibling_hash in proof.iter() {
            let is_left = current_index % 2 == 0;
            let hashes = if is_left {
                [&computed_hash[..], &sibling_hash[..]]
            } else {
                [&sibling_hash[..], &computed_hash[..]]
            };

            computed_hash = H::hashv(&hashes)?;
            current_index /= 2;
        }

        Ok(computed_hash == self.root())
    }
}

#[cfg(test)]
mod tests {
    use compression_hasher::{Keccak, Sha256};
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn test_empty() {
        let tree = MerkleTree::<Keccak>::new(4);
        assert_eq!(tree.root(), Keccak::zero_bytes()[4]);
        let proof = tree.get_proof_of_leaf(9).unwrap();
        assert_eq!(proof, Keccak::zero_bytes()[..4].to_vec());
        assert!(tree.verify(&[0u8; 32], &proof, 9).unwrap());
    }

    #[test]
    fn test_two_leaves() {
        let mut tree = MerkleTree::<Sha256>::new(1);
        tree.append(&[1u8; 32]).unwrap();
        tree.append(&[2u8; 32]).unwrap();
        assert_eq!(tree.root(), Sha256::hashv(&[&[1u8; 32], &[2u8; 32]]).unwrap());
        assert_eq!(tree.append(&[3u8; 32]), Err(ReferenceMerkleTreeError::TreeFull));
    }

    #[test]
    fn test_update_out_of_order() {
        let height = 5;
        let mut sparse = MerkleTree::<Keccak>::new(height);
        sparse.update(&[7u8; 32], 6).unwrap();
        assert_eq!(sparse.next_index, 7);

        let mut dense = MerkleTree::<Keccak>::new(height);
        for _ in 0..6 {
            dense.append(&[0u8; 32]).unwrap();
        }
        dense.append(&[7u8; 32]).unwrap();
        assert_eq!(sparse.root(), dense.root());

        assert_eq!(
            sparse.update(&[7u8; 32], 32),
            Err(ReferenceMerkleTreeError::LeafDoesNotExist(32))
        );
    }

    #[test]
    fn test_random_proofs() {
        let mut rng = thread_rng();
        let mut tree = MerkleTree::<Keccak>::new(6);
        for _ in 0..100 {
            let leaf: [u8; 32] = rng.gen();
            let leaf_index = rng.gen_range(0..tree.capacity);
            tree.update(&leaf, leaf_index).unwrap();

            let proof = tree.get_proof_of_leaf(leaf_index).unwrap();
            assert!(tree.verify(&leaf, &proof, leaf_index).unwrap());
            assert_eq!(tree.get_path_of_leaf(leaf_index).unwrap()[0], leaf);
        }
    }

    /// Snapshots taken in generic code must not require `H: Clone`.
    fn snapshot_then_diverge<H>()
    where
        H: Hasher,
    {
        let mut tree = MerkleTree::<H>::new(3);
        tree.append(&[1u8; 32]).unwrap();
        let snapshot = tree.clone();
        tree.append(&[2u8; 32]).unwrap();

        assert_eq!(snapshot.next_index, 1);
        assert_eq!(tree.next_index, 2);
        assert_ne!(snapshot.root(), tree.root());
        assert_eq!(snapshot.leaf(0), [1u8; 32]);
    }

    #[test]
    fn test_clone_keccak() {
        snapshot_then_diverge::<Keccak>();
    }

    #[test]
    fn test_clone_sha256() {
        snapshot_then_diverge::<Sha256>();
    }
}
