use compression_hasher::{errors::HasherError, Hasher};

use crate::errors::ConcurrentMerkleTreeError;

/// Returns the hash of the parent node based on the provided `node` (on the
/// path of `leaf_index`) and its `sibling` at the given `level`.
pub fn compute_parent_node<H>(
    node: &[u8; 32],
    sibling: &[u8; 32],
    leaf_index: u32,
    level: usize,
) -> Result<[u8; 32], HasherError>
where
    H: Hasher,
{
    let is_left = (leaf_index >> level) & 1 == 0;
    if is_left {
        H::hashv(&[node, sibling])
    } else {
        H::hashv(&[sibling, node])
    }
}

/// Computes the root for the given `leaf` (with index `leaf_index`) and
/// `proof`. It doesn't perform the validation of the provided `proof`.
///
/// The proof length defines the height of the tree.
pub fn compute_root<H>(
    leaf: &[u8; 32],
    leaf_index: u32,
    proof: &[[u8; 32]],
) -> Result<[u8; 32], HasherError>
where
    H: Hasher,
{
    let mut node = *leaf;
    for (level, sibling) in proof.iter().enumerate() {
        node = compute_parent_node::<H>(&node, sibling, leaf_index, level)?;
    }
    Ok(node)
}

/// Checks whether the given Merkle `proof` for the given `leaf` (with index
/// `leaf_index`) is valid. The proof is valid when computing parent node
/// hashes using the whole path of the proof gives the same result as the
/// given `root`.
pub fn validate_proof<H>(
    root: &[u8; 32],
    leaf: &[u8; 32],
    leaf_index: u32,
    proof: &[[u8; 32]],
) -> Result<(), ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    if proof.len() < u32::BITS as usize && leaf_index >> proof.len() != 0 {
        return Err(ConcurrentMerkleTreeError::LeafIndexOutOfBounds(
            leaf_index,
            1u64 << proof.len(),
        ));
    }
    let computed_root = compute_root::<H>(leaf, leaf_index, proof)?;
    if computed_root == *root {
        Ok(())
    } else {
        Err(ConcurrentMerkleTreeError::InvalidProof(*root, computed_root))
    }
}

/// Same as [`validate_proof`], returning whether the proof is valid instead
/// of an error.
pub fn verify<H>(root: &[u8; 32], leaf: &[u8; 32], leaf_index: u32, proof: &[[u8; 32]]) -> bool
where
    H: Hasher,
{
    validate_proof::<H>(root, leaf, leaf_index, proof).is_ok()
}
