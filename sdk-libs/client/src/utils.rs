use borsh::BorshDeserialize;
use compression_concurrent_merkle_tree::{
    account::merkle_tree_account_size,
    config::MAX_HEIGHT,
    event::{AccountCompressionEvent, PathNode},
};

use crate::{
    constants::ALL_DEPTH_SIZE_PAIRS,
    errors::AccountCompressionClientError,
    types::{AccountMeta, Pubkey},
};

/// Number of bytes to allocate for a tree account, header included.
pub fn get_merkle_tree_account_size(max_depth: u32, max_buffer_size: u32) -> usize {
    merkle_tree_account_size(max_depth as usize, max_buffer_size as usize)
}

pub fn is_standard_size(max_depth: u32, max_buffer_size: u32) -> bool {
    ALL_DEPTH_SIZE_PAIRS.contains(&(max_depth, max_buffer_size))
}

pub fn check_standard_size(
    max_depth: u32,
    max_buffer_size: u32,
) -> Result<(), AccountCompressionClientError> {
    if !is_standard_size(max_depth, max_buffer_size) {
        return Err(AccountCompressionClientError::UnsupportedTreeSize(
            max_depth,
            max_buffer_size,
        ));
    }
    Ok(())
}

/// Proof nodes as read-only accounts, in the order the program expects them
/// after the named accounts.
pub fn proof_to_account_metas(proof: &[[u8; 32]]) -> Vec<AccountMeta> {
    proof
        .iter()
        .map(|node| AccountMeta::new_readonly(Pubkey::new_from_array(*node), false))
        .collect()
}

fn check_path_node_index(max_depth: u32, node_index: u32) -> Result<(), AccountCompressionClientError> {
    if node_index == 0
        || max_depth as usize > MAX_HEIGHT
        || node_index as u64 >= 1u64 << (max_depth + 1)
    {
        return Err(AccountCompressionClientError::InvalidPathNodeIndex(
            node_index, max_depth,
        ));
    }
    Ok(())
}

/// Level of a node in the tree, leaves being on level 0 and the root (node
/// index 1) on level `max_depth`.
pub fn path_node_level(max_depth: u32, node_index: u32) -> Result<u32, AccountCompressionClientError> {
    check_path_node_index(max_depth, node_index)?;
    Ok(max_depth - node_index.ilog2())
}

/// Index of the leftmost leaf under the given node.
pub fn path_node_leaf_index(
    max_depth: u32,
    node_index: u32,
) -> Result<u32, AccountCompressionClientError> {
    let level = path_node_level(max_depth, node_index)?;
    let position = node_index - (1 << (max_depth - level));
    Ok(position << level)
}

/// Index of the leaf a changelog path describes, read from its first node.
pub fn leaf_index_from_path(
    max_depth: u32,
    path: &[PathNode],
) -> Result<u32, AccountCompressionClientError> {
    let leaf = path.first().ok_or_else(|| {
        AccountCompressionClientError::InvalidInstructionData("empty path".to_string())
    })?;
    if path_node_level(max_depth, leaf.index)? != 0 {
        return Err(AccountCompressionClientError::InvalidPathNodeIndex(
            leaf.index, max_depth,
        ));
    }
    path_node_leaf_index(max_depth, leaf.index)
}

/// Decodes an event emitted through the noop program.
pub fn decode_account_compression_event(
    data: &[u8],
) -> Result<AccountCompressionEvent, AccountCompressionClientError> {
    Ok(AccountCompressionEvent::try_from_slice(data)?)
}
