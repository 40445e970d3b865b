//! Instruction data and builders of the account compression program.
//!
//! Instruction data is an 8-byte discriminator followed by the borsh
//! serialized arguments. Proofs are not part of the data, the nodes are
//! passed as read-only accounts after the named ones.

use borsh::{BorshDeserialize, BorshSerialize};
use compression_hasher::Discriminator;

use crate::{
    constants::{SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID},
    errors::AccountCompressionClientError,
    types::{AccountMeta, Instruction, Pubkey},
    utils::proof_to_account_metas,
};

/// Arguments of an instruction, serialized behind its discriminator.
pub trait InstructionData: Discriminator + BorshSerialize {
    fn data(&self) -> Result<Vec<u8>, AccountCompressionClientError> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct InitEmptyMerkleTree {
    pub max_depth: u32,
    pub max_buffer_size: u32,
}

impl Discriminator for InitEmptyMerkleTree {
    const DISCRIMINATOR: [u8; 8] = [191, 11, 119, 7, 180, 107, 220, 110];
}

impl InstructionData for InitEmptyMerkleTree {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct ReplaceLeaf {
    pub root: [u8; 32],
    pub previous_leaf: [u8; 32],
    pub new_leaf: [u8; 32],
    pub index: u32,
}

impl Discriminator for ReplaceLeaf {
    const DISCRIMINATOR: [u8; 8] = [204, 165, 76, 100, 73, 147, 0, 128];
}

impl InstructionData for ReplaceLeaf {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferAuthority {
    pub new_authority: Pubkey,
}

impl Discriminator for TransferAuthority {
    const DISCRIMINATOR: [u8; 8] = [48, 169, 76, 72, 229, 180, 55, 161];
}

impl InstructionData for TransferAuthority {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifyLeaf {
    pub root: [u8; 32],
    pub leaf: [u8; 32],
    pub index: u32,
}

impl Discriminator for VerifyLeaf {
    const DISCRIMINATOR: [u8; 8] = [124, 220, 22, 223, 104, 10, 250, 224];
}

impl InstructionData for VerifyLeaf {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct Append {
    pub leaf: [u8; 32],
}

impl Discriminator for Append {
    const DISCRIMINATOR: [u8; 8] = [149, 120, 18, 222, 236, 225, 88, 203];
}

impl InstructionData for Append {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct InsertOrAppend {
    pub root: [u8; 32],
    pub leaf: [u8; 32],
    pub index: u32,
}

impl Discriminator for InsertOrAppend {
    const DISCRIMINATOR: [u8; 8] = [6, 42, 50, 190, 51, 109, 178, 168];
}

impl InstructionData for InsertOrAppend {}

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct CloseEmptyTree;

impl Discriminator for CloseEmptyTree {
    const DISCRIMINATOR: [u8; 8] = [50, 14, 219, 107, 78, 103, 16, 103];
}

impl InstructionData for CloseEmptyTree {}

/// Decoded instruction data of any account compression instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountCompressionInstruction {
    InitEmptyMerkleTree(InitEmptyMerkleTree),
    ReplaceLeaf(ReplaceLeaf),
    TransferAuthority(TransferAuthority),
    VerifyLeaf(VerifyLeaf),
    Append(Append),
    InsertOrAppend(InsertOrAppend),
    CloseEmptyTree(CloseEmptyTree),
}

impl AccountCompressionInstruction {
    pub fn decode(data: &[u8]) -> Result<Self, AccountCompressionClientError> {
        if data.len() < 8 {
            return Err(AccountCompressionClientError::InvalidInstructionData(
                format!("expected at least 8 bytes, got {}", data.len()),
            ));
        }
        let (discriminator, mut args) = data.split_at(8);
        let instruction = match discriminator {
            d if d == InitEmptyMerkleTree::DISCRIMINATOR => {
                Self::InitEmptyMerkleTree(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == ReplaceLeaf::DISCRIMINATOR => {
                Self::ReplaceLeaf(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == TransferAuthority::DISCRIMINATOR => {
                Self::TransferAuthority(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == VerifyLeaf::DISCRIMINATOR => {
                Self::VerifyLeaf(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == Append::DISCRIMINATOR => {
                Self::Append(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == InsertOrAppend::DISCRIMINATOR => {
                Self::InsertOrAppend(BorshDeserialize::deserialize(&mut args)?)
            }
            d if d == CloseEmptyTree::DISCRIMINATOR => Self::CloseEmptyTree(CloseEmptyTree),
            d => {
                return Err(AccountCompressionClientError::InvalidInstructionData(
                    format!("unknown discriminator {d:?}"),
                ))
            }
        };
        if !args.is_empty() {
            return Err(AccountCompressionClientError::InvalidInstructionData(
                format!("{} trailing bytes", args.len()),
            ));
        }
        Ok(instruction)
    }
}

fn instruction(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: SPL_ACCOUNT_COMPRESSION_PROGRAM_ID,
        accounts,
        data,
    }
}

/// Initializes an empty tree in an already allocated account.
pub fn create_init_empty_merkle_tree_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    max_depth: u32,
    max_buffer_size: u32,
) -> Result<Instruction, AccountCompressionClientError> {
    let data = InitEmptyMerkleTree {
        max_depth,
        max_buffer_size,
    }
    .data()?;
    let accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
    ];
    Ok(instruction(accounts, data))
}

/// Replaces `previous_leaf` under `index` with `new_leaf`. `root` is the root
/// the `proof` was fetched against.
pub fn create_replace_leaf_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    root: [u8; 32],
    previous_leaf: [u8; 32],
    new_leaf: [u8; 32],
    index: u32,
    proof: &[[u8; 32]],
) -> Result<Instruction, AccountCompressionClientError> {
    let data = ReplaceLeaf {
        root,
        previous_leaf,
        new_leaf,
        index,
    }
    .data()?;
    let mut accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
    ];
    accounts.extend(proof_to_account_metas(proof));
    Ok(instruction(accounts, data))
}

pub fn create_transfer_authority_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    new_authority: Pubkey,
) -> Result<Instruction, AccountCompressionClientError> {
    let data = TransferAuthority { new_authority }.data()?;
    let accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
    ];
    Ok(instruction(accounts, data))
}

/// Fails on chain unless `leaf` is stored under `index`.
pub fn create_verify_leaf_instruction(
    merkle_tree: Pubkey,
    root: [u8; 32],
    leaf: [u8; 32],
    index: u32,
    proof: &[[u8; 32]],
) -> Result<Instruction, AccountCompressionClientError> {
    let data = VerifyLeaf { root, leaf, index }.data()?;
    let mut accounts = vec![AccountMeta::new_readonly(merkle_tree, false)];
    accounts.extend(proof_to_account_metas(proof));
    Ok(instruction(accounts, data))
}

pub fn create_append_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    leaf: [u8; 32],
) -> Result<Instruction, AccountCompressionClientError> {
    let data = Append { leaf }.data()?;
    let accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
    ];
    Ok(instruction(accounts, data))
}

pub fn create_insert_or_append_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    root: [u8; 32],
    leaf: [u8; 32],
    index: u32,
    proof: &[[u8; 32]],
) -> Result<Instruction, AccountCompressionClientError> {
    let data = InsertOrAppend { root, leaf, index }.data()?;
    let mut accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
    ];
    accounts.extend(proof_to_account_metas(proof));
    Ok(instruction(accounts, data))
}

/// Closes a tree without any leaves, sending its rent to `recipient`.
pub fn create_close_empty_tree_instruction(
    merkle_tree: Pubkey,
    authority: Pubkey,
    recipient: Pubkey,
) -> Result<Instruction, AccountCompressionClientError> {
    let data = CloseEmptyTree.data()?;
    let accounts = vec![
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new(recipient, false),
    ];
    Ok(instruction(accounts, data))
}
