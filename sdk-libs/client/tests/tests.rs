use account_compression_client::{
    accounts::MerkleTreeAccount,
    instruction::{
        create_append_instruction, create_replace_leaf_instruction,
        AccountCompressionInstruction,
    },
    types::{AccountCompressionEvent, ChangelogEvent, ConcurrentMerkleTreeConfig, Pubkey},
    utils::{decode_account_compression_event, leaf_index_from_path},
};
use borsh::BorshSerialize;
use compression_concurrent_merkle_tree::{
    account::{tree_to_bytes, ConcurrentMerkleTreeHeader},
    ConcurrentMerkleTree,
};
use compression_hasher::{Hasher, Keccak};
use compression_merkle_tree_reference::MerkleTree;
use rand::{thread_rng, Rng};

const HEIGHT: usize = 5;
const CHANGELOG: usize = 8;

/// Executes an instruction against the tree the way the program would,
/// taking the proof from the accounts after the named ones.
fn execute(
    tree: &mut ConcurrentMerkleTree<Keccak, HEIGHT>,
    instruction: &account_compression_client::types::Instruction,
) -> AccountCompressionEvent {
    let tree_id = instruction.accounts[0].pubkey.to_bytes();
    let entry = match AccountCompressionInstruction::decode(&instruction.data).unwrap() {
        AccountCompressionInstruction::Append(args) => tree.append(&args.leaf).unwrap(),
        AccountCompressionInstruction::ReplaceLeaf(args) => {
            let proof: Vec<[u8; 32]> = instruction.accounts[3..]
                .iter()
                .map(|meta| meta.pubkey.to_bytes())
                .collect();
            tree.update(args.index, &args.previous_leaf, &args.new_leaf, &proof)
                .unwrap()
        }
        other => panic!("unexpected instruction {other:?}"),
    };
    AccountCompressionEvent::ChangeLog(ChangelogEvent::from((&tree_id, &entry)))
}

/// Replays the emitted events on a full tree, the way an indexer does, and
/// checks that it converges to the on-chain root.
#[test]
fn test_indexer_replays_events() {
    let merkle_tree = Pubkey::new_from_array([1u8; 32]);
    let authority = Pubkey::new_from_array([2u8; 32]);
    let mut rng = thread_rng();

    let mut tree = ConcurrentMerkleTree::<Keccak, HEIGHT>::new(CHANGELOG).unwrap();
    // Client view, used to build proofs.
    let mut client = MerkleTree::<Keccak>::new(HEIGHT);
    // Indexer view, built only from events.
    let mut indexer = MerkleTree::<Keccak>::new(HEIGHT);

    for i in 0..64 {
        let leaf: [u8; 32] = Keccak::hash(&rng.gen::<[u8; 32]>()).unwrap();
        let append = client.next_index < client.capacity && (i < 8 || rng.gen_bool(0.5));
        let instruction = if append {
            client.append(&leaf).unwrap();
            create_append_instruction(merkle_tree, authority, leaf).unwrap()
        } else {
            let index = rng.gen_range(0..client.next_index);
            let proof = client.get_proof_of_leaf(index).unwrap();
            let ix = create_replace_leaf_instruction(
                merkle_tree,
                authority,
                client.root(),
                client.leaf(index),
                leaf,
                index as u32,
                &proof,
            )
            .unwrap();
            client.update(&leaf, index).unwrap();
            ix
        };

        let event = execute(&mut tree, &instruction);
        let data = event.try_to_vec().unwrap();

        let AccountCompressionEvent::ChangeLog(ChangelogEvent::V1(event)) =
            decode_account_compression_event(&data).unwrap()
        else {
            panic!("expected a changelog event");
        };
        assert_eq!(event.id, merkle_tree.to_bytes());
        assert_eq!(event.path.len(), HEIGHT + 1);
        assert_eq!(event.seq, tree.sequence_number());

        let leaf_index = leaf_index_from_path(HEIGHT as u32, &event.path).unwrap();
        assert_eq!(leaf_index, event.index);
        indexer
            .update(&event.leaf().unwrap().node, leaf_index as usize)
            .unwrap();

        assert_eq!(event.root().unwrap().node, tree.root());
        assert_eq!(indexer.root(), tree.root());
        assert_eq!(client.root(), tree.root());
    }
}

/// Two clients fetch proofs against the same root and submit replacements
/// of different leaves, the second one lands after the first.
#[test]
fn test_concurrent_replace_leaf_instructions() {
    let merkle_tree = Pubkey::new_from_array([1u8; 32]);
    let authority = Pubkey::new_from_array([2u8; 32]);

    let mut tree = ConcurrentMerkleTree::<Keccak, HEIGHT>::new(CHANGELOG).unwrap();
    let mut reference = MerkleTree::<Keccak>::new(HEIGHT);
    for i in 0..4u8 {
        let leaf = [i + 1; 32];
        execute(
            &mut tree,
            &create_append_instruction(merkle_tree, authority, leaf).unwrap(),
        );
        reference.append(&leaf).unwrap();
    }

    let root = reference.root();
    let instructions: Vec<_> = [(0usize, [10u8; 32]), (3, [13u8; 32])]
        .into_iter()
        .map(|(index, new_leaf)| {
            create_replace_leaf_instruction(
                merkle_tree,
                authority,
                root,
                reference.leaf(index),
                new_leaf,
                index as u32,
                &reference.get_proof_of_leaf(index).unwrap(),
            )
            .unwrap()
        })
        .collect();

    for instruction in instructions.iter() {
        execute(&mut tree, instruction);
    }
    reference.update(&[10u8; 32], 0).unwrap();
    reference.update(&[13u8; 32], 3).unwrap();
    assert_eq!(tree.root(), reference.root());
}

#[test]
fn test_decode_account_after_updates() {
    let config = ConcurrentMerkleTreeConfig::new(HEIGHT as u32, CHANGELOG as u32)
        .with_authority([2u8; 32]);
    let header = ConcurrentMerkleTreeHeader::new(&config);
    let mut tree = ConcurrentMerkleTree::<Keccak, HEIGHT>::from_config(&config).unwrap();
    for i in 0..20u8 {
        tree.append(&[i; 32]).unwrap();
    }

    let data = tree_to_bytes(&header, &tree).unwrap();
    let account = MerkleTreeAccount::from_bytes(Pubkey::new_from_array([1u8; 32]), data).unwrap();
    assert_eq!(account.root(), tree.root());
    assert_eq!(account.next_index(), 20);
    assert_eq!(account.summary.remaining_capacity(), 12);
    assert_eq!(account.authority(), Pubkey::new_from_array([2u8; 32]));

    let decoded = account.tree::<Keccak, HEIGHT>().unwrap();
    assert_eq!(decoded, tree);
}
