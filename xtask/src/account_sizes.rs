use account_compression_client::{constants::ALL_DEPTH_SIZE_PAIRS, utils::get_merkle_tree_account_size};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TreeSize {
    max_depth: u32,
    max_buffer_size: u32,
    capacity: u64,
    space: usize,
}

pub fn account_sizes() -> anyhow::Result<()> {
    let sizes = ALL_DEPTH_SIZE_PAIRS
        .iter()
        .map(|&(max_depth, max_buffer_size)| TreeSize {
            max_depth,
            max_buffer_size,
            capacity: 1 << max_depth,
            space: get_merkle_tree_account_size(max_depth, max_buffer_size),
        })
        .collect::<Vec<_>>();

    let table = Table::new(sizes);
    println!("{table}");

    Ok(())
}
