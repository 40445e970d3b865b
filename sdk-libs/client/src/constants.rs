pub use compression_concurrent_merkle_tree::{
    account::CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1,
    config::{DEFAULT_MAX_BUFFER_SIZE, DEFAULT_MAX_DEPTH, MAX_CHANGELOG_SIZE, MAX_HEIGHT},
};

use crate::types::Pubkey;

pub const SPL_ACCOUNT_COMPRESSION_ADDRESS: &str = "cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK";
pub const SPL_NOOP_ADDRESS: &str = "noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV";

/// `cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK`
pub const SPL_ACCOUNT_COMPRESSION_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    9, 42, 19, 238, 149, 196, 28, 186, 8, 166, 127, 90, 198, 126, 141, 247, 225, 218, 17, 98, 94,
    29, 100, 19, 127, 143, 79, 35, 131, 3, 127, 20,
]);

/// `noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV`
pub const SPL_NOOP_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    11, 188, 15, 192, 187, 71, 202, 47, 116, 196, 17, 46, 148, 171, 19, 207, 163, 198, 52, 229,
    220, 23, 234, 203, 3, 205, 26, 35, 205, 126, 120, 124,
]);

/// (max_depth, max_buffer_size) pairs the account compression program
/// accepts.
pub const ALL_DEPTH_SIZE_PAIRS: [(u32, u32); 34] = [
    (3, 8),
    (5, 8),
    (6, 16),
    (7, 16),
    (8, 16),
    (9, 16),
    (10, 32),
    (11, 32),
    (12, 32),
    (13, 32),
    (14, 64),
    (14, 256),
    (14, 1024),
    (14, 2048),
    (15, 64),
    (16, 64),
    (17, 64),
    (18, 64),
    (19, 64),
    (20, 64),
    (20, 256),
    (20, 1024),
    (20, 2048),
    (24, 64),
    (24, 256),
    (24, 512),
    (24, 1024),
    (24, 2048),
    (26, 512),
    (26, 1024),
    (26, 2048),
    (30, 512),
    (30, 1024),
    (30, 2048),
];
