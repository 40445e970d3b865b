//! Client side of the account compression program: instruction builders,
//! tree account decoding and helpers for indexing emitted events.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod instruction;
pub mod types;
pub mod utils;

pub use compression_concurrent_merkle_tree;
pub use compression_hasher;
