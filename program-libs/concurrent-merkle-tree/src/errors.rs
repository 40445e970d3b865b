use compression_bounded_vec::BoundedVecError;
use compression_hasher::HasherError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConcurrentMerkleTreeError {
    #[error("Invalid height, it has to be greater than 0")]
    HeightZero,
    #[error("Invalid height {0}, it cannot exceed the maximum allowed height {1}")]
    HeightHigherThanMax(usize, usize),
    #[error("Invalid changelog size, it has to be greater than 0")]
    ChangelogZero,
    #[error("Invalid changelog size {0}, it cannot exceed the maximum allowed size {1}")]
    ChangelogHigherThanMax(usize, usize),
    #[error("Tree height mismatch, expected {0}, got {1}")]
    HeightMismatch(usize, usize),
    #[error("Changelog size mismatch, expected {0}, got {1}")]
    ChangelogSizeMismatch(usize, usize),
    #[error("Merkle tree is full, cannot append more leaves.")]
    TreeFull,
    #[error("Leaf index {0} is out of bounds for a tree with {1} leaves")]
    LeafIndexOutOfBounds(u32, u64),
    #[error("Invalid proof length, expected {0}, got {1}")]
    ProofLength(usize, usize),
    #[error("Invalid Merkle proof, expected root: {0:?}, the provided proof produces root: {1:?}")]
    InvalidProof([u8; 32], [u8; 32]),
    #[error("Root of the provided proof is no longer in the changelog")]
    StaleProof,
    #[error("Leaf {0} was modified by a newer change")]
    LeafModified(u32),
    #[error("Integer overflow")]
    IntegerOverflow,
    #[error("Account data too small, expected at least {0} bytes, got {1}")]
    BufferSize(usize, usize),
    #[error("Invalid account type {0}")]
    InvalidAccountType(u8),
    #[error("Unsupported account header version {0}")]
    UnsupportedHeaderVersion(u8),
    #[error("Failed to decode account header: {0}")]
    InvalidHeader(String),
    #[error("Changelog is inconsistent with the tree state")]
    CorruptedChangelog,
    #[error("Bounded vector error: {0}")]
    BoundedVec(#[from] BoundedVecError),
    #[error("Hasher error: {0}")]
    Hasher(#[from] HasherError),
}

/// Coarse classification of [`ConcurrentMerkleTreeError`], used by callers
/// to decide whether re-fetching a proof can help.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The proof does not hash to the current root or any buffered root.
    InvalidProof,
    /// The proof was valid for an older root, but that root (or the leaf) has
    /// since changed.
    StaleProof,
    /// A leaf index or proof length outside of the tree shape.
    OutOfBounds,
    /// The tree is full, or its height or changelog size is out of the
    /// supported range.
    CapacityExceeded,
    /// Account bytes or header don't describe the expected tree.
    Account,
    Hasher,
}

impl ErrorKind {
    /// Whether fetching a fresh proof and retrying may succeed.
    pub fn is_retryable(&self) -> bool {
        *self == ErrorKind::StaleProof
    }
}

impl ConcurrentMerkleTreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidProof(_, _) => ErrorKind::InvalidProof,
            Self::StaleProof | Self::LeafModified(_) => ErrorKind::StaleProof,
            Self::LeafIndexOutOfBounds(_, _) | Self::ProofLength(_, _) => ErrorKind::OutOfBounds,
            Self::TreeFull
            | Self::IntegerOverflow
            | Self::HeightZero
            | Self::HeightHigherThanMax(_, _)
            | Self::ChangelogZero
            | Self::ChangelogHigherThanMax(_, _)
            | Self::BoundedVec(_) => ErrorKind::CapacityExceeded,
            Self::HeightMismatch(_, _)
            | Self::ChangelogSizeMismatch(_, _)
            | Self::BufferSize(_, _)
            | Self::InvalidAccountType(_)
            | Self::UnsupportedHeaderVersion(_)
            | Self::InvalidHeader(_)
            | Self::CorruptedChangelog => ErrorKind::Account,
            Self::Hasher(_) => ErrorKind::Hasher,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

// NOTE: `num_derive::ToPrimitive` doesn't support data-carrying enums, codes
// are assigned by hand.
impl From<ConcurrentMerkleTreeError> for u32 {
    fn from(e: ConcurrentMerkleTreeError) -> u32 {
        match e {
            ConcurrentMerkleTreeError::HeightZero => 2001,
            ConcurrentMerkleTreeError::HeightHigherThanMax(_, _) => 2002,
            ConcurrentMerkleTreeError::ChangelogZero => 2003,
            ConcurrentMerkleTreeError::ChangelogHigherThanMax(_, _) => 2004,
            ConcurrentMerkleTreeError::HeightMismatch(_, _) => 2005,
            ConcurrentMerkleTreeError::TreeFull => 2006,
            ConcurrentMerkleTreeError::LeafIndexOutOfBounds(_, _) => 2007,
            ConcurrentMerkleTreeError::ProofLength(_, _) => 2008,
            ConcurrentMerkleTreeError::InvalidProof(_, _) => 2009,
            ConcurrentMerkleTreeError::StaleProof => 2010,
            ConcurrentMerkleTreeError::LeafModified(_) => 2011,
            ConcurrentMerkleTreeError::IntegerOverflow => 2012,
            ConcurrentMerkleTreeError::BufferSize(_, _) => 2013,
            ConcurrentMerkleTreeError::InvalidAccountType(_) => 2014,
            ConcurrentMerkleTreeError::UnsupportedHeaderVersion(_) => 2015,
            ConcurrentMerkleTreeError::InvalidHeader(_) => 2016,
            ConcurrentMerkleTreeError::CorruptedChangelog => 2017,
            ConcurrentMerkleTreeError::ChangelogSizeMismatch(_, _) => 2018,
            ConcurrentMerkleTreeError::BoundedVec(e) => e.into(),
            ConcurrentMerkleTreeError::Hasher(e) => e.into(),
        }
    }
}
