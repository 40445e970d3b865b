use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("Empty input")]
    EmptyInput,
}

// NOTE: `num_derive::ToPrimitive` doesn't support data-carrying enums, codes
// are assigned by hand.
impl From<HasherError> for u32 {
    fn from(e: HasherError) -> u32 {
        match e {
            HasherError::EmptyInput => 7002,
        }
    }
}
