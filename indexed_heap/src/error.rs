use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Two input entries share a key. Positions are indices into the input.
    #[error("duplicate key in entries at positions {first} and {second}")]
    DuplicateKey { first: usize, second: usize },
}
