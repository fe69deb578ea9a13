use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building or loading the symmetry
/// tables. None of these are recoverable: the tables are a precondition for
/// search, so callers are expected to abort startup.
#[derive(Error, Debug)]
pub enum SymTableError {
    #[error(
        "symmetry enumeration produced a duplicate element at index {index}, \
         the generator definitions are inconsistent"
    )]
    DuplicateSymmetry { index: usize },
    #[error("no inverse found for symmetry {index}")]
    MissingInverse { index: usize },
    #[error("product of symmetries {i} and {j} is not a group element")]
    ProductNotInGroup { i: usize, j: usize },
    #[error("conjugate of move {mv} by symmetry {sym} is not an elementary move")]
    ConjugateMoveNotFound { mv: usize, sym: usize },
    #[error(
        "cached table {} is {actual} bytes but {expected} were expected, \
         delete the file to force regeneration",
        path.display()
    )]
    CacheMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
    #[error("failed to read or write table file: {0}")]
    Io(#[from] std::io::Error),
}
