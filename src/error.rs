//! Error types.

use thiserror::Error;

/// Errors produced while constructing a bit vector.
///
/// Every operation on an existing vector is total, so construction is the
/// only fallible entry point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitVectorError {
    /// A bit vector must address at least one bit.
    #[error("bit vector length must be greater than zero")]
    ZeroLength,
}

/// Result alias for fallible bit vector operations.
pub type Result<T> = core::result::Result<T, BitVectorError>;
