use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the fallible table operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table could not allocate storage for its private copy of a key
    #[error("failed to allocate {len} bytes for key storage: {source}")]
    AllocationFailed {
        /// Length in bytes of the key that could not be copied
        len: usize,
        /// Underlying allocator error
        source: TryReserveError,
    },
}
