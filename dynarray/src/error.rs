use thiserror::Error;

/// Error types for `DynamicArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is not below the current array length
    #[error("Index out of range: index {index} is not below array length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// The backing storage could not be grown
    #[error("Allocation failure: could not reserve storage for {requested} elements")]
    AllocationFailure {
        /// Number of slots the storage was asked to hold
        requested: usize,
    },
}
