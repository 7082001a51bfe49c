use thiserror::Error;

/// Error types for `DoublyLinkedList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LinkedListError {
    /// Operation needs at least one element
    #[error("Operation on empty list")]
    EmptyList,
    /// Index is not below the current list length
    #[error("Index out of range: index {index} is not below list length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the list
        length: usize,
    },
    /// Insertion asked for fewer than one element
    #[error("Invalid insertion count: {count}, at least 1 element must be inserted")]
    InvalidCount {
        /// Number of elements requested
        count: usize,
    },
    /// A node could not be allocated
    #[error("Allocation failure: could not allocate a list node")]
    AllocationFailure,
    /// Traversal came back to a node it had already visited
    #[error("Circular reference detected after {steps} steps")]
    CircularReference {
        /// Number of links followed before the cycle was noticed
        steps: usize,
    },
}
