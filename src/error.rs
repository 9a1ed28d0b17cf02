//! Error handling and result types for the container operations.
//!
//! Recoverable "miss" conditions (popping an empty collection, looking up an
//! absent key) are reported as `Option`/`bool` by the individual structures.
//! This module covers the failures that carry context: out-of-range index
//! operations, exhausted fixed-capacity tables, and rejected inputs.

/// Error type shared by all containers in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsaError {
    /// Pop/extract attempted on an empty collection.
    EmptyCollection,
    /// Index-based access outside the valid range.
    IndexOutOfRange { index: usize, len: usize },
    /// Fixed-capacity table has no remaining slot for a new key.
    CapacityExceeded(String),
    /// Constructor given an unusable capacity.
    InvalidCapacity(String),
    /// Character outside the supported alphabet.
    InvalidCharacter(char),
}

impl DsaError {
    /// Create an IndexOutOfRange error for the given index and length.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a CapacityExceeded error with context.
    pub fn capacity_exceeded(structure: &str, capacity: usize) -> Self {
        Self::CapacityExceeded(format!("{} is full (capacity {})", structure, capacity))
    }

    /// Create an InvalidCapacity error with context.
    pub fn invalid_capacity(capacity: usize, min_required: usize) -> Self {
        Self::InvalidCapacity(format!(
            "capacity {} is invalid (minimum required: {})",
            capacity, min_required
        ))
    }

    /// Check if this error is an out-of-range index error.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this error is a capacity error.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::CapacityExceeded(_))
    }
}

impl std::fmt::Display for DsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DsaError::EmptyCollection => write!(f, "Collection is empty"),
            DsaError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            DsaError::CapacityExceeded(msg) => write!(f, "Capacity exceeded: {}", msg),
            DsaError::InvalidCapacity(msg) => write!(f, "Invalid capacity: {}", msg),
            DsaError::InvalidCharacter(c) => {
                write!(f, "Character {:?} is outside the supported alphabet", c)
            }
        }
    }
}

impl std::error::Error for DsaError {}

/// Result type for container operations that may fail.
pub type DsaResult<T> = Result<T, DsaError>;
