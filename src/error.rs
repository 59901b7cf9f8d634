use thiserror::Error;

/// Result type alias for plaintable operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Error types for table construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row length mismatch: expected {expected} cells, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },
}

impl TableError {
    /// Create a new row length mismatch error
    pub fn row_length_mismatch(expected: usize, actual: usize) -> Self {
        Self::RowLengthMismatch { expected, actual }
    }
}
