//! Error types for the core crate.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors from the plant collection store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Collection file could not be read or written
    #[error("Collection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection file contents are not valid JSON
    #[error("Malformed collection file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record index past the end of the collection
    #[error("No record at index {index} (collection has {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of records in the collection
        len: usize,
    },

    /// No usable data directory for the default store location
    #[error("Could not determine a data directory for the collection")]
    NoDataDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err = CoreError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "No record at index 7 (collection has 3)");
    }
}
