//! Error types for the repository boundary
//!
//! Persistence failures live here, outside the in-memory model. Corrupt
//! fixture data is a load-time error surfaced by the repository, never
//! handled inside the assignment model.

use rmx_core::{MatrixError, TaskId};

/// Repository and fixture errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture JSON could not be parsed
    #[error("fixture parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Fixture parsed but violates a model precondition
    #[error("fixture validation failed: {0}")]
    Validation(String),

    /// Save targeted a task the store does not hold
    #[error("task not found in store: {0}")]
    TaskNotFound(TaskId),

    /// Loaded data was rejected by the model
    #[error("model rejected stored data: {0}")]
    Model(#[from] MatrixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::Validation("duplicate role key: PX".to_string());
        assert!(err.to_string().contains("validation"));
        assert!(err.to_string().contains("PX"));
    }

    #[test]
    fn store_error_wraps_model_errors() {
        let err = StoreError::from(MatrixError::BulkRoleUnset);
        assert!(matches!(err, StoreError::Model(_)));
    }
}
