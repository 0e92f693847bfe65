//! Error types for the assignment model
//!
//! All model errors are recoverable and reported to the caller:
//! - Unknown task or role references
//! - Duplicate identifiers at construction time
//! - Bulk operations started without a role choice
//!
//! Persistence failures live at the repository boundary (`rmx-store`), not
//! here; the in-memory model never raises them.

use crate::types::{RoleKey, TaskId};

/// Main assignment-model error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Task ID does not reference an existing task
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Role key is not a known role (enabled or disabled)
    #[error("role not found: {0}")]
    RoleNotFound(RoleKey),

    /// Role key already registered
    #[error("duplicate role key: {0}")]
    DuplicateRole(RoleKey),

    /// Task ID already present in the matrix
    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),

    /// Bulk operation attempted before choosing a role
    #[error("no role selected for bulk assignment")]
    BulkRoleUnset,
}

impl MatrixError {
    /// Check whether this is a missing-reference error
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_) | Self::RoleNotFound(_))
    }
}
