//! RMX Core - Responsibility Assignment Model
//!
//! The assignment model for construction staffing matrices:
//! - Classifies free-text tasks into functional categories
//! - Tracks a per-role assignment state on every task
//! - Applies single-cell and bulk assignment mutations
//! - Projects a filtered, grouped read-only view
//! - Keeps UI scratch state behind named operations
//!
//! # Example
//!
//! ```rust
//! use rmx_core::{
//!     AssignmentState, MatrixConfig, ResponsibilityMatrix, Role, RoleKey, Task,
//! };
//!
//! # fn example() -> Result<(), rmx_core::MatrixError> {
//! let mut matrix = ResponsibilityMatrix::new(
//!     vec![Role::new("PX", "Project Executive")],
//!     vec![Task::new("Sign owner contract")],
//!     MatrixConfig::default(),
//! )?;
//!
//! let id = matrix.tasks()[0].id;
//! matrix.set_assignment(&id, &RoleKey::from("PX"), AssignmentState::Primary)?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod classify;
pub mod error;
pub mod matrix;
pub mod types;
pub mod view;
pub mod view_state;

// Re-exports for convenience
pub use classify::{classify, Category};
pub use error::MatrixError;
pub use matrix::{BulkOutcome, ResponsibilityMatrix, SkipReason};
pub use types::{
    Annotation, AnnotationId, AssignmentState, MatrixConfig, Role, RoleKey, Task, TaskId,
    TaskStatus,
};
pub use view::{project, CategoryGroup, ViewFilter};
pub use view_state::{CellSelector, ViewState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with RMX Core
    pub use crate::{
        classify, project, AssignmentState, BulkOutcome, Category, CellSelector, MatrixConfig,
        MatrixError, ResponsibilityMatrix, Role, RoleKey, Task, TaskId, TaskStatus, ViewFilter,
        ViewState,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn model_round_trip() {
        let mut matrix = ResponsibilityMatrix::new(
            vec![
                Role::new("PX", "Project Executive"),
                Role::new("PM1", "Project Manager 1"),
            ],
            vec![Task::new("Schedule kickoff meeting")],
            MatrixConfig::default(),
        )
        .unwrap();

        let id = matrix.add_task("Approve payment application");
        matrix
            .set_assignment(&id, &RoleKey::from("PM1"), AssignmentState::Primary)
            .unwrap();

        let groups = project(
            matrix.tasks(),
            &ViewFilter::all().with_category(Category::FinancialManagement),
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tasks[0].id, id);
    }
}
