//! Testing utilities for the RMX workspace
//!
//! Shared fixtures: a small staffing role set and a seeded matrix spanning
//! several categories, used by the store and export test suites.

#![allow(missing_docs)]

use rmx_core::{AssignmentState, MatrixConfig, ResponsibilityMatrix, Role, Task};

/// Two enabled roles and one disabled role, the usual column setup.
pub fn staffing_roles() -> Vec<Role> {
    vec![
        Role::new("PX", "Project Executive").with_color("#7c3aed"),
        Role::new("PM1", "Project Manager 1").with_color("#2563eb"),
        Role::new("SUP", "Superintendent").with_color("#ea580c").disabled(),
    ]
}

/// Five tasks spanning four categories, in a stable order.
pub fn seeded_tasks() -> Vec<Task> {
    vec![
        Task::new("Sign the GMP contract").with_assignment("PX", AssignmentState::Primary),
        Task::new("Approve steel invoice").with_assignment("PM1", AssignmentState::Approve),
        Task::new("Process payment application"),
        Task::new("Walk safety inspection").with_assignment("PM1", AssignmentState::Support),
        Task::new("Walk the site with the owner"),
    ]
}

/// A matrix over [`staffing_roles`] and [`seeded_tasks`] with defaults.
pub fn seeded_matrix() -> ResponsibilityMatrix {
    match ResponsibilityMatrix::new(staffing_roles(), seeded_tasks(), MatrixConfig::default()) {
        Ok(matrix) => matrix,
        Err(err) => panic!("seeded fixture must be valid: {err}"),
    }
}
