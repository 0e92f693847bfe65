//! Externally-owned view state
//!
//! UI scratch state kept out of the matrix proper: expanded category
//! groups, the checked task selection that scopes a bulk operation, the
//! pending bulk role/state choice, and the single-cell selector state
//! machine. State is mutated only through named operations so the
//! assignment model itself stays free of UI coupling.

use crate::classify::Category;
use crate::error::MatrixError;
use crate::matrix::{BulkOutcome, ResponsibilityMatrix};
use crate::types::{AssignmentState, RoleKey, TaskId};
use std::collections::BTreeSet;

/// Scratch state for the matrix view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Category groups currently expanded
    expanded: BTreeSet<Category>,
    /// Task IDs currently checked for a bulk operation
    selected: BTreeSet<TaskId>,
    /// Pending bulk role choice
    bulk_role: Option<RoleKey>,
    /// Pending bulk state choice
    bulk_state: AssignmentState,
}

impl ViewState {
    /// Create empty view state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category group open or closed
    pub fn toggle_category(&mut self, category: Category) {
        if !self.expanded.remove(&category) {
            self.expanded.insert(category);
        }
    }

    /// Check whether a category group is expanded
    #[inline]
    #[must_use]
    pub fn is_expanded(&self, category: Category) -> bool {
        self.expanded.contains(&category)
    }

    /// Check a task for bulk assignment
    pub fn select(&mut self, id: TaskId) {
        self.selected.insert(id);
    }

    /// Uncheck a task
    pub fn deselect(&mut self, id: &TaskId) {
        self.selected.remove(id);
    }

    /// Flip a task's checked state
    pub fn toggle_selection(&mut self, id: TaskId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Check whether a task is selected
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &TaskId) -> bool {
        self.selected.contains(id)
    }

    /// Currently selected task IDs
    #[inline]
    #[must_use]
    pub fn selected(&self) -> &BTreeSet<TaskId> {
        &self.selected
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Choose the role and state for the next bulk operation
    pub fn set_bulk_choice(&mut self, role: impl Into<RoleKey>, state: AssignmentState) {
        self.bulk_role = Some(role.into());
        self.bulk_state = state;
    }

    /// Reset the bulk role/state scratch fields to their defaults
    pub fn reset_bulk_choice(&mut self) {
        self.bulk_role = None;
        self.bulk_state = AssignmentState::default();
    }

    /// Pending bulk choice, if a role has been picked
    #[inline]
    #[must_use]
    pub fn bulk_choice(&self) -> Option<(&RoleKey, AssignmentState)> {
        self.bulk_role.as_ref().map(|role| (role, self.bulk_state))
    }

    /// Run the pending bulk assignment over the current selection
    ///
    /// Once the operation completes (clean, partially failed, or rejected
    /// for an unknown role), the selection is cleared and the bulk scratch
    /// fields reset to defaults.
    ///
    /// # Errors
    /// - `MatrixError::BulkRoleUnset` if no role has been chosen; the
    ///   selection is kept, since nothing ran
    /// - `MatrixError::RoleNotFound` from the underlying bulk operation
    pub fn apply_bulk(
        &mut self,
        matrix: &mut ResponsibilityMatrix,
    ) -> Result<BulkOutcome, MatrixError> {
        let Some(role) = self.bulk_role.clone() else {
            return Err(MatrixError::BulkRoleUnset);
        };
        let ids: Vec<TaskId> = self.selected.iter().copied().collect();
        let result = matrix.bulk_assign(&ids, &role, self.bulk_state);

        self.clear_selection();
        self.reset_bulk_choice();
        result
    }
}

/// Single-cell assignment selector
///
/// A two-state machine: `Closed -> Open -> Closed`. Opening targets one
/// `(task, role)` cell; choosing a state applies it and closes; closing
/// without choosing leaves the task unchanged. No draft state exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellSelector {
    /// No cell popover is open
    #[default]
    Closed,
    /// Popover open for one cell
    Open {
        /// Target task
        task: TaskId,
        /// Target role column
        role: RoleKey,
    },
}

impl CellSelector {
    /// Open the selector on a cell (re-opening retargets it)
    pub fn open(&mut self, task: TaskId, role: impl Into<RoleKey>) {
        *self = Self::Open {
            task,
            role: role.into(),
        };
    }

    /// Close without choosing; the cell is unchanged
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Check whether the selector is open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Apply the chosen state to the open cell and close
    ///
    /// Returns `Ok(true)` when a cell was updated and `Ok(false)` when the
    /// selector was already closed (nothing to apply). The selector closes
    /// even when the mutation fails.
    ///
    /// # Errors
    /// - `MatrixError::TaskNotFound` / `MatrixError::RoleNotFound` from the
    ///   underlying assignment
    pub fn choose(
        &mut self,
        state: AssignmentState,
        matrix: &mut ResponsibilityMatrix,
    ) -> Result<bool, MatrixError> {
        match std::mem::take(self) {
            Self::Closed => Ok(false),
            Self::Open { task, role } => {
                matrix.set_assignment(&task, &role, state)?;
                Ok(true)
            }
        }
    }
}
