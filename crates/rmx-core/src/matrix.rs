//! Responsibility matrix
//!
//! Owns the task list and the role registry and applies all mutations:
//! - Single-cell assignment changes
//! - Bulk assignment across a task selection (partial-failure policy)
//! - Task creation, deletion, and annotation
//! - Role registration with back-fill of existing tasks
//!
//! The matrix is the single logical writer; every operation runs to
//! completion before the next observation, so no internal locking exists.

use crate::error::MatrixError;
use crate::types::{
    Annotation, AnnotationId, AssignmentState, MatrixConfig, Role, RoleKey, Task, TaskId,
};
use indexmap::IndexMap;

/// Reason a task was skipped during a bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Task ID did not reference an existing task
    TaskNotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound => f.write_str("task not found"),
        }
    }
}

/// Outcome of a bulk assignment
///
/// A bulk operation is never aborted by one bad task ID: valid tasks are
/// updated and invalid IDs are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    /// Number of tasks updated
    pub updated: usize,
    /// Task IDs that failed preconditions, with the reason
    pub skipped: Vec<(TaskId, SkipReason)>,
}

impl BulkOutcome {
    /// Check whether every task in the batch was updated
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The responsibility assignment matrix
///
/// # Invariants
/// - Every task holds exactly one assignment cell per known role key,
///   in role declaration order
/// - Task order is stable: views and exports see insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsibilityMatrix {
    config: MatrixConfig,
    roles: IndexMap<RoleKey, Role>,
    tasks: Vec<Task>,
}

impl ResponsibilityMatrix {
    /// Create a matrix from a role set and an initial task list
    ///
    /// Every task's cells are normalized to the known role set: entries for
    /// unknown roles are dropped and missing entries are back-filled with
    /// the configured back-fill state.
    ///
    /// # Errors
    /// - `MatrixError::DuplicateRole` if two roles share a key
    /// - `MatrixError::DuplicateTask` if two tasks share an ID
    pub fn new(
        roles: Vec<Role>,
        tasks: Vec<Task>,
        config: MatrixConfig,
    ) -> Result<Self, MatrixError> {
        let mut role_map = IndexMap::with_capacity(roles.len());
        for role in roles {
            if role_map.contains_key(&role.key) {
                return Err(MatrixError::DuplicateRole(role.key));
            }
            role_map.insert(role.key.clone(), role);
        }

        let mut matrix = Self {
            config,
            roles: role_map,
            tasks: Vec::with_capacity(tasks.len()),
        };
        for task in tasks {
            matrix.insert_task(task)?;
        }

        tracing::debug!(
            "matrix created: {} roles, {} tasks",
            matrix.roles.len(),
            matrix.tasks.len()
        );
        Ok(matrix)
    }

    /// Create an empty matrix with the given role set
    ///
    /// # Errors
    /// - `MatrixError::DuplicateRole` if two roles share a key
    pub fn with_roles(roles: Vec<Role>) -> Result<Self, MatrixError> {
        Self::new(roles, Vec::new(), MatrixConfig::default())
    }

    /// Insert an existing task, normalizing its assignment cells
    ///
    /// # Errors
    /// - `MatrixError::DuplicateTask` if the ID is already present
    pub fn insert_task(&mut self, task: Task) -> Result<TaskId, MatrixError> {
        if self.tasks.iter().any(|t| t.id == task.id) {
            return Err(MatrixError::DuplicateTask(task.id));
        }
        let task = self.normalize(task);
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Create a new task from a description
    ///
    /// The category is classified once here; every cell starts at `None`
    /// and the status comes from the configuration.
    pub fn add_task(&mut self, description: impl Into<String>) -> TaskId {
        let mut task = Task::new(description).with_status(self.config.default_status);
        for key in self.roles.keys() {
            task.assignments.insert(key.clone(), AssignmentState::None);
        }
        let id = task.id;
        tracing::debug!("task added: {} ({})", id, task.category);
        self.tasks.push(task);
        id
    }

    /// Delete a task, returning it
    ///
    /// # Errors
    /// - `MatrixError::TaskNotFound` if the ID is unknown
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task, MatrixError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or(MatrixError::TaskNotFound(*id))?;
        tracing::debug!("task removed: {id}");
        Ok(self.tasks.remove(idx))
    }

    /// Set one assignment cell
    ///
    /// Replaces exactly the `(task, role)` cell; every other cell and field
    /// is untouched. Disabled roles still hold state and remain settable.
    ///
    /// # Errors
    /// - `MatrixError::TaskNotFound` / `MatrixError::RoleNotFound` on a
    ///   missing reference; neither is a panic
    pub fn set_assignment(
        &mut self,
        task_id: &TaskId,
        role: &RoleKey,
        state: AssignmentState,
    ) -> Result<(), MatrixError> {
        if !self.roles.contains_key(role) {
            return Err(MatrixError::RoleNotFound(role.clone()));
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id)
            .ok_or(MatrixError::TaskNotFound(*task_id))?;

        task.assignments.insert(role.clone(), state);
        tracing::debug!("assignment set: task={task_id} role={role} state={state}");
        Ok(())
    }

    /// Apply one assignment state to one role across a set of tasks
    ///
    /// Each `(task, role)` mutation is independent; ordering between tasks
    /// does not matter. Unknown task IDs are skipped and reported, the rest
    /// of the batch proceeds.
    ///
    /// # Errors
    /// - `MatrixError::RoleNotFound` fails the whole batch before any
    ///   mutation, since every update targets the same role
    pub fn bulk_assign(
        &mut self,
        task_ids: &[TaskId],
        role: &RoleKey,
        state: AssignmentState,
    ) -> Result<BulkOutcome, MatrixError> {
        if !self.roles.contains_key(role) {
            return Err(MatrixError::RoleNotFound(role.clone()));
        }

        let mut outcome = BulkOutcome::default();
        for task_id in task_ids {
            match self.set_assignment(task_id, role, state) {
                Ok(()) => outcome.updated += 1,
                Err(MatrixError::TaskNotFound(id)) => {
                    outcome.skipped.push((id, SkipReason::TaskNotFound));
                }
                Err(other) => return Err(other),
            }
        }

        tracing::info!(
            "bulk assignment: role={} state={} updated={} skipped={}",
            role,
            state,
            outcome.updated,
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    /// Register a new role, back-filling every existing task
    ///
    /// Restores the totality invariant: each existing task gets the
    /// configured back-fill state for the new key.
    ///
    /// # Errors
    /// - `MatrixError::DuplicateRole` if the key is already registered
    pub fn add_role(&mut self, role: Role) -> Result<(), MatrixError> {
        if self.roles.contains_key(&role.key) {
            return Err(MatrixError::DuplicateRole(role.key));
        }
        let key = role.key.clone();
        for task in &mut self.tasks {
            task.assignments
                .insert(key.clone(), self.config.backfill_state);
        }
        tracing::info!(
            "role added: {key}, back-filled {} tasks with {}",
            self.tasks.len(),
            self.config.backfill_state
        );
        self.roles.insert(key, role);
        Ok(())
    }

    /// Append an annotation to a task, returning its ID
    ///
    /// # Errors
    /// - `MatrixError::TaskNotFound` if the ID is unknown
    pub fn annotate(
        &mut self,
        task_id: &TaskId,
        user: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<AnnotationId, MatrixError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id)
            .ok_or(MatrixError::TaskNotFound(*task_id))?;

        let annotation = Annotation::new(user, comment);
        let id = annotation.id;
        task.annotations.push(annotation);
        Ok(id)
    }

    /// Look up a task by ID
    #[inline]
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// All tasks in stable insertion order
    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a role by key
    #[inline]
    #[must_use]
    pub fn role(&self, key: &RoleKey) -> Option<&Role> {
        self.roles.get(key)
    }

    /// All known roles in declaration order, enabled or not
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Enabled roles only (the assignable columns)
    pub fn assignable_roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values().filter(|r| r.enabled)
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Rewrite a task's cells to exactly the known role set, in role order.
    fn normalize(&self, mut task: Task) -> Task {
        let mut cells = IndexMap::with_capacity(self.roles.len());
        for key in self.roles.keys() {
            let state = task
                .assignments
                .get(key)
                .copied()
                .unwrap_or(self.config.backfill_state);
            cells.insert(key.clone(), state);
        }
        task.assignments = cells;
        task
    }
}
