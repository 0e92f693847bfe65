//! Task repository seam
//!
//! The persistence boundary for the assignment model. The model itself is
//! pure and in-memory; anything that loads or saves tasks implements
//! [`TaskRepository`]. Repositories are synchronous: the model has one
//! logical writer, and atomicity across observers is the repository's
//! concern, not the model's.

use crate::error::StoreError;
use rmx_core::{
    AssignmentState, MatrixConfig, ResponsibilityMatrix, Role, RoleKey, Task, TaskId,
};

/// Persistence seam for roles, tasks, and assignment cells
pub trait TaskRepository {
    /// Load every role in declaration order
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn load_roles(&self) -> Result<Vec<Role>, StoreError>;

    /// Load every task in stable order
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn load_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Persist a whole task (upsert)
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    fn save_task(&mut self, task: &Task) -> Result<(), StoreError>;

    /// Persist one assignment cell
    ///
    /// # Errors
    /// - `StoreError::TaskNotFound` if the store does not hold the task
    fn save_assignment(
        &mut self,
        task_id: &TaskId,
        role: &RoleKey,
        state: AssignmentState,
    ) -> Result<(), StoreError>;
}

/// Build a matrix from whatever a repository holds
///
/// # Errors
/// - load errors from the repository
/// - `StoreError::Model` if the loaded data violates matrix invariants
pub fn load_matrix(
    repo: &impl TaskRepository,
    config: MatrixConfig,
) -> Result<ResponsibilityMatrix, StoreError> {
    let roles = repo.load_roles()?;
    let tasks = repo.load_tasks()?;
    tracing::info!("loaded {} roles, {} tasks from repository", roles.len(), tasks.len());
    Ok(ResponsibilityMatrix::new(roles, tasks, config)?)
}

/// In-memory repository
///
/// Backs tests and demo flows; also the reference semantics for the trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    roles: Vec<Role>,
    tasks: Vec<Task>,
}

impl MemoryRepository {
    /// Create a repository over an initial data set
    #[inline]
    #[must_use]
    pub fn new(roles: Vec<Role>, tasks: Vec<Task>) -> Self {
        Self { roles, tasks }
    }

    /// Number of tasks held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the repository holds no tasks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskRepository for MemoryRepository {
    fn load_roles(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.roles.clone())
    }

    fn load_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.clone())
    }

    fn save_task(&mut self, task: &Task) -> Result<(), StoreError> {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => self.tasks.push(task.clone()),
        }
        Ok(())
    }

    fn save_assignment(
        &mut self,
        task_id: &TaskId,
        role: &RoleKey,
        state: AssignmentState,
    ) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id)
            .ok_or(StoreError::TaskNotFound(*task_id))?;
        task.assignments.insert(role.clone(), state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo() -> MemoryRepository {
        MemoryRepository::new(
            vec![Role::new("PX", "Project Executive")],
            vec![Task::new("Sign owner contract")],
        )
    }

    #[test]
    fn save_task_upserts() {
        let mut repo = repo();
        let mut task = repo.load_tasks().unwrap().remove(0);
        task.description = "Sign revised owner contract".to_string();

        repo.save_task(&task).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.load_tasks().unwrap()[0].description,
            "Sign revised owner contract"
        );

        let new_task = Task::new("Approve invoice");
        repo.save_task(&new_task).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn save_assignment_updates_cell() {
        let mut repo = repo();
        let id = repo.load_tasks().unwrap()[0].id;

        repo.save_assignment(&id, &RoleKey::from("PX"), AssignmentState::Primary)
            .unwrap();

        let tasks = repo.load_tasks().unwrap();
        assert_eq!(
            tasks[0].assignment(&RoleKey::from("PX")),
            Some(AssignmentState::Primary)
        );
    }

    #[test]
    fn save_assignment_unknown_task() {
        let mut repo = repo();
        let err = repo
            .save_assignment(&TaskId::new(), &RoleKey::from("PX"), AssignmentState::Primary)
            .unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(_)));
    }

    #[test]
    fn load_matrix_normalizes() {
        let repo = repo();
        let matrix = load_matrix(&repo, MatrixConfig::default()).unwrap();
        assert_eq!(matrix.tasks().len(), 1);
        assert_eq!(matrix.tasks()[0].assignments.len(), 1);
    }
}
