//! JSON fixture repository
//!
//! Loads a role set and task list from a JSON fixture file and persists
//! writes back to it. The fixture is validated at load time: duplicate
//! role keys, duplicate task IDs, and cells referencing unknown roles are
//! precondition violations surfaced here, before the model ever sees the
//! data.

use crate::error::StoreError;
use crate::repository::TaskRepository;
use rmx_core::{AssignmentState, Role, RoleKey, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk fixture shape: a role set and a task list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatrixFixture {
    /// Roles in declaration order
    pub roles: Vec<Role>,
    /// Tasks in stable order
    pub tasks: Vec<Task>,
}

impl MatrixFixture {
    /// Check fixture preconditions
    ///
    /// # Errors
    /// - `StoreError::Validation` naming the first duplicate role key,
    ///   duplicate task ID, or cell referencing an unknown role
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut keys: HashSet<&RoleKey> = HashSet::with_capacity(self.roles.len());
        for role in &self.roles {
            if !keys.insert(&role.key) {
                return Err(StoreError::Validation(format!(
                    "duplicate role key: {}",
                    role.key
                )));
            }
        }

        let mut ids: HashSet<TaskId> = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !ids.insert(task.id) {
                return Err(StoreError::Validation(format!(
                    "duplicate task id: {}",
                    task.id
                )));
            }
            for key in task.assignments.keys() {
                if !keys.contains(key) {
                    return Err(StoreError::Validation(format!(
                        "task {} references unknown role: {key}",
                        task.id
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Repository backed by a JSON fixture file
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    path: PathBuf,
    fixture: MatrixFixture,
}

impl FixtureRepository {
    /// Open and validate a fixture file
    ///
    /// # Errors
    /// - `StoreError::Io` if the file cannot be read
    /// - `StoreError::Parse` if the JSON is malformed
    /// - `StoreError::Validation` if the data violates preconditions
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)?;
        let fixture: MatrixFixture = serde_json::from_str(&raw)?;
        fixture.validate()?;

        tracing::info!(
            "fixture loaded: {} ({} roles, {} tasks)",
            path.display(),
            fixture.roles.len(),
            fixture.tasks.len()
        );
        Ok(Self { path, fixture })
    }

    /// Create a fixture file from an initial data set
    ///
    /// # Errors
    /// - `StoreError::Validation` if the data violates preconditions
    /// - `StoreError::Io` if the file cannot be written
    pub fn create(
        path: impl AsRef<Path>,
        fixture: MatrixFixture,
    ) -> Result<Self, StoreError> {
        fixture.validate()?;
        let repo = Self {
            path: path.as_ref().to_path_buf(),
            fixture,
        };
        repo.persist()?;
        Ok(repo)
    }

    /// Fixture file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current fixture state back to disk.
    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.fixture)?;
        fs::write(&self.path, raw)?;
        tracing::debug!("fixture persisted: {}", self.path.display());
        Ok(())
    }
}

impl TaskRepository for FixtureRepository {
    fn load_roles(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.fixture.roles.clone())
    }

    fn load_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.fixture.tasks.clone())
    }

    fn save_task(&mut self, task: &Task) -> Result<(), StoreError> {
        match self.fixture.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => self.fixture.tasks.push(task.clone()),
        }
        self.persist()
    }

    fn save_assignment(
        &mut self,
        task_id: &TaskId,
        role: &RoleKey,
        state: AssignmentState,
    ) -> Result<(), StoreError> {
        let task = self
            .fixture
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id)
            .ok_or(StoreError::TaskNotFound(*task_id))?;
        task.assignments.insert(role.clone(), state);
        self.persist()
    }
}
