//! Core types for the responsibility matrix
//!
//! Defines the fundamental types for the assignment model:
//! - Task and role identifiers
//! - Assignment states and task statuses
//! - Roles, tasks, and annotations
//! - Matrix configuration

use crate::classify::{classify, Category};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique task identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Ulid);

impl TaskId {
    /// Generate new task ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique annotation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotationId(pub Ulid);

impl AnnotationId {
    /// Generate new annotation ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for AnnotationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role column key (short identifier such as `"PX"` or `"PM1"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleKey(String);

impl RoleKey {
    /// Create new role key
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoleKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RoleKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::borrow::Borrow<str> for RoleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A role's relationship to a task
///
/// Every task carries exactly one state per known role; `None` is the
/// explicit "no involvement" state, not an absent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentState {
    /// Role approves the task outcome
    Approve,
    /// Role owns the task
    Primary,
    /// Role supports the primary owner
    Support,
    /// Role has no involvement
    None,
}

impl AssignmentState {
    /// All assignment states, in selector display order
    pub const ALL: [Self; 4] = [Self::Approve, Self::Primary, Self::Support, Self::None];

    /// Check whether this state represents actual involvement
    #[inline]
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for AssignmentState {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Approve => "Approve",
            Self::Primary => "Primary",
            Self::Support => "Support",
            Self::None => "None",
        };
        f.write_str(label)
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is being worked
    Active,
    /// Task is waiting to start
    Pending,
    /// Task is done
    Completed,
}

impl TaskStatus {
    /// Check whether the task still needs attention
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A staffing role (matrix column)
///
/// Roles are created and edited by an external settings surface; the
/// assignment model treats them as read-only. Disabled roles keep any
/// historical assignment state but are excluded from assignable columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Short unique key
    pub key: RoleKey,
    /// Display name
    pub name: String,
    /// Display color (presentation only)
    pub color: String,
    /// Whether the role is an assignable column
    pub enabled: bool,
}

impl Role {
    /// Create new enabled role
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<RoleKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: "#6b7280".to_string(),
            enabled: true,
        }
    }

    /// With display color
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Mark role as disabled
    #[inline]
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Annotation on a task (append-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation identifier
    pub id: AnnotationId,
    /// Author
    pub user: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Free-text comment
    pub comment: String,
}

impl Annotation {
    /// Create new annotation stamped with the current time
    #[inline]
    #[must_use]
    pub fn new(user: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            id: AnnotationId::new(),
            user: user.into(),
            timestamp: Utc::now(),
            comment: comment.into(),
        }
    }
}

/// A matrix row: one task with a per-role assignment state
///
/// # Invariants
/// - `category` is derived once at creation from `description`
/// - inside a matrix, `assignments` holds exactly one entry per known role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier, stable for the task's lifetime
    pub id: TaskId,
    /// Derived functional grouping
    pub category: Category,
    /// Free-text description
    pub description: String,
    /// Role key -> assignment state, total over known roles
    pub assignments: IndexMap<RoleKey, AssignmentState>,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Append-only annotations
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Task {
    /// Create new task, classifying the description
    #[inline]
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            id: TaskId::new(),
            category: classify(&description),
            description,
            assignments: IndexMap::new(),
            status: TaskStatus::Active,
            annotations: Vec::new(),
        }
    }

    /// With explicit task ID (fixtures and tests)
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// With lifecycle status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// With one assignment cell
    #[inline]
    #[must_use]
    pub fn with_assignment(mut self, role: impl Into<RoleKey>, state: AssignmentState) -> Self {
        self.assignments.insert(role.into(), state);
        self
    }

    /// Assignment state for a role, if the role is known to this task
    #[inline]
    #[must_use]
    pub fn assignment(&self, role: &RoleKey) -> Option<AssignmentState> {
        self.assignments.get(role).copied()
    }
}

/// Matrix configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Status given to newly created tasks
    pub default_status: TaskStatus,
    /// State back-filled when a role is added after tasks exist
    pub backfill_state: AssignmentState,
}

impl MatrixConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default status for new tasks
    #[inline]
    #[must_use]
    pub fn with_default_status(mut self, status: TaskStatus) -> Self {
        self.default_status = status;
        self
    }

    /// With back-fill state for late-added roles
    #[inline]
    #[must_use]
    pub fn with_backfill_state(mut self, state: AssignmentState) -> Self {
        self.backfill_state = state;
        self
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            default_status: TaskStatus::Active,
            backfill_state: AssignmentState::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_generation() {
        let id1 = TaskId::new();
        let id2 = TaskId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn assignment_state_is_assigned() {
        assert!(AssignmentState::Approve.is_assigned());
        assert!(AssignmentState::Primary.is_assigned());
        assert!(AssignmentState::Support.is_assigned());
        assert!(!AssignmentState::None.is_assigned());
    }

    #[test]
    fn task_status_is_open() {
        assert!(TaskStatus::Active.is_open());
        assert!(TaskStatus::Pending.is_open());
        assert!(!TaskStatus::Completed.is_open());
    }

    #[test]
    fn task_builder() {
        let task = Task::new("Sign subcontract agreement")
            .with_status(TaskStatus::Pending)
            .with_assignment("PX", AssignmentState::Primary);

        assert_eq!(task.category, Category::ContractManagement);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(
            task.assignment(&RoleKey::from("PX")),
            Some(AssignmentState::Primary)
        );
    }

    #[test]
    fn role_builder() {
        let role = Role::new("PM1", "Project Manager 1")
            .with_color("#2563eb")
            .disabled();

        assert_eq!(role.key.as_str(), "PM1");
        assert!(!role.enabled);
    }

    #[test]
    fn status_serde_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }

    #[test]
    fn annotation_stamps_author() {
        let note = Annotation::new("j.ortega", "Confirmed with field office");
        assert_eq!(note.user, "j.ortega");
        assert_eq!(note.comment, "Confirmed with field office");
    }

    #[test]
    fn matrix_config_builder() {
        let config = MatrixConfig::new()
            .with_default_status(TaskStatus::Pending)
            .with_backfill_state(AssignmentState::Support);

        assert_eq!(config.default_status, TaskStatus::Pending);
        assert_eq!(config.backfill_state, AssignmentState::Support);
    }
}
