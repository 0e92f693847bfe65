//! Filtered, grouped view projection
//!
//! A pure, read-only projection of the task list: tasks pass a conjunctive
//! filter (search term AND category AND role involvement), survivors are
//! partitioned by category, and groups come back sorted by category label.
//! Nothing here mutates tasks; the projection is recomputable at any time
//! from the current task list and filter values.

use crate::classify::Category;
use crate::types::{RoleKey, Task};
use std::collections::BTreeMap;

/// Filter values for the matrix view
///
/// `None` in any field means "all" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilter {
    /// Case-insensitive substring over description or category label
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<Category>,
    /// Only tasks where this role's cell is not `None`
    pub role: Option<RoleKey>,
}

impl ViewFilter {
    /// Filter that passes every task
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// With search term
    #[inline]
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// With category filter
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// With role-involvement filter
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<RoleKey>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Check whether a task passes every active filter dimension
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let in_description = task.description.to_lowercase().contains(&needle);
            let in_category = task.category.label().to_lowercase().contains(&needle);
            if !needle.is_empty() && !in_description && !in_category {
                return false;
            }
        }

        if let Some(category) = self.category {
            if task.category != category {
                return false;
            }
        }

        if let Some(role) = &self.role {
            // Unknown role keys match nothing.
            match task.assignment(role) {
                Some(state) if state.is_assigned() => {}
                _ => return false,
            }
        }

        true
    }
}

/// One category partition of the projected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// Group category
    pub category: Category,
    /// Surviving tasks in stable input order
    pub tasks: Vec<&'a Task>,
}

/// Project the task list through a filter into ordered category groups
///
/// Groups are sorted lexicographically ascending by category label; task
/// order within a group is the input order, with no additional sort key.
#[must_use]
pub fn project<'a>(tasks: &'a [Task], filter: &ViewFilter) -> Vec<CategoryGroup<'a>> {
    let mut groups: BTreeMap<&'static str, CategoryGroup<'a>> = BTreeMap::new();

    for task in tasks.iter().filter(|t| filter.matches(t)) {
        groups
            .entry(task.category.label())
            .or_insert_with(|| CategoryGroup {
                category: task.category,
                tasks: Vec::new(),
            })
            .tasks
            .push(task);
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssignmentState;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Sign steel subcontract").with_assignment("PX", AssignmentState::Primary),
            Task::new("Approve steel invoice").with_assignment("PM1", AssignmentState::Approve),
            Task::new("Review payment application"),
            Task::new("Walk quality inspection").with_assignment("PM1", AssignmentState::Support),
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all());
        let total: usize = groups.iter().map(|g| g.tasks.len()).sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn search_matches_description_case_insensitive() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all().with_search("STEEL"));
        let found: Vec<_> = groups
            .iter()
            .flat_map(|g| &g.tasks)
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(found, vec!["Sign steel subcontract", "Approve steel invoice"]);
    }

    #[test]
    fn search_matches_category_label() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all().with_search("financial"));
        // "financial" is nowhere in the descriptions, but two tasks sit in
        // the Financial Management category.
        let total: usize = groups.iter().map(|g| g.tasks.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn category_filter_is_exact() {
        let tasks = sample();
        let filter = ViewFilter::all().with_category(Category::QualitySafety);
        let groups = project(&tasks, &filter);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, Category::QualitySafety);
        assert_eq!(groups[0].tasks.len(), 1);
    }

    #[test]
    fn role_filter_excludes_none_cells() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all().with_role("PM1"));
        for group in &groups {
            for task in &group.tasks {
                assert!(task
                    .assignment(&RoleKey::from("PM1"))
                    .is_some_and(|s| s.is_assigned()));
            }
        }
        let total: usize = groups.iter().map(|g| g.tasks.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn unknown_role_filter_matches_nothing() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all().with_role("CFO"));
        assert!(groups.is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let tasks = sample();
        let filter = ViewFilter::all()
            .with_search("steel")
            .with_role("PM1");
        let groups = project(&tasks, &filter);
        let found: Vec<_> = groups
            .iter()
            .flat_map(|g| &g.tasks)
            .map(|t| t.description.as_str())
            .collect();
        // "Sign steel subcontract" matches the search but PM1 has no cell.
        assert_eq!(found, vec!["Approve steel invoice"]);
    }

    #[test]
    fn groups_sorted_by_label_tasks_in_input_order() {
        let tasks = sample();
        let groups = project(&tasks, &ViewFilter::all());

        let labels: Vec<_> = groups.iter().map(|g| g.category.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);

        // Both financial tasks stay in input order.
        let financial = groups
            .iter()
            .find(|g| g.category == Category::FinancialManagement)
            .unwrap();
        let descs: Vec<_> = financial.tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descs, vec!["Approve steel invoice", "Review payment application"]);
    }

    #[test]
    fn projection_does_not_mutate() {
        let tasks = sample();
        let before = tasks.clone();
        let _ = project(&tasks, &ViewFilter::all().with_search("steel"));
        assert_eq!(before, tasks);
    }
}
