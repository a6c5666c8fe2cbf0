//! Tree Utilities
//!
//! The task tree held by the UI: a flat list of task records indexed by
//! parent, plus the set of expanded ids, flattened into indented rows.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::TreeError;
use crate::models::{ParentRef, Task, TaskId};

/// Deepest indentation style; deeper rows render with this one
pub const MAX_STYLE_LEVEL: usize = 5;

/// One row of the rendered tree
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    pub task: Task,
    /// Recursion depth from 0 (roots)
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
}

impl VisibleRow {
    pub fn style_level(&self) -> usize {
        self.level.min(MAX_STYLE_LEVEL)
    }

    /// Value of the `data-level` attribute; roots carry none
    pub fn level_attr(&self) -> Option<usize> {
        (self.level > 0).then(|| self.style_level())
    }
}

/// Counts shown in the stats bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub roots: usize,
    /// Depth of the deepest reachable task, roots counting as 1
    pub max_depth: usize,
}

/// Parent links that keep a task from ever being shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// (task, missing parent) pairs
    pub dangling: Vec<(TaskId, TaskId)>,
    /// Tasks whose parent chain loops back on itself
    pub cyclic: Vec<TaskId>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cyclic.is_empty()
    }

    /// Hidden tasks exist and differ from what `previous` already reported
    pub fn needs_warning(&self, previous: &IntegrityReport) -> bool {
        !self.is_clean() && self != previous
    }

    /// Number of tasks that can never become visible for a direct reason
    pub fn hidden_count(&self) -> usize {
        self.dangling.len() + self.cyclic.len()
    }
}

/// Task records in fetch order plus expand/collapse state
#[derive(Debug, Clone, Default)]
pub struct TaskTree {
    tasks: IndexMap<TaskId, Task>,
    children: HashMap<TaskId, Vec<TaskId>>,
    expanded: HashSet<TaskId>,
    integrity: IntegrityReport,
}

impl TaskTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every task record, keeping the expanded set.
    ///
    /// A repeated id overwrites the earlier record in place.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> IntegrityReport {
        let mut by_id = IndexMap::with_capacity(tasks.len());
        for task in tasks {
            by_id.insert(task.id.clone(), task);
        }

        let mut children: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        for task in by_id.values() {
            if let ParentRef::ChildOf(parent_id) = &task.parent {
                children.entry(parent_id.clone()).or_default().push(task.id.clone());
            }
        }

        self.tasks = by_id;
        self.children = children;
        self.integrity = self.validate();
        self.integrity.clone()
    }

    /// Report from the last `set_tasks`
    pub fn integrity(&self) -> &IntegrityReport {
        &self.integrity
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in fetch order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Tasks without a parent, in fetch order
    pub fn roots(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(|task| task.parent.is_root())
    }

    /// Direct children of `parent_id` in fetch order; empty for unknown ids
    pub fn children(&self, parent_id: &TaskId) -> Vec<&Task> {
        self.children
            .get(parent_id)
            .map(|ids| ids.iter().filter_map(|id| self.tasks.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self, id: &TaskId) -> bool {
        self.children.get(id).is_some_and(|ids| !ids.is_empty())
    }

    pub fn is_expanded(&self, id: &TaskId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expand(&mut self, id: &TaskId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn expand_all(&mut self) {
        let parents: Vec<TaskId> = self
            .tasks
            .keys()
            .filter(|id| self.has_children(id))
            .cloned()
            .collect();
        self.expanded.extend(parents);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Rows to display: a pre-order walk from the roots that only descends
    /// into expanded tasks.
    pub fn visible_rows(&self) -> Result<Vec<VisibleRow>, TreeError> {
        let mut rows = Vec::new();
        let mut visited = HashSet::new();
        for root in self.roots() {
            self.collect(root, 0, &mut visited, &mut rows)?;
        }
        Ok(rows)
    }

    fn collect<'a>(
        &'a self,
        task: &'a Task,
        level: usize,
        visited: &mut HashSet<&'a TaskId>,
        rows: &mut Vec<VisibleRow>,
    ) -> Result<(), TreeError> {
        if !visited.insert(&task.id) {
            return Err(TreeError::Cycle(task.id.clone()));
        }

        let expanded = self.is_expanded(&task.id);
        rows.push(VisibleRow {
            task: task.clone(),
            level,
            has_children: self.has_children(&task.id),
            expanded,
        });

        if expanded {
            for child in self.children(&task.id) {
                self.collect(child, level + 1, visited, rows)?;
            }
        }
        Ok(())
    }

    /// True when every ancestor of `task` exists and is expanded
    pub fn is_ancestor_chain_expanded(&self, task: &Task) -> bool {
        let mut seen = HashSet::new();
        let mut current = task;
        while let ParentRef::ChildOf(parent_id) = &current.parent {
            if !seen.insert(&current.id) {
                return false;
            }
            let Some(parent) = self.tasks.get(parent_id) else {
                return false;
            };
            if !self.expanded.contains(&parent.id) {
                return false;
            }
            current = parent;
        }
        true
    }

    /// Find parent links that point nowhere or loop
    pub fn validate(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        for task in self.tasks.values() {
            if let ParentRef::ChildOf(parent_id) = &task.parent {
                if !self.tasks.contains_key(parent_id) {
                    report.dangling.push((task.id.clone(), parent_id.clone()));
                    continue;
                }
            }
            if self.chain_loops(task) {
                report.cyclic.push(task.id.clone());
            }
        }
        report
    }

    fn chain_loops(&self, task: &Task) -> bool {
        let mut seen = HashSet::new();
        let mut current = task;
        loop {
            if !seen.insert(&current.id) {
                return true;
            }
            match &current.parent {
                ParentRef::Root => return false,
                ParentRef::ChildOf(parent_id) => match self.tasks.get(parent_id) {
                    Some(parent) => current = parent,
                    None => return false,
                },
            }
        }
    }

    pub fn stats(&self) -> TreeStats {
        let total = self.tasks.len();
        let completed = self.tasks.values().filter(|t| t.completed).count();

        let mut max_depth = 0;
        let mut visited = HashSet::new();
        let mut stack: Vec<(&TaskId, usize)> = self.roots().map(|t| (&t.id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            max_depth = max_depth.max(depth);
            if let Some(child_ids) = self.children.get(id) {
                stack.extend(child_ids.iter().map(|child| (child, depth + 1)));
            }
        }

        TreeStats {
            total,
            completed,
            pending: total - completed,
            roots: self.roots().count(),
            max_depth,
        }
    }

    /// Choices for the "parent task" selector, in fetch order
    pub fn parent_options(&self) -> Vec<(TaskId, String)> {
        self.tasks
            .values()
            .map(|task| (task.id.clone(), task.name.clone()))
            .collect()
    }
}
