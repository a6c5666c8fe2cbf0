//! User Intents
//!
//! Every action a view can request, routed through one dispatcher.

use crate::commands::Mutation;
use crate::models::{NewTask, ParentRef, Task, TaskEdit, TaskId};
use crate::tree::TaskTree;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ToggleExpand(TaskId),
    ExpandAll,
    CollapseAll,
    Refresh,
    OpenAdd(ParentRef),
    OpenEdit(TaskId),
    CloseModal,
    ToggleComplete(TaskId),
    Delete(TaskId),
    SubmitAdd(NewTask),
    SubmitEdit(TaskId, TaskEdit),
    ToggleTheme,
    Dismiss(u64),
}

impl Intent {
    /// Apply expand/collapse intents to the tree.
    ///
    /// Returns false for intents that are not about expansion.
    pub fn apply_to_tree(&self, tree: &mut TaskTree) -> bool {
        match self {
            Intent::ToggleExpand(id) => tree.toggle_expand(id),
            Intent::ExpandAll => tree.expand_all(),
            Intent::CollapseAll => tree.collapse_all(),
            _ => return false,
        }
        true
    }

    /// The service call this intent stands for, if any.
    ///
    /// Edits need the current record; an edit of a task that vanished in a
    /// reload yields nothing.
    pub fn to_mutation(&self, tree: &TaskTree) -> Option<Mutation> {
        match self {
            Intent::SubmitAdd(new_task) => Some(Mutation::Create(new_task.clone())),
            Intent::SubmitEdit(id, edit) => tree
                .get(id)
                .map(|current: &Task| Mutation::Update(current.clone(), edit.clone())),
            Intent::ToggleComplete(id) => Some(Mutation::ToggleComplete(id.clone())),
            Intent::Delete(id) => Some(Mutation::Delete(id.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TaskTree {
        let mut tree = TaskTree::new();
        tree.set_tasks(vec![
            Task::new("1", "One", ParentRef::Root),
            Task::new("2", "Two", ParentRef::ChildOf("1".into())),
        ]);
        tree
    }

    #[test]
    fn test_expansion_intents_change_tree_only() {
        let mut tree = tree();

        assert!(Intent::ToggleExpand("1".into()).apply_to_tree(&mut tree));
        assert!(tree.is_expanded(&"1".into()));
        assert!(Intent::CollapseAll.apply_to_tree(&mut tree));
        assert!(!tree.is_expanded(&"1".into()));
        assert!(Intent::ExpandAll.apply_to_tree(&mut tree));
        assert!(tree.is_expanded(&"1".into()));

        assert!(!Intent::Refresh.apply_to_tree(&mut tree));
        assert!(Intent::Refresh.to_mutation(&tree).is_none());
        assert!(Intent::ToggleExpand("1".into()).to_mutation(&tree).is_none());
    }

    #[test]
    fn test_remote_intents_map_to_mutations() {
        let tree = tree();
        let edit = TaskEdit::new("Uno", "").unwrap();

        assert_eq!(
            Intent::Delete("2".into()).to_mutation(&tree),
            Some(Mutation::Delete("2".into()))
        );
        assert_eq!(
            Intent::ToggleComplete("1".into()).to_mutation(&tree),
            Some(Mutation::ToggleComplete("1".into()))
        );
        match Intent::SubmitEdit("1".into(), edit.clone()).to_mutation(&tree) {
            Some(Mutation::Update(current, e)) => {
                assert_eq!(current.name, "One");
                assert_eq!(e, edit);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(Intent::SubmitEdit("gone".into(), edit).to_mutation(&tree), None);
    }
}
