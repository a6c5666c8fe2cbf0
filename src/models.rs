//! Frontend Models
//!
//! Data structures matching the task service's JSON records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ServiceError;

/// Opaque task identifier assigned by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Where a task hangs in the tree.
///
/// On the wire this is the nullable `parent_id` field. `null`, a missing
/// field and the empty string all mean `Root`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ParentRef {
    #[default]
    Root,
    ChildOf(TaskId),
}

impl ParentRef {
    pub fn is_root(&self) -> bool {
        matches!(self, ParentRef::Root)
    }

    pub fn parent_id(&self) -> Option<&TaskId> {
        match self {
            ParentRef::Root => None,
            ParentRef::ChildOf(id) => Some(id),
        }
    }
}

impl From<Option<String>> for ParentRef {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) if !id.is_empty() => ParentRef::ChildOf(TaskId(id)),
            _ => ParentRef::Root,
        }
    }
}

impl From<ParentRef> for Option<String> {
    fn from(value: ParentRef) -> Self {
        value.parent_id().map(|id| id.0.clone())
    }
}

/// Task record (matches service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "parent_id", default)]
    pub parent: ParentRef,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// `null` text fields decode as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>, parent: ParentRef) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            completed: false,
            parent,
            due_date: None,
        }
    }
}

/// Validated input for creating a task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    #[serde(rename = "parent_id")]
    pub parent: ParentRef,
}

impl NewTask {
    pub fn new(
        name: &str,
        description: &str,
        parent: ParentRef,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            name: validated_name(name)?,
            description: description.trim().to_string(),
            parent,
        })
    }
}

/// Validated name/description edit of an existing task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskEdit {
    pub name: String,
    pub description: String,
}

impl TaskEdit {
    pub fn new(name: &str, description: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            name: validated_name(name)?,
            description: description.trim().to_string(),
        })
    }

    /// The task as it looks after this edit is applied
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            name: self.name.clone(),
            description: self.description.clone(),
            ..task.clone()
        }
    }
}

fn validated_name(name: &str) -> Result<String, ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation("task name is required".into()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_ref_decodes_null_missing_and_empty_as_root() {
        let null: Task =
            serde_json::from_str(r#"{"id":"a","name":"A","parent_id":null}"#).unwrap();
        let missing: Task = serde_json::from_str(r#"{"id":"b","name":"B"}"#).unwrap();
        let empty: Task =
            serde_json::from_str(r#"{"id":"c","name":"C","parent_id":""}"#).unwrap();

        assert_eq!(null.parent, ParentRef::Root);
        assert_eq!(missing.parent, ParentRef::Root);
        assert_eq!(empty.parent, ParentRef::Root);
    }

    #[test]
    fn test_task_decodes_service_record_and_ignores_extra_fields() {
        let json = r#"{
            "id": "7f3e",
            "name": "Write report",
            "description": "quarterly",
            "due_date": null,
            "parent_id": "1a2b",
            "completed": true,
            "children": ["9c"],
            "created_at": "2024-05-01T10:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::from("7f3e"));
        assert_eq!(task.parent, ParentRef::ChildOf(TaskId::from("1a2b")));
        assert!(task.completed);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_null_description_does_not_drop_the_list() {
        let json = r#"[
            {"id":"a","name":"A","description":null,"completed":false,"parent_id":null},
            {"id":"b","name":"B","description":"second","completed":true,"parent_id":"a"}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "");
        assert_eq!(tasks[1].description, "second");
        assert_eq!(tasks[1].parent, ParentRef::ChildOf("a".into()));
    }

    #[test]
    fn test_new_task_serializes_parent_as_parent_id() {
        let root = NewTask::new("Root", "", ParentRef::Root).unwrap();
        let child = NewTask::new("Child", "d", ParentRef::ChildOf("p1".into())).unwrap();

        let root_json = serde_json::to_value(&root).unwrap();
        let child_json = serde_json::to_value(&child).unwrap();

        assert_eq!(root_json["parent_id"], serde_json::Value::Null);
        assert_eq!(child_json["parent_id"], "p1");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert!(matches!(
            NewTask::new("   ", "desc", ParentRef::Root),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(TaskEdit::new("", "x"), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_edit_replaces_name_and_description_only() {
        let mut task = Task::new("t1", "Old", ParentRef::ChildOf("p".into()));
        task.completed = true;
        let edit = TaskEdit::new("  New  ", " body ").unwrap();

        let updated = edit.apply_to(&task);

        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, "body");
        assert!(updated.completed);
        assert_eq!(updated.parent, task.parent);
    }
}
