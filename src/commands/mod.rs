//! Task Service Commands
//!
//! The remote task service seen from the front end: a CRUD trait, the
//! mutations the UI can request, and the HTTP binding used in the browser.

mod http;

use crate::error::ServiceError;
use crate::models::{NewTask, Task, TaskEdit, TaskId};

pub use http::HttpTaskService;

/// CRUD surface of the remote task service
#[allow(async_fn_in_trait)]
pub trait TaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError>;

    async fn create_task(&self, new_task: &NewTask) -> Result<Task, ServiceError>;

    async fn update_task(&self, current: &Task, edit: &TaskEdit) -> Result<Task, ServiceError>;

    /// Flip completion, returning the new state
    async fn toggle_completion(&self, id: &TaskId) -> Result<bool, ServiceError>;

    async fn delete_task(&self, id: &TaskId) -> Result<(), ServiceError>;
}

/// A change the user asked the service to make
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(NewTask),
    Update(Task, TaskEdit),
    ToggleComplete(TaskId),
    Delete(TaskId),
}

impl Mutation {
    /// Toast text when the service rejects or cannot be reached
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::Create(_) => "Failed to add task",
            Mutation::Update(..) => "Failed to update task",
            Mutation::ToggleComplete(_) => "Failed to update task completion",
            Mutation::Delete(_) => "Failed to delete task",
        }
    }
}

/// Failure text for a reload
pub const LOAD_FAILURE: &str = "Failed to load tasks";

/// Fetch the full task list for a tree rebuild
pub async fn load_tasks<S: TaskService>(service: &S) -> Result<Vec<Task>, ServiceError> {
    let tasks = service.list_tasks().await?;
    log::debug!("loaded {} tasks", tasks.len());
    Ok(tasks)
}

/// Run one mutation, returning the success toast text
pub async fn perform<S: TaskService>(
    service: &S,
    mutation: &Mutation,
) -> Result<String, ServiceError> {
    match mutation {
        Mutation::Create(new_task) => {
            let task = service.create_task(new_task).await?;
            log::info!("created task {} under {:?}", task.id, task.parent);
            Ok("Task added successfully!".to_string())
        }
        Mutation::Update(current, edit) => {
            let task = service.update_task(current, edit).await?;
            log::info!("updated task {}", task.id);
            Ok("Task updated successfully!".to_string())
        }
        Mutation::ToggleComplete(id) => {
            let completed = service.toggle_completion(id).await?;
            log::info!("task {id} completed={completed}");
            let state = if completed { "complete" } else { "incomplete" };
            Ok(format!("Task marked as {state}!"))
        }
        Mutation::Delete(id) => {
            service.delete_task(id).await?;
            log::info!("deleted task {id}");
            Ok("Task deleted successfully!".to_string())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::ParentRef;
    use std::cell::{Cell, RefCell};

    /// In-memory task service
    #[derive(Default)]
    pub(crate) struct MemoryService {
        pub tasks: RefCell<Vec<Task>>,
        next_id: Cell<u32>,
        pub offline: Cell<bool>,
    }

    impl MemoryService {
        pub fn with_tasks(tasks: Vec<Task>) -> Self {
            Self { tasks: RefCell::new(tasks), ..Default::default() }
        }

        fn online(&self) -> Result<(), ServiceError> {
            if self.offline.get() {
                return Err(ServiceError::Transport("Failed to fetch".into()));
            }
            Ok(())
        }

        fn not_found() -> ServiceError {
            ServiceError::Status { status: 404, body: r#"{"error":"Task not found"}"#.into() }
        }
    }

    impl TaskService for MemoryService {
        async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
            self.online()?;
            Ok(self.tasks.borrow().clone())
        }

        async fn create_task(&self, new_task: &NewTask) -> Result<Task, ServiceError> {
            self.online()?;
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            let mut task = Task::new(format!("t{id}"), new_task.name.clone(), new_task.parent.clone());
            task.description = new_task.description.clone();
            self.tasks.borrow_mut().push(task.clone());
            Ok(task)
        }

        async fn update_task(&self, current: &Task, edit: &TaskEdit) -> Result<Task, ServiceError> {
            self.online()?;
            let mut tasks = self.tasks.borrow_mut();
            let stored = tasks
                .iter_mut()
                .find(|t| t.id == current.id)
                .ok_or_else(Self::not_found)?;
            *stored = edit.apply_to(stored);
            Ok(stored.clone())
        }

        async fn toggle_completion(&self, id: &TaskId) -> Result<bool, ServiceError> {
            self.online()?;
            let mut tasks = self.tasks.borrow_mut();
            let stored = tasks.iter_mut().find(|t| &t.id == id).ok_or_else(Self::not_found)?;
            stored.completed = !stored.completed;
            Ok(stored.completed)
        }

        async fn delete_task(&self, id: &TaskId) -> Result<(), ServiceError> {
            self.online()?;
            let mut tasks = self.tasks.borrow_mut();
            let before = tasks.len();
            tasks.retain(|t| &t.id != id);
            if tasks.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_then_load_shows_new_child() {
        let service = MemoryService::with_tasks(vec![Task::new("p", "Parent", ParentRef::Root)]);
        let new_task = NewTask::new("Child", "", ParentRef::ChildOf("p".into())).unwrap();

        let message = perform(&service, &Mutation::Create(new_task)).await.unwrap();
        assert_eq!(message, "Task added successfully!");

        let tasks = load_tasks(&service).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].parent, ParentRef::ChildOf("p".into()));
    }

    #[tokio::test]
    async fn test_toggle_reports_new_state() {
        let service = MemoryService::with_tasks(vec![Task::new("a", "A", ParentRef::Root)]);
        let toggle = Mutation::ToggleComplete("a".into());

        assert_eq!(perform(&service, &toggle).await.unwrap(), "Task marked as complete!");
        assert_eq!(perform(&service, &toggle).await.unwrap(), "Task marked as incomplete!");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let task = Task::new("a", "A", ParentRef::Root);
        let service = MemoryService::with_tasks(vec![task.clone()]);
        let edit = TaskEdit::new("Renamed", "now with text").unwrap();

        perform(&service, &Mutation::Update(task, edit)).await.unwrap();
        assert_eq!(service.tasks.borrow()[0].name, "Renamed");

        let delete = Mutation::Delete("a".into());
        assert_eq!(perform(&service, &delete).await.unwrap(), "Task deleted successfully!");
        assert!(service.tasks.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_task_is_status_error() {
        let service = MemoryService::default();
        let delete = Mutation::Delete("ghost".into());

        let err = perform(&service, &delete).await.unwrap_err();
        assert!(matches!(err, ServiceError::Status { status: 404, .. }));
        assert_eq!(err.user_message(delete.failure_message()), "Failed to delete task");
    }

    #[tokio::test]
    async fn test_offline_service_surfaces_transport_error() {
        let service = MemoryService::default();
        service.offline.set(true);

        let err = load_tasks(&service).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.user_message(LOAD_FAILURE), "Error connecting to server");
    }
}
