//! UI Components
//!
//! Leptos components rendering the task tree and its dialogs.

mod toolbar;
mod stats_bar;
mod task_tree_view;
mod task_row;
mod task_id_badge;
mod modal_frame;
mod add_task_modal;
mod edit_task_modal;
mod toast_stack;

pub use toolbar::Toolbar;
pub use stats_bar::StatsBar;
pub use task_tree_view::TaskTreeView;
pub use task_row::TaskRow;
pub use task_id_badge::TaskIdBadge;
pub use modal_frame::ModalFrame;
pub use add_task_modal::AddTaskModal;
pub use edit_task_modal::EditTaskModal;
pub use toast_stack::ToastStack;
