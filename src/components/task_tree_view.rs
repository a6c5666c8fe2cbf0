//! Task Tree View Component
//!
//! Displays the visible rows of the task tree as an indented list.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Indented list of every visible task
#[component]
pub fn TaskTreeView() -> impl IntoView {
    let store = use_app_store();

    let rows = Memo::new(move |_| store.tree().with(|tree| tree.visible_rows()));
    let visible = move || rows.get().unwrap_or_default();
    let walk_error = move || rows.get().err();
    let is_empty = move || store.loaded().get() && store.tree().with(|tree| tree.is_empty());

    view! {
        <div class="tasks-container">
            {move || walk_error().map(|err| view! {
                <div class="integrity-error">{format!("Cannot display tasks: {err}")}</div>
            })}

            <Show when=is_empty>
                <div class="empty-state">
                    <p>"No tasks yet. Click \"Add Task\" to get started!"</p>
                </div>
            </Show>

            <For
                each=visible
                key=|row| {
                    // Every displayed field, so edits re-render the row
                    (
                        row.task.id.clone(),
                        row.level,
                        row.task.name.clone(),
                        row.task.description.clone(),
                        row.task.due_date.clone(),
                        row.task.completed,
                        row.has_children,
                        row.expanded,
                    )
                }
                children=move |row| view! { <TaskRow row=row /> }
            />
        </div>
    }
}
