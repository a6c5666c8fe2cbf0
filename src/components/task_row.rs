//! Task Row Component
//!
//! A single task card in the tree.

use leptos::prelude::*;

use crate::components::TaskIdBadge;
use crate::context::use_app_context;
use crate::intent::Intent;
use crate::models::ParentRef;
use crate::tree::VisibleRow;

/// One task with its expand toggle and actions
#[component]
pub fn TaskRow(row: VisibleRow) -> impl IntoView {
    let ctx = use_app_context();

    let level_attr = row.level_attr();
    let VisibleRow { task, has_children, expanded, .. } = row;
    let id = task.id.clone();
    let completed = task.completed;
    let done = if completed { " completed" } else { "" };

    let on_expand = {
        let id = id.clone();
        move |_| ctx.dispatch(Intent::ToggleExpand(id.clone()))
    };
    let on_add_child = {
        let id = id.clone();
        move |_| ctx.dispatch(Intent::OpenAdd(ParentRef::ChildOf(id.clone())))
    };
    let on_toggle_complete = {
        let id = id.clone();
        move |_| ctx.dispatch(Intent::ToggleComplete(id.clone()))
    };
    let on_edit = {
        let id = id.clone();
        move |_| ctx.dispatch(Intent::OpenEdit(id.clone()))
    };
    // First click arms, second confirms
    let (confirming, set_confirming) = signal(false);
    let delete_action = {
        let id = id.clone();
        move || {
            if !confirming.get() {
                return view! {
                    <button
                        class="task-btn delete-btn"
                        title="Delete task"
                        on:click=move |_| set_confirming.set(true)
                    >
                        "🗑"
                    </button>
                }
                .into_any();
            }
            let id = id.clone();
            view! {
                <span class="delete-confirm">
                    "Delete? This cannot be undone."
                    <button
                        class="task-btn confirm-btn"
                        on:click=move |_| {
                            set_confirming.set(false);
                            ctx.dispatch(Intent::Delete(id.clone()));
                        }
                    >
                        "✓"
                    </button>
                    <button class="task-btn cancel-btn" on:click=move |_| set_confirming.set(false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        }
    };

    view! {
        <div class="task-card" data-level=level_attr>
            <div class="task-header">
                <div class="task-info">
                    {if has_children {
                        view! {
                            <button class="task-expand-btn" on:click=on_expand>
                                {if expanded { "▼" } else { "▶" }}
                            </button>
                        }.into_any()
                    } else {
                        view! { <span class="task-expand-placeholder"></span> }.into_any()
                    }}

                    <div class="task-content">
                        <div class=format!("task-title{done}")>{task.name.clone()}</div>
                        <div class=format!("task-description{done}")>{task.description.clone()}</div>
                        {task.due_date.clone().map(|due| view! {
                            <div class="task-due">"Due " {due}</div>
                        })}
                    </div>
                </div>

                <div class="task-actions">
                    <button class="task-btn add-child-btn" title="Add child task" on:click=on_add_child>
                        "+"
                    </button>
                    <button
                        class=format!("task-btn complete-btn{done}")
                        title=if completed { "Mark incomplete" } else { "Mark complete" }
                        on:click=on_toggle_complete
                    >
                        {if completed { "↺" } else { "✓" }}
                    </button>
                    <TaskIdBadge id=id.clone() />
                    <button class="task-btn edit-btn" title="Edit task" on:click=on_edit>
                        "✎"
                    </button>
                    {delete_action}
                </div>
            </div>
        </div>
    }
}
