//! Edit Task Modal Component
//!
//! Name and description editing for an existing task.

use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::context::use_app_context;
use crate::intent::Intent;
use crate::models::{TaskEdit, TaskId};
use crate::store::{use_app_store, AppStateStoreFields};

/// Edit dialog seeded from the task's current record
#[component]
pub fn EditTaskModal(id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let current = store.tree().with_untracked(|tree| tree.get(&id).cloned());
    let Some(current) = current else {
        return view! {
            <ModalFrame title="Edit Task">
                <p class="form-error">"This task no longer exists."</p>
            </ModalFrame>
        }
        .into_any();
    };

    let (name, set_name) = signal(current.name.clone());
    let (description, set_description) = signal(current.description.clone());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match TaskEdit::new(&name.get_untracked(), &description.get_untracked()) {
            Ok(edit) => ctx.dispatch(Intent::SubmitEdit(id.clone(), edit)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <ModalFrame title="Edit Task">
            <form class="task-form" on:submit=on_submit>
                <label for="edit-task-name">"Name"</label>
                <input
                    id="edit-task-name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="edit-task-description">"Description"</label>
                <textarea
                    id="edit-task-description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| ctx.dispatch(Intent::CloseModal)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
    .into_any()
}
