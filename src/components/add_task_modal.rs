//! Add Task Modal Component
//!
//! Form for creating new tasks (root or child).

use leptos::prelude::*;

use crate::components::ModalFrame;
use crate::context::use_app_context;
use crate::intent::Intent;
use crate::models::{NewTask, ParentRef};
use crate::store::{use_app_store, AppStateStoreFields};

/// Add-task dialog; `parent` is pre-selected in the parent picker
#[component]
pub fn AddTaskModal(parent: ParentRef) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (parent_value, set_parent_value) =
        signal(parent.parent_id().map(|id| id.to_string()).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);

    let options = move || store.tree().with(|tree| tree.parent_options());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let parent = ParentRef::from(Some(parent_value.get_untracked()));
        match NewTask::new(&name.get_untracked(), &description.get_untracked(), parent) {
            Ok(new_task) => ctx.dispatch(Intent::SubmitAdd(new_task)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <ModalFrame title="Add Task">
            <form class="task-form" on:submit=on_submit>
                <label for="task-name">"Name"</label>
                <input
                    id="task-name"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <label for="parent-task">"Parent task"</label>
                <select
                    id="parent-task"
                    on:change=move |ev| set_parent_value.set(event_target_value(&ev))
                >
                    <option value="" selected=move || parent_value.get().is_empty()>
                        "None (Root Task)"
                    </option>
                    <For
                        each=options
                        key=|(id, name)| (id.clone(), name.clone())
                        children=move |(id, name)| {
                            let value = id.to_string();
                            let is_selected = {
                                let value = value.clone();
                                move || parent_value.get() == value
                            };
                            view! { <option value=value selected=is_selected>{name}</option> }
                        }
                    />
                </select>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| ctx.dispatch(Intent::CloseModal)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn">"Add Task"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
