//! Modal Frame Component
//!
//! Backdrop and card shared by the add and edit dialogs.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::intent::Intent;

/// Dialog shell; clicking the backdrop or × closes it
#[component]
pub fn ModalFrame(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="modal show" on:click=move |_| ctx.dispatch(Intent::CloseModal)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        on:click=move |_| ctx.dispatch(Intent::CloseModal)
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
