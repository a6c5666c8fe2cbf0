//! Toast Stack Component
//!
//! Renders notifications and retires each after its display time.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::intent::Intent;
use crate::notify::EXIT_ANIMATION_MS;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack(duration_ms: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.notifications().with(|n| n.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = toast.kind;

                    spawn_local(async move {
                        TimeoutFuture::new(duration_ms).await;
                        store.notifications().write().begin_dismiss(id);
                        TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                        store.notifications().write().remove(id);
                    });

                    let class = move || {
                        let leaving = store
                            .notifications()
                            .with(|n| n.toasts().iter().any(|t| t.id == id && t.leaving));
                        if leaving {
                            format!("{} leaving", kind.class())
                        } else {
                            kind.class().to_string()
                        }
                    };

                    view! {
                        <div class=class on:click=move |_| ctx.dispatch(Intent::Dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
