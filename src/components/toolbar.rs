//! Toolbar Component
//!
//! Page header with refresh, add, expand/collapse and theme controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::intent::Intent;
use crate::models::ParentRef;
use crate::store::{use_app_store, AppStateStoreFields};

/// Header bar with the global task actions
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let theme_icon = move || store.theme().get().toggle_icon();
    let theme_title = move || format!("Switch to {} theme", store.theme().get().toggled());

    view! {
        <header class="toolbar">
            <div class="toolbar-title">
                <span class="toolbar-logo">"✔"</span>
                <span>"TaskFlow"</span>
            </div>

            <div class="toolbar-controls">
                <button
                    class="toolbar-btn"
                    title="Expand all"
                    on:click=move |_| ctx.dispatch(Intent::ExpandAll)
                >
                    "⊞"
                </button>
                <button
                    class="toolbar-btn"
                    title="Collapse all"
                    on:click=move |_| ctx.dispatch(Intent::CollapseAll)
                >
                    "⊟"
                </button>
                <button
                    class="toolbar-btn"
                    title="Refresh"
                    on:click=move |_| ctx.dispatch(Intent::Refresh)
                >
                    "⟳"
                </button>
                <button
                    class="toolbar-btn primary"
                    on:click=move |_| ctx.dispatch(Intent::OpenAdd(ParentRef::Root))
                >
                    "+ Add Task"
                </button>
                <button
                    class="toolbar-btn theme"
                    title=theme_title
                    on:click=move |_| ctx.dispatch(Intent::ToggleTheme)
                >
                    {theme_icon}
                </button>
            </div>
        </header>
    }
}
