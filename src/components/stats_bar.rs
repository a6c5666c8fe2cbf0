//! Stats Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Completion counters plus tree shape (roots, deepest level)
#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.tree().with(|tree| tree.stats()));

    view! {
        <div class="stats-bar">
            <div class="stat">
                <span class="stat-value">{move || stats.get().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat completed">
                <span class="stat-value">{move || stats.get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat pending">
                <span class="stat-value">{move || stats.get().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
            <div class="stat roots">
                <span class="stat-value">{move || stats.get().roots}</span>
                <span class="stat-label">"Root tasks"</span>
            </div>
            <div class="stat depth">
                <span class="stat-value">{move || stats.get().max_depth}</span>
                <span class="stat-label">"Levels"</span>
            </div>
        </div>
    }
}
