//! TaskFlow Frontend App
//!
//! Main application component and the intent dispatcher.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, HttpTaskService, LOAD_FAILURE};
use crate::components::{AddTaskModal, EditTaskModal, StatsBar, TaskTreeView, ToastStack, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::intent::Intent;
use crate::notify::{ToastKind, EXIT_ANIMATION_MS};
use crate::store::{store_notify, AppState, AppStateStoreFields, AppStore, Modal};
use crate::theme::{apply_theme, LocalStorage, Theme, ThemeStore};

#[component]
pub fn App(config: AppConfig, theme: Theme) -> impl IntoView {
    let store = Store::new(AppState::new(theme));
    provide_context(store);

    let service = HttpTaskService::new(config.api_base_url.clone());
    let themes = ThemeStore::new(LocalStorage, config.theme_storage_key.clone());
    provide_context(AppContext::new(dispatcher(store, service.clone(), themes)));

    // Load tasks on mount
    Effect::new(move |_| reload(store, service.clone()));

    let modal = move || match store.modal().get() {
        Modal::Closed => None,
        Modal::Add(parent) => Some(view! { <AddTaskModal parent=parent /> }.into_any()),
        Modal::Edit(id) => Some(view! { <EditTaskModal id=id /> }.into_any()),
    };

    view! {
        <div class="app-layout">
            <Toolbar />

            <main class="main-content">
                <StatsBar />
                <TaskTreeView />
            </main>

            {modal}

            <ToastStack duration_ms=config.toast_duration_ms />
        </div>
    }
}

/// Route every intent: expansion and dialogs locally, mutations to the
/// service followed by a reload.
fn dispatcher(
    store: AppStore,
    service: HttpTaskService,
    themes: ThemeStore<LocalStorage>,
) -> Callback<Intent> {
    Callback::new(move |intent: Intent| {
        log::debug!("dispatch {:?}", intent);
        match intent {
            Intent::Refresh => reload(store, service.clone()),
            Intent::OpenAdd(parent) => *store.modal().write() = Modal::Add(parent),
            Intent::OpenEdit(id) => *store.modal().write() = Modal::Edit(id),
            Intent::CloseModal => *store.modal().write() = Modal::Closed,
            Intent::ToggleTheme => {
                let next = themes.toggle(store.theme().get_untracked());
                apply_theme(next);
                *store.theme().write() = next;
            }
            Intent::Dismiss(id) => {
                store.notifications().write().begin_dismiss(id);
                spawn_local(async move {
                    TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                    store.notifications().write().remove(id);
                });
            }
            view_only @ (Intent::ToggleExpand(_) | Intent::ExpandAll | Intent::CollapseAll) => {
                view_only.apply_to_tree(&mut store.tree().write());
            }
            remote => {
                let Some(mutation) = store.tree().with_untracked(|tree| remote.to_mutation(tree))
                else {
                    log::warn!("{:?} refers to a task that is no longer loaded", remote);
                    *store.modal().write() = Modal::Closed;
                    return;
                };
                let closes_modal = matches!(remote, Intent::SubmitAdd(_) | Intent::SubmitEdit(..));
                let service = service.clone();
                spawn_local(async move {
                    match commands::perform(&service, &mutation).await {
                        Ok(message) => {
                            if closes_modal {
                                *store.modal().write() = Modal::Closed;
                            }
                            store_notify(&store, ToastKind::Success, message);
                            reload(store, service);
                        }
                        Err(e) => {
                            log::error!("{:?} failed: {}", mutation, e);
                            store_notify(&store, ToastKind::Error, e.user_message(mutation.failure_message()));
                        }
                    }
                });
            }
        }
    })
}

/// Fetch every task and rebuild the tree; the last response to arrive wins
fn reload(store: AppStore, service: HttpTaskService) {
    spawn_local(async move {
        match commands::load_tasks(&service).await {
            Ok(tasks) => {
                let (previous, report) = {
                    let tree_field = store.tree();
                    let mut tree = tree_field.write();
                    let previous = tree.integrity().clone();
                    (previous, tree.set_tasks(tasks))
                };
                *store.loaded().write() = true;
                if report.needs_warning(&previous) {
                    for (task, parent) in &report.dangling {
                        log::warn!("task {task} points at missing parent {parent}");
                    }
                    for task in &report.cyclic {
                        log::warn!("task {task} is part of a parent cycle");
                    }
                    store_notify(
                        &store,
                        ToastKind::Warning,
                        format!(
                            "{} task(s) hidden: parent missing or circular",
                            report.hidden_count()
                        ),
                    );
                }
            }
            Err(e) => {
                log::error!("loading tasks failed: {e}");
                store_notify(&store, ToastKind::Error, e.user_message(LOAD_FAILURE));
            }
        }
    });
}
