//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ParentRef, TaskId};
use crate::notify::{Notifications, ToastKind};
use crate::theme::Theme;
use crate::tree::TaskTree;

/// Which dialog is open
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    /// Add form, pre-selecting this parent
    Add(ParentRef),
    Edit(TaskId),
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks from the last successful fetch plus expand state
    pub tree: TaskTree,
    pub notifications: Notifications,
    pub theme: Theme,
    pub modal: Modal,
    /// A fetch has completed at least once
    pub loaded: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a toast, returning its id
pub fn store_notify(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    store.notifications().write().push(kind, message)
}
