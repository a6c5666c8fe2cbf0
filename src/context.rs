//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::intent::Intent;

/// App-wide dispatcher provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single entry point for every user action
    dispatcher: Callback<Intent>,
}

impl AppContext {
    pub fn new(dispatcher: Callback<Intent>) -> Self {
        Self { dispatcher }
    }

    /// Send a user action to the dispatcher
    pub fn dispatch(&self, intent: Intent) {
        self.dispatcher.run(intent);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
