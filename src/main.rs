#![allow(warnings)]
//! TaskFlow Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod commands;
mod tree;
mod intent;
mod theme;
mod notify;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use theme::{apply_theme, LocalStorage, ThemeStore};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logger::init(config.log_level);
    log::info!("TaskFlow starting against {}", config.api_base_url);

    let theme = ThemeStore::new(LocalStorage, config.theme_storage_key.clone()).load();
    apply_theme(theme);

    mount_to_body(move || view! { <App config=config.clone() theme=theme /> });
}
