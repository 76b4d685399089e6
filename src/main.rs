mod api;
mod app;
mod components;
mod config;
mod debounce;
mod error;
mod filters;
mod images;
mod model;
mod notice;
mod pages;
mod selection;
mod state;
mod store;
mod telemetry;
mod view_model;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.clone().unwrap_or_default();
    telemetry::init(&config);
    if let Err(e) = loaded {
        tracing::error!("Using default config: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
