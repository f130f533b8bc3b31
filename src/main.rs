mod api;
mod app;
mod components;
mod config;
mod dispatch;
mod error;
mod form;
mod i18n;
mod logging;
mod model;
mod pages;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    let config = AppConfig::load();
    logging::init(&config.log_filter);
    tracing::info!(api_base = %config.api_base, "starting");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
