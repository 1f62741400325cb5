//! Portfolio Frontend Entry Point

mod config;
mod logger;
mod context;
mod store;
mod router;
mod fetch;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use tracing::warn;

fn main() {
    console_error_panic_hook::set_once();

    let (site_config, config_error) = match config::read_site_config() {
        Ok(site_config) => (site_config, None),
        Err(err) => (Default::default(), Some(err)),
    };
    logger::init(site_config.max_level());
    if let Some(err) = config_error {
        warn!(error = %err, "falling back to default site config");
    }

    mount_to_body(move || view! { <App site_config=site_config.clone() /> });
}
