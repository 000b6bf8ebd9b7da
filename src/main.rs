//! Now & Later Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    logging::init(config.level_filter());
    log::info!("starting with storage prefix `{}`", config.storage_prefix);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
