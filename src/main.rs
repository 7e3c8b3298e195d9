//! Todo Sync Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod scheduler;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
