//! Lane Notes Frontend Entry Point

mod app;
mod components;
mod context;
mod debounce;
mod logging;
mod web_storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
