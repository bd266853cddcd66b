//! TaskFlow: a client-side kanban board.
//!
//! Entry point for the CSR build: installs the panic hook, wires `log` to
//! the browser console, and mounts the root [`app::App`] component.

mod app;
mod components;
mod pages;
mod state;
mod storage;
mod util;

use leptos::prelude::*;

use crate::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
