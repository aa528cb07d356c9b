#![allow(warnings)]
//! Menu Card Frontend Entry Point

mod app;
mod color_history;
mod components;
mod config;
mod context;
mod debounce;
mod dom;
mod error;
mod export;
mod models;
mod pricing;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
