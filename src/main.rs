//! DLC Toggle Board Frontend Entry Point

mod api;
mod app;
mod bootstrap;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod icon;
mod logging;
mod markdown;
mod models;
mod platform;
mod render;
mod status;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
