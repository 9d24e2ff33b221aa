//! Brand Catalog Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod display;
mod error;
mod fetch;
mod filter;
mod models;
mod navigation;
mod pages;
mod pagination;
mod query;
mod store;
mod submission;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("[main] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
