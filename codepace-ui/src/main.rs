//! Codepace Dashboard
//!
//! Coding-hours progress dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Two progress bars for hours logged per language against a target
//! - Auto-advancing image carousel with clickable dots
//! - Single stats fetch from wakapi through a CORS proxy
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Configuration, arithmetic and the carousel state machine live
//! in the `codepace` core crate; this crate provides the browser transport,
//! timers and markup.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    logging::init(tracing::Level::INFO);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
