//! GymRec Web Client
//!
//! Single-page frontend for the GymRec exercise recommendation API,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Browse and filter the exercise database
//! - Preference-based exercise recommendations
//! - Lightweight user profile with favorites
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind the GymRec REST API; this crate is
//! page components, a card renderer, and an HTTP client wrapper.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
