//! econdash Dashboard
//!
//! Economic indicator dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Indicator, time range and chart type selection
//! - Summary statistics with change direction
//! - Light/dark theme persisted in localStorage (Ctrl+T toggles)
//! - Built-in sample data when the indicator API is unreachable
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Selection, fallback and chart configuration live in the
//! `econdash` core crate; this crate supplies the gloo-net data source, the
//! canvas chart and the signal-backed views.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
