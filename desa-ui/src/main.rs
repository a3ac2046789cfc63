//! Dashboard Indeks Desa
//!
//! Village development index dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary cards, trend, dimension radar and comparison charts
//! - Village list with search, province filter and sorting
//! - Per-village dimension breakdown
//! - Spotlight search overlay (Ctrl/Cmd+K) with simulated voice input
//! - Display preferences persisted in local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every number it shows comes from the `indeks-desa` view
//! models; the components here only lay them out.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
