//! Campus Admin Dashboard
//!
//! Browser-based admin dashboard for a campus student-management backend,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Conversational chat assistant with incremental (streamed) responses
//! - Student roster with create/update/delete and client-side filtering
//! - Analytics summary with department breakdown and recent onboarding
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every page is a self-contained fetch-and-render unit talking
//! to the backend REST API over HTTP.

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
