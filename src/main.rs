//! Gambit Dashboard
//!
//! Profile and statistics frontend for the Gambit chess/puzzle platform,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Public player profiles with ratings and win/loss charts
//! - DigiQuiz correctness tracking
//! - Friend requests (send, accept, decline)
//! - Account editing with avatar upload and social links
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Gambit API via HTTP.

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
