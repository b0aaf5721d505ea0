//! API Layer
//!
//! HTTP client for the Gambit REST API.

pub mod client;

pub use client::*;
