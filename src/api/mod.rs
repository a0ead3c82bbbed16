//! API Layer
//!
//! HTTP client for the campus student-management backend, plus the chunked
//! chat response consumer.

pub mod client;
pub mod stream;

pub use client::*;
