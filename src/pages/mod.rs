//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod chat;
pub mod students;

pub use analytics::Analytics;
pub use chat::Chat;
pub use students::Students;
