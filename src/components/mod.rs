//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod student_form;
pub mod toast;

pub use loading::Loading;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use student_form::StudentFormDialog;
pub use toast::Toast;
