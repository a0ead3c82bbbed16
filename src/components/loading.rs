//! Loading Component
//!
//! Loading spinners for page-level fetch states.

use leptos::*;

/// Centered loading spinner with a label
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3">
            <div class="w-6 h-6 border-2 border-primary-500 border-t-transparent rounded-full animate-spin" />
            <span class="text-gray-400">{label}</span>
        </div>
    }
}

/// Small typing indicator shown while a chat reply is pending
#[component]
pub fn TypingDots(
    #[prop(default = "Thinking...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 text-gray-400">
            <div class="flex space-x-1">
                <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:-0.3s]" />
                <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:-0.15s]" />
                <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" />
            </div>
            <span class="text-xs">{label}</span>
        </div>
    }
}
