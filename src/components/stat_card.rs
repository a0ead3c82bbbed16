//! Stat Card Component
//!
//! Displays a single aggregate value on the analytics page.

use leptos::*;

/// Overview card with a headline number and caption
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    icon: &'static str,
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-400">{label}</p>
                    <p class="text-3xl font-bold mt-1">{value}</p>
                </div>
                <span class="text-3xl">{icon}</span>
            </div>
            <p class="text-sm text-gray-500 mt-4">{caption}</p>
        </div>
    }
}
