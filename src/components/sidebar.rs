//! Sidebar Component
//!
//! Navigation sidebar with brand header and page links. Collapsible on small
//! viewports via a hamburger toggle plus backdrop overlay.

use leptos::*;
use leptos_router::*;

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let (is_open, set_is_open) = create_signal(false);

    view! {
        // Mobile menu button
        <button
            on:click=move |_| set_is_open.update(|open| *open = !*open)
            class="fixed top-4 left-4 z-50 md:hidden p-2 bg-gray-800 rounded-lg text-gray-300 hover:text-white"
        >
            {move || if is_open.get() { "✕" } else { "☰" }}
        </button>

        // Sidebar
        <div class=move || {
            let base = "fixed inset-y-0 left-0 z-40 w-64 bg-gray-800 border-r border-gray-700 \
                        transform transition-transform duration-200 ease-in-out \
                        md:translate-x-0 md:static flex flex-col";
            if is_open.get() {
                format!("{} translate-x-0", base)
            } else {
                format!("{} -translate-x-full", base)
            }
        }>
            // Brand header
            <div class="p-6 border-b border-gray-700">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"🎓"</span>
                    <div>
                        <h1 class="text-lg font-semibold text-white">"Campus Admin"</h1>
                        <p class="text-sm text-gray-400">"Student Management"</p>
                    </div>
                </div>
            </div>

            // Navigation links
            <nav class="flex-1 p-4 space-y-2">
                <NavLink
                    href="/"
                    exact=true
                    icon="💬"
                    label="Chat"
                    description="AI chat assistant"
                    on_navigate=move |_| set_is_open.set(false)
                />
                <NavLink
                    href="/students"
                    icon="👥"
                    label="All Students"
                    description="View and manage students"
                    on_navigate=move |_| set_is_open.set(false)
                />
                <NavLink
                    href="/analytics"
                    icon="📊"
                    label="Analytics"
                    description="Student insights & statistics"
                    on_navigate=move |_| set_is_open.set(false)
                />
            </nav>

            // Footer
            <div class="p-4 border-t border-gray-700">
                <p class="text-xs text-gray-500 text-center">"Campus Admin v1.0"</p>
            </div>
        </div>

        // Overlay for mobile
        {move || {
            if is_open.get() {
                view! {
                    <div
                        class="fixed inset-0 bg-black/50 z-30 md:hidden"
                        on:click=move |_| set_is_open.set(false)
                    />
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    #[prop(optional)] exact: bool,
    icon: &'static str,
    label: &'static str,
    description: &'static str,
    on_navigate: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div on:click=on_navigate>
            <A
                href=href
                exact=exact
                class="block px-4 py-3 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                active_class="bg-gray-700 text-white"
            >
                <div class="flex items-center space-x-3">
                    <span class="text-xl">{icon}</span>
                    <div>
                        <p class="font-medium">{label}</p>
                        <p class="text-xs text-gray-400">{description}</p>
                    </div>
                </div>
            </A>
        </div>
    }
}
