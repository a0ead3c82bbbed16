//! Analytics Page
//!
//! Read-only aggregates: totals, department breakdown, recent onboarding.

use leptos::*;

use crate::api::{self, AnalyticsSummary};
use crate::components::{Loading, StatCard};

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let summary = create_rw_signal(None::<AnalyticsSummary>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(data) => {
                    summary.set(Some(data));
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch analytics: {}", e).into());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    // Fetch on mount; the refresh button re-issues the same fetch
    create_effect(move |_| load());

    view! {
        <div class="flex flex-col h-screen">
            // Header
            <header class="border-b border-gray-700 bg-gray-800/50 px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-3xl">"📊"</span>
                        <div>
                            <h1 class="text-xl font-semibold">"Analytics Dashboard"</h1>
                            <p class="text-sm text-gray-400">"Student insights and statistics"</p>
                        </div>
                    </div>
                    <button
                        on:click=move |_| load()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm transition-colors"
                    >
                        "↻ Refresh"
                    </button>
                </div>
            </header>

            <main class="flex-1 overflow-y-auto p-6">
                {move || {
                    if loading.get() {
                        return view! { <Loading label="Loading analytics..." /> }.into_view();
                    }

                    if let Some(message) = error.get() {
                        return view! {
                            <div class="flex items-center justify-center h-full">
                                <div class="bg-gray-800 rounded-xl p-6 max-w-md text-center border border-gray-700">
                                    <p class="text-red-400 mb-4">{message}</p>
                                    <button
                                        on:click=move |_| load()
                                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700
                                               rounded-lg font-medium transition-colors"
                                    >
                                        "Try Again"
                                    </button>
                                </div>
                            </div>
                        }.into_view();
                    }

                    match summary.get() {
                        Some(data) => view! { <SummaryView data=data /> }.into_view(),
                        None => view! {
                            <p class="text-gray-400 text-center py-12">"No analytics data available"</p>
                        }.into_view(),
                    }
                }}
            </main>
        </div>
    }
}

/// Rendered once the summary has arrived; purely presentational
#[component]
fn SummaryView(data: AnalyticsSummary) -> impl IntoView {
    let total = data.total_students;
    let recent = data.recent_onboarded;

    // Sort departments by headcount, largest first
    let mut departments: Vec<(String, u64)> = data.by_department.into_iter().collect();
    departments.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    view! {
        <div class="space-y-6">
            // Overview cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="Total Students"
                    value=total.to_string()
                    icon="👥"
                    caption="Active enrollment"
                />
                <StatCard
                    label="Departments"
                    value=departments.len().to_string()
                    icon="🏛"
                    caption="Academic divisions"
                />
                <StatCard
                    label="Recent Onboarded"
                    value=recent.len().to_string()
                    icon="📅"
                    caption="Latest additions"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // Department breakdown
                <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-semibold mb-6">"Students by Department"</h2>

                    {if departments.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-8">"No department data available"</p>
                        }.into_view()
                    } else {
                        departments.into_iter().map(|(department, count)| {
                            let percentage = share_percent(count, total);
                            view! {
                                <div class="space-y-2 mb-4">
                                    <div class="flex items-center justify-between">
                                        <span class="text-sm font-medium">{department}</span>
                                        <span class="text-xs text-gray-400">
                                            {format!("{} students · {}%", count, percentage)}
                                        </span>
                                    </div>
                                    <div class="w-full bg-gray-700 rounded-full h-2">
                                        <div
                                            class="bg-primary-500 h-2 rounded-full transition-all duration-300"
                                            style=format!("width: {}%", percentage)
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view().into_view()
                    }}
                </section>

                // Recently onboarded students
                <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-semibold mb-6">"Recently Onboarded Students"</h2>

                    {if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-8">"No recent onboarding data available"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().enumerate().map(|(index, student)| {
                            view! {
                                <div class="flex items-center space-x-3 p-4 rounded-lg bg-gray-700/50 mb-3">
                                    <span class="w-10 h-10 rounded-full bg-green-500/10 flex items-center justify-center">
                                        "🎓"
                                    </span>
                                    <div class="flex-1 min-w-0">
                                        <p class="font-medium truncate">{student.name}</p>
                                        <p class="text-sm text-gray-400 truncate">{student.email}</p>
                                    </div>
                                    <span class="text-xs text-green-400 font-medium">
                                        {format!("#{}", index + 1)}
                                    </span>
                                </div>
                            }
                        }).collect_view().into_view()
                    }}
                </section>
            </div>
        </div>
    }
}

/// Rounded share of `count` out of `total`, as a whole percentage.
fn share_percent(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count * 100 + total / 2) / total) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_percent_rounds_to_nearest() {
        assert_eq!(share_percent(1, 3), 33);
        assert_eq!(share_percent(2, 3), 67);
        assert_eq!(share_percent(1, 6), 17);
        assert_eq!(share_percent(5, 5), 100);
    }

    #[test]
    fn share_percent_handles_empty_total() {
        assert_eq!(share_percent(0, 0), 0);
    }
}
