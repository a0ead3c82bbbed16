//! Students Page
//!
//! Roster with search/department filtering and create/update/delete. The
//! list is re-fetched in full after every mutation.

use leptos::*;

use crate::api;
use crate::components::{Loading, StudentFormDialog};
use crate::state::global::GlobalState;
use crate::state::roster::{
    filter_students, Student, StudentForm, ALL_DEPARTMENTS, DEPARTMENTS,
};

/// Which dialog, if any, is open
#[derive(Clone, PartialEq)]
enum DialogState {
    Closed,
    Create,
    Edit(Student),
}

/// Students page component
#[component]
pub fn Students() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let students = create_rw_signal(Vec::<Student>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let search = create_rw_signal(String::new());
    let department = create_rw_signal(ALL_DEPARTMENTS.to_string());
    let dialog = create_rw_signal(DialogState::Closed);
    let submitting = create_rw_signal(false);

    // Full list re-fetch; also runs after every mutation
    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_students().await {
                Ok(list) => {
                    students.set(list);
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch students: {}", e).into());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    // Initial fetch on mount
    create_effect(move |_| load());

    // Filtering recomputes synchronously on any input or list change
    let filtered =
        create_memo(move |_| filter_students(&students.get(), &search.get(), &department.get()));

    let state_for_delete = state.clone();
    let on_delete = move |id: String| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this student?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_student(&id).await {
                Ok(()) => {
                    state.show_success("Student deleted");
                    load();
                }
                Err(e) => {
                    state.show_error(&format!("Failed to delete student: {}", e));
                }
            }
        });
    };

    let state_for_save = state.clone();
    let save = move |form: StudentForm| {
        let target = dialog.get_untracked();
        submitting.set(true);

        let state = state_for_save.clone();
        spawn_local(async move {
            let result = match &target {
                DialogState::Edit(student) => {
                    api::update_student(&student.id, &form).await.map(|_| ())
                }
                _ => api::create_student(&form).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    dialog.set(DialogState::Closed);
                    state.show_success("Student saved");
                    load();
                }
                Err(e) => {
                    state.show_error(&format!("Failed to save student: {}", e));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="flex flex-col h-screen">
            // Header
            <header class="border-b border-gray-700 bg-gray-800/50 px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-3xl">"👥"</span>
                        <h1 class="text-xl font-semibold">"All Students"</h1>
                    </div>
                    <div class="flex items-center space-x-2">
                        <button
                            on:click=move |_| dialog.set(DialogState::Create)
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "+ Add Student"
                        </button>
                        <button
                            on:click=move |_| load()
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                   text-sm transition-colors"
                        >
                            "↻ Refresh"
                        </button>
                    </div>
                </div>
            </header>

            // Filters
            <div class="border-b border-gray-700 bg-gray-800/30 p-4">
                <div class="flex flex-col sm:flex-row gap-4">
                    <input
                        type="text"
                        placeholder="Search students by name, email, or department..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <select
                        prop:value=move || department.get()
                        on:change=move |ev| department.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value=ALL_DEPARTMENTS>"All Departments"</option>
                        {DEPARTMENTS.into_iter().map(|dept| view! {
                            <option value=dept>{dept}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            // Student list
            <main class="flex-1 overflow-y-auto p-6">
                {
                    let on_delete = on_delete.clone();
                    move || {
                        if loading.get() {
                            return view! { <Loading label="Loading students..." /> }.into_view();
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

                        let list = filtered.get();
                        if list.is_empty() {
                            let has_filter = !search.get().is_empty()
                                || department.get() != ALL_DEPARTMENTS;
                            view! {
                                <div class="flex flex-col items-center justify-center h-full text-center space-y-4">
                                    <div class="text-6xl">"👥"</div>
                                    <div>
                                        <h2 class="text-lg font-medium mb-2">"No students found"</h2>
                                        <p class="text-gray-400 max-w-md">
                                            {if has_filter {
                                                "Try adjusting your search or filter criteria."
                                            } else {
                                                "No students have been added yet."
                                            }}
                                        </p>
                                    </div>
                                </div>
                            }.into_view()
                        } else {
                            let on_delete = on_delete.clone();
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {list.into_iter().map(|student| {
                                        let on_delete = on_delete.clone();
                                        view! {
                                            <StudentCard
                                                student=student
                                                on_edit=move |s| dialog.set(DialogState::Edit(s))
                                                on_delete=on_delete
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }
            </main>

            // Add/edit dialog
            {
                let save = save.clone();
                move || match dialog.get() {
                    DialogState::Closed => view! {}.into_view(),
                    DialogState::Create => {
                        let save = save.clone();
                        view! {
                            <StudentFormDialog
                                title="Add New Student"
                                submit_label="Add Student"
                                submitting=submitting
                                on_cancel=move || dialog.set(DialogState::Closed)
                                on_save=save
                            />
                        }.into_view()
                    }
                    DialogState::Edit(student) => {
                        let save = save.clone();
                        view! {
                            <StudentFormDialog
                                title="Edit Student"
                                submit_label="Update Student"
                                initial=StudentForm::from_student(&student)
                                submitting=submitting
                                on_cancel=move || dialog.set(DialogState::Closed)
                                on_save=save
                            />
                        }.into_view()
                    }
                }
            }
        </div>
    }
}

/// Single roster entry card
#[component]
fn StudentCard(
    student: Student,
    on_edit: impl Fn(Student) + 'static,
    on_delete: impl Fn(String) + 'static,
) -> impl IntoView {
    let edit_target = student.clone();
    let delete_id = student.id.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <span class="w-12 h-12 rounded-full bg-primary-600/20 flex items-center justify-center text-2xl">
                        "🎓"
                    </span>
                    <div>
                        <h3 class="font-semibold">{student.name.clone()}</h3>
                        {student.department.clone().map(|dept| view! {
                            <span class="inline-block bg-gray-700 text-xs px-2 py-1 rounded mt-1">
                                {dept}
                            </span>
                        })}
                    </div>
                </div>
                <div class="flex items-center space-x-1">
                    <button
                        on:click=move |_| on_edit(edit_target.clone())
                        class="p-2 text-gray-400 hover:text-white rounded transition-colors"
                    >
                        "✎"
                    </button>
                    <button
                        on:click=move |_| on_delete(delete_id.clone())
                        class="p-2 text-gray-400 hover:text-red-400 rounded transition-colors"
                    >
                        "🗑"
                    </button>
                </div>
            </div>

            <div class="space-y-2 text-sm text-gray-400">
                <p class="truncate">"✉ " {student.email.clone()}</p>
                {student.phone.clone().map(|phone| view! {
                    <p>"☎ " {phone}</p>
                })}
                {student.address.clone().map(|address| view! {
                    <p class="truncate">"📍 " {address}</p>
                })}
                {student.created_at.clone().map(|created| view! {
                    <p>"📅 Joined " {format_join_date(&created)}</p>
                })}
                {student.year.map(|year| view! {
                    <p>
                        <span class="inline-block border border-gray-600 text-xs px-2 py-1 rounded">
                            {format!("Year {}", year)}
                        </span>
                    </p>
                })}
            </div>
        </div>
    }
}

/// Render the backend's creation timestamp as a short date
fn format_join_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    // Backend may emit naive timestamps without an offset
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}
