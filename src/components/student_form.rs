//! Student Form Dialog
//!
//! Modal form shared by the add and edit flows on the roster page.

use leptos::*;

use crate::state::roster::{StudentForm, DEPARTMENTS};

/// Modal dialog with the student create/update form
#[component]
pub fn StudentFormDialog(
    title: &'static str,
    submit_label: &'static str,
    /// Pre-filled values when editing an existing record
    #[prop(optional)]
    initial: Option<StudentForm>,
    #[prop(into)]
    submitting: Signal<bool>,
    on_cancel: impl Fn() + 'static,
    on_save: impl Fn(StudentForm) + 'static,
) -> impl IntoView {
    let initial = initial.unwrap_or_default();

    let (name, set_name) = create_signal(initial.name);
    let (email, set_email) = create_signal(initial.email);
    let (phone, set_phone) = create_signal(initial.phone);
    let (department, set_department) = create_signal(initial.department);
    let (year, set_year) = create_signal(initial.year);
    let (address, set_address) = create_signal(initial.address);
    let (form_error, set_form_error) = create_signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Name and email are the only required fields
        if name.get().trim().is_empty() || email.get().trim().is_empty() {
            set_form_error.set(Some("Name and email are required."));
            return;
        }
        set_form_error.set(None);

        on_save(StudentForm {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            department: department.get(),
            year: year.get(),
            address: address.get().trim().to_string(),
        });
    };

    view! {
        // Backdrop
        <div class="fixed inset-0 bg-black/50 z-40 flex items-center justify-center p-4">
            // Dialog panel
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg border border-gray-700">
                <h2 class="text-xl font-semibold mb-4">{title}</h2>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Name *"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Email *"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                            <input
                                type="text"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Department"</label>
                            <select
                                prop:value=move || department.get()
                                on:change=move |ev| set_department.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            >
                                <option value="">"Select Department"</option>
                                {DEPARTMENTS.into_iter().map(|dept| view! {
                                    <option value=dept>{dept}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Year"</label>
                            <input
                                type="number"
                                min="1"
                                max="4"
                                prop:value=move || year.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(y) = event_target_value(&ev).parse::<u32>() {
                                        set_year.set(y.clamp(1, 4));
                                    }
                                }
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Address"</label>
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    // Inline validation error
                    {move || form_error.get().map(|msg| view! {
                        <p class="text-sm text-red-400">{msg}</p>
                    })}

                    <div class="flex justify-end space-x-2 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_cancel()
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Saving..." } else { submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
