//! Chat Page
//!
//! Conversational assistant with a streaming and a regular (blocking) mode.
//! The page owns a [`ChatSession`]; all transcript mutation goes through it.

use leptos::*;

use crate::components::loading::TypingDots;
use crate::state::chat::{ChatPhase, ChatSession, Message, Sender};

/// Prompts offered on the empty transcript
const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Add Student", "I want to add a new student"),
    ("View Statistics", "Show me student statistics"),
    ("List Students", "Show me all students"),
    ("Campus Info", "Tell me about the campus"),
];

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let session = ChatSession::new();
    let messages = session.messages;
    let phase = session.phase;
    let streaming_mode = session.streaming_mode;

    let (input, set_input) = create_signal(String::new());
    let end_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view as the transcript grows or streams
    create_effect(move |_| {
        messages.with(|_| ());
        if let Some(el) = end_ref.get() {
            el.scroll_into_view();
        }
    });

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = input.get_untracked();
        if text.trim().is_empty() || phase.get_untracked() != ChatPhase::Idle {
            return;
        }
        set_input.set(String::new());
        session_for_submit.submit(&text);
    };

    let session_for_stop = session.clone();
    let on_stop = move |_| session_for_stop.cancel_stream();

    view! {
        <div class="flex flex-col h-screen">
            // Header with mode toggle
            <header class="border-b border-gray-700 bg-gray-800/50 px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-3xl">"🤖"</span>
                        <div>
                            <h1 class="text-xl font-semibold">"Campus Admin AI"</h1>
                            <p class="text-sm text-gray-400">
                                {move || if streaming_mode.get() {
                                    "Streaming mode enabled"
                                } else {
                                    "Regular chat mode"
                                }}
                            </p>
                        </div>
                    </div>

                    <button
                        on:click=move |_| streaming_mode.update(|mode| *mode = !*mode)
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                            if streaming_mode.get() {
                                format!("{} bg-primary-600 hover:bg-primary-700 text-white", base)
                            } else {
                                format!("{} bg-gray-700 hover:bg-gray-600 text-gray-300", base)
                            }
                        }
                    >
                        "⚡ "
                        {move || if streaming_mode.get() { "Streaming" } else { "Regular" }}
                    </button>
                </div>
            </header>

            // Transcript
            <div class="flex-1 overflow-y-auto px-6 py-6 space-y-4">
                {move || {
                    let list = messages.get();
                    if list.len() <= 1 {
                        view! { <EmptyTranscript phase=phase set_input=set_input /> }.into_view()
                    } else {
                        list.into_iter()
                            .map(|message| view! { <MessageBubble message=message phase=phase /> })
                            .collect_view()
                            .into_view()
                    }
                }}

                // Typing indicator for the blocking mode
                {move || {
                    if phase.get() != ChatPhase::Idle && !streaming_mode.get() {
                        view! {
                            <div class="flex justify-start">
                                <div class="bg-gray-800 rounded-xl px-4 py-3">
                                    <TypingDots />
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                // Stop button while a stream is live
                {
                    let on_stop = on_stop.clone();
                    move || {
                        if phase.get() == ChatPhase::Streaming {
                            let on_stop = on_stop.clone();
                            view! {
                                <div class="flex justify-center">
                                    <button
                                        on:click=on_stop
                                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 border border-gray-600
                                               rounded-lg text-sm transition-colors"
                                    >
                                        "Stop Streaming"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }
                }

                <div node_ref=end_ref />
            </div>

            // Input
            <div class="border-t border-gray-700 bg-gray-800/50 p-4">
                <form on:submit=on_submit class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Ask about the campus, add students, view analytics, or manage records..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        disabled=move || phase.get() != ChatPhase::Idle
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               disabled:opacity-50"
                    />
                    <button
                        type="submit"
                        disabled=move || {
                            phase.get() != ChatPhase::Idle || input.get().trim().is_empty()
                        }
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Empty-transcript state with quick actions
#[component]
fn EmptyTranscript(
    phase: RwSignal<ChatPhase>,
    set_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-full text-center space-y-6">
            <div class="text-6xl">"💬"</div>
            <div>
                <h2 class="text-lg font-medium mb-2">"Campus Admin Assistant"</h2>
                <p class="text-gray-400 max-w-md mb-6">
                    "I can help you manage students, view analytics, and handle administrative \
                     tasks. Try one of these quick actions or ask me anything!"
                </p>

                <div class="flex flex-wrap gap-2 justify-center">
                    {QUICK_ACTIONS.into_iter().map(|(label, prompt)| {
                        view! {
                            <button
                                on:click=move |_| set_input.set(prompt.to_string())
                                disabled=move || phase.get() != ChatPhase::Idle
                                class="px-4 py-2 bg-gray-800 hover:bg-gray-700 disabled:opacity-50
                                       border border-gray-700 rounded-lg text-sm transition-colors"
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Single transcript entry with sender attribution and timestamp
#[component]
fn MessageBubble(message: Message, phase: RwSignal<ChatPhase>) -> impl IntoView {
    let is_user = message.sender == Sender::User;
    let receiving = !is_user && message.content.is_empty();
    let content = message.content;
    let time = message.timestamp.format("%H:%M:%S").to_string();
    let truncated = message.truncated;

    let row_class = if is_user {
        "flex gap-3 justify-end"
    } else {
        "flex gap-3 justify-start"
    };
    let bubble_class = if is_user {
        "max-w-[70%] bg-primary-600 text-white rounded-xl px-4 py-3 ml-12"
    } else {
        "max-w-[70%] bg-gray-800 rounded-xl px-4 py-3 mr-12"
    };

    view! {
        <div class=row_class>
            {(!is_user).then(|| view! {
                <span class="w-8 h-8 rounded-full bg-gray-800 flex items-center justify-center flex-shrink-0 mt-1">
                    "🤖"
                </span>
            })}

            <div class=bubble_class>
                {move || {
                    if receiving && phase.get() != ChatPhase::Idle {
                        view! { <TypingDots label="Receiving response..." /> }.into_view()
                    } else {
                        view! {
                            <p class="text-sm leading-relaxed whitespace-pre-wrap">
                                {content.clone()}
                            </p>
                            {truncated.then(|| view! {
                                <p class="text-xs mt-2 text-yellow-400">
                                    "⚠ Response was interrupted"
                                </p>
                            })}
                            <p class="text-xs mt-2 opacity-70">{time.clone()}</p>
                        }.into_view()
                    }
                }}
            </div>

            {is_user.then(|| view! {
                <span class="w-8 h-8 rounded-full bg-primary-600 flex items-center justify-center flex-shrink-0 mt-1">
                    "👤"
                </span>
            })}
        </div>
    }
}
