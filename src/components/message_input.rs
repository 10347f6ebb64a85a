//! Question input at the bottom of the chat area.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::form::FormState;
use crate::state::thread::ThreadState;

#[component]
pub fn MessageInput() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let thread = expect_context::<RwSignal<ThreadState>>();
    let services = Services::from_context();

    let blocked = move || !thread.with(ThreadState::accepts_send);
    let can_send = move || !blocked() && form.with(|f| !f.question.trim().is_empty());

    let do_send = move || {
        if !can_send() {
            return;
        }
        let text = form.try_update(FormState::take_question).unwrap_or_default();
        services.submit_question(text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="message-input">
            <textarea
                class="message-input__field"
                rows="2"
                placeholder=move || {
                    if form.with(FormState::has_schema) {
                        "Ask a question about your data…"
                    } else {
                        "Add a schema in the sidebar, then ask a question…"
                    }
                }
                disabled=blocked
                prop:value=move || form.with(|f| f.question.clone())
                on:input=move |ev| form.update(|f| f.set_question(event_target_value(&ev)))
                on:keydown=on_keydown
            ></textarea>
            <button class="message-input__send" disabled=move || !can_send() on:click=move |_| do_send()>
                "Send"
            </button>
        </div>
    }
}
