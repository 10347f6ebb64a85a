//! Scrolling message thread for the open conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ThreadState::messages` keyed by message id, a placeholder while
//! an answer is pending, and starter questions when the thread is empty.
//! The list scrolls to the bottom whenever it grows.

use leptos::prelude::*;

use crate::components::message_view::MessageView;
use crate::components::recommend::Recommend;
use crate::state::thread::{MessageKind, ThreadState};

#[component]
pub fn ChatBox() -> impl IntoView {
    let thread = expect_context::<RwSignal<ThreadState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        thread.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // Only an introduction (or nothing) so far: show the starter questions.
    let is_fresh = move || {
        thread.with(|t| t.messages.iter().all(|m| matches!(m.kind, MessageKind::Introduction { .. })))
    };

    view! {
        <div class="chat-box" node_ref=list_ref>
            <Show when=move || thread.with(|t| t.loading)>
                <p class="chat-box__loading">"Loading conversation…"</p>
            </Show>
            <For
                each=move || thread.with(|t| t.messages.clone())
                key=|m| m.id.clone()
                children=|message| view! { <MessageView message=message/> }
            />
            <Show when=move || thread.with(ThreadState::is_pending)>
                <div class="message message--response message--pending">
                    <span class="skeleton">"Thinking…"</span>
                </div>
            </Show>
            <Show when=move || is_fresh() && !thread.with(|t| t.loading)>
                <Recommend/>
            </Show>
        </div>
    }
}
