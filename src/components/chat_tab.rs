//! Chat history tab: "New chat" entry and the saved-conversation list.
//!
//! DESIGN
//! ======
//! Rows link to `/chat/{id}`; the route change drives the thread load. Rename
//! edits the title inline (Enter commits, Escape cancels) and delete returns
//! to the empty-chat state once the backend confirms.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, spawn};
use crate::net::pipeline;
use crate::net::types::Conversation;
use crate::state::form::FormState;
use crate::state::history::HistoryState;
use crate::state::thread::ThreadState;
use crate::state::ui::{SidebarTab, UiState};

#[component]
pub fn ChatTab() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_new_chat = move |_| {
        form.update(|f| f.set_schema(""));
        ui.update(|u| u.show_tab(SidebarTab::Schema));
        navigate("/chat", leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="chat-tab">
            <button class="chat-tab__new" on:click=on_new_chat>
                "+ New chat"
            </button>
            <Show when=move || history.with(|h| h.loading && h.items.is_empty())>
                <p class="chat-tab__hint">"Loading…"</p>
            </Show>
            <Show when=move || history.with(|h| h.error.is_some())>
                <p class="chat-tab__error">{move || history.with(|h| h.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || history.with(|h| !h.loading && h.error.is_none() && h.items.is_empty())>
                <p class="chat-tab__hint">"No saved chats yet"</p>
            </Show>
            <ul class="chat-tab__list">
                <For
                    each=move || history.with(|h| h.items.clone())
                    key=|c| (c.id.clone(), c.title.clone())
                    children=|conversation| view! { <HistoryRow conversation=conversation/> }
                />
            </ul>
        </div>
    }
}

#[component]
fn HistoryRow(conversation: Conversation) -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let thread = expect_context::<RwSignal<ThreadState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let services = Services::from_context();
    let navigate = use_navigate();

    let Conversation { id, title, .. } = conversation;
    let id = StoredValue::new(id);
    let draft = RwSignal::new(title.clone());
    let href = format!("/chat/{}", id.get_value());

    let is_active = move || thread.with(|t| t.conversation_id.as_deref() == Some(id.get_value().as_str()));
    let is_renaming = move || ui.with(|u| u.renaming.as_deref() == Some(id.get_value().as_str()));

    let commit_rename = move || {
        let title = draft.get_untracked();
        let backend = services.backend();
        ui.update(|u| u.renaming = None);
        spawn(async move {
            if let Err(e) = pipeline::rename_conversation(&backend, &history, &id.get_value(), &title).await {
                log::warn!("history: rename failed ({}): {e}", e.error_code());
            }
        });
    };

    let on_rename_key = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit_rename();
        }
        "Escape" => ui.update(|u| u.renaming = None),
        _ => {}
    };

    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let backend = services.backend();
        let navigate = navigate.clone();
        spawn(async move {
            match pipeline::delete_conversation(&backend, &history, &id.get_value()).await {
                Ok(()) => navigate("/chat", leptos_router::NavigateOptions::default()),
                Err(e) => log::warn!("history: delete failed ({}): {e}", e.error_code()),
            }
        });
    };

    view! {
        <li class="chat-tab__item" class:chat-tab__item--active=is_active>
            <Show
                when=is_renaming
                fallback=move || {
                    let href = href.clone();
                    let title = title.clone();
                    view! {
                        <A href=href attr:class="chat-tab__link">
                            {title}
                        </A>
                    }
                }
            >
                <input
                    class="chat-tab__rename"
                    type="text"
                    autofocus=true
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_rename_key
                />
            </Show>
            <div class="chat-tab__actions">
                <button
                    class="chat-tab__action"
                    title="Rename"
                    on:click=move |_| ui.update(|u| u.renaming = Some(id.get_value()))
                >
                    "✎"
                </button>
                <button class="chat-tab__action chat-tab__action--danger" title="Delete" on:click=on_delete>
                    "🗑"
                </button>
            </div>
        </li>
    }
}
