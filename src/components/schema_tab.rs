//! Schema editor tab that starts a new conversation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, spawn};
use crate::net::pipeline;
use crate::state::form::FormState;
use crate::state::history::HistoryState;
use crate::state::ui::{SidebarTab, UiState};

#[component]
pub fn SchemaTab() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let services = Services::from_context();
    let navigate = use_navigate();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_start = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let backend = services.backend();
        let navigate = navigate.clone();
        spawn(async move {
            match pipeline::start_conversation(&backend, &history, &form).await {
                Ok(conversation) => {
                    ui.update(|u| u.show_tab(SidebarTab::Chat));
                    navigate(&format!("/chat/{}", conversation.id), leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("schema: start chat failed ({}): {e}", e.error_code());
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="schema-tab">
            <label class="schema-tab__label" for="schema-editor">
                "Database schema"
            </label>
            <textarea
                id="schema-editor"
                class="schema-tab__editor"
                spellcheck="false"
                placeholder="CREATE TABLE customers (id INT PRIMARY KEY, name TEXT);"
                prop:value=move || form.with(|f| f.schema.clone())
                on:input=move |ev| form.update(|f| f.set_schema(event_target_value(&ev)))
            ></textarea>
            <Show when=move || error.get().is_some()>
                <p class="schema-tab__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                class="schema-tab__start"
                disabled=move || busy.get() || !form.with(FormState::has_schema)
                on:click=on_start
            >
                {move || if busy.get() { "Starting…" } else { "Start chat" }}
            </button>
        </div>
    }
}
