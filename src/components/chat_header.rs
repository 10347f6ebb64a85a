//! Top bar of the chat area: sidebar toggle, title and model picker.

use leptos::prelude::*;

use crate::net::pipeline::FALLBACK_TITLE;
use crate::state::form::{FormState, MODELS, model_label};
use crate::state::history::HistoryState;
use crate::state::thread::ThreadState;
use crate::state::ui::UiState;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let thread = expect_context::<RwSignal<ThreadState>>();
    let history = expect_context::<RwSignal<HistoryState>>();

    let title = move || {
        let id = thread.with(|t| t.conversation_id.clone());
        match id {
            Some(id) => history.with(|h| h.find(&id).map(|c| c.title.clone())).unwrap_or_default(),
            None => FALLBACK_TITLE.to_owned(),
        }
    };

    view! {
        <header class="chat-header">
            <button
                class="chat-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <h2 class="chat-header__title">{title}</h2>
            <div class="model-picker">
                <button
                    class="model-picker__current"
                    on:click=move |_| ui.update(|u| u.model_picker_open = !u.model_picker_open)
                >
                    {move || form.with(|f| model_label(&f.model).to_owned())}
                    " ▾"
                </button>
                <Show when=move || ui.with(|u| u.model_picker_open)>
                    <ul class="model-picker__list">
                        {MODELS
                            .iter()
                            .map(|option| {
                                let id = option.id;
                                view! {
                                    <li>
                                        <button
                                            class="model-picker__option"
                                            class:model-picker__option--active=move || form.with(|f| f.model == id)
                                            on:click=move |_| {
                                                form.update(|f| f.set_model(id));
                                                ui.update(|u| u.model_picker_open = false);
                                            }
                                        >
                                            {option.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </header>
    }
}
