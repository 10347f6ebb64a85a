//! Chat workspace page for `/chat` and `/chat/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route id selects the conversation. Every change of it opens the
//! thread (saved messages, or the draft introduction) and refreshes the
//! history list for the new active id. Both flows are ticketed, so a quick
//! switch simply drops the slower, older result.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::{Services, spawn};
use crate::components::banner::ErrorBanner;
use crate::components::chat_box::ChatBox;
use crate::components::chat_header::ChatHeader;
use crate::components::message_input::MessageInput;
use crate::components::sidebar::Sidebar;
use crate::net::pipeline;
use crate::state::auth::AuthState;
use crate::state::databases::DatabasesState;
use crate::state::form::FormState;
use crate::state::history::HistoryState;
use crate::state::thread::ThreadState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let thread = expect_context::<RwSignal<ThreadState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let databases = expect_context::<RwSignal<DatabasesState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let services = Services::from_context();

    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let conversation_id = Memo::new(move |_| params.read().get("id").filter(|id| !id.is_empty()));

    Effect::new(move || {
        let id = conversation_id.get();
        if !auth.with_untracked(AuthState::is_signed_in) {
            return;
        }
        log::debug!("chat: route -> {}", id.as_deref().unwrap_or("draft"));

        let backend = services.backend();
        let open_id = id.clone();
        spawn(async move { pipeline::open_conversation(&backend, &thread, &databases, &form, open_id).await });

        let backend = services.backend();
        spawn(async move { pipeline::load_history(&backend, &history, &form, id).await });
    });

    view! {
        <div class="chat-page">
            <aside class=move || ui.with(UiState::sidebar_class)>
                <Sidebar/>
            </aside>
            <main class="chat-main">
                <ChatHeader/>
                <ErrorBanner/>
                <ChatBox/>
                <MessageInput/>
            </main>
        </div>
    }
}
