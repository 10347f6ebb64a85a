//! Sidebar shell: brand, tab switcher, user menu and the active tab body.
//!
//! ARCHITECTURE
//! ============
//! Tab bodies are independent components; the sidebar only switches between
//! them from `UiState::sidebar_tab`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::chat_tab::ChatTab;
use crate::components::databases_panel::DatabasesPanel;
use crate::components::schema_tab::SchemaTab;
use crate::state::auth::AuthState;
use crate::state::ui::{SidebarTab, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="sidebar__header">
            <h3 class="sidebar__brand">"SQL " <span class="sidebar__brand-accent">"Chat"</span></h3>
            <SidebarNav/>
            <UserMenu/>
        </div>
        <div class="sidebar__body">
            {move || match ui.with(|u| u.sidebar_tab) {
                SidebarTab::Chat => view! { <ChatTab/> }.into_any(),
                SidebarTab::Schema => view! { <SchemaTab/> }.into_any(),
                SidebarTab::Databases => view! { <DatabasesPanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SidebarNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tab_button = move |tab: SidebarTab, label: &'static str, title: &'static str| {
        view! {
            <button
                class="sidebar__tab"
                class:sidebar__tab--active=move || ui.with(|u| u.sidebar_tab == tab)
                title=title
                on:click=move |_| ui.update(|u| u.show_tab(tab))
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="sidebar__tabs">
            {tab_button(SidebarTab::Chat, "💬", "Chats")}
            {tab_button(SidebarTab::Schema, "🗂", "Schema")}
            {tab_button(SidebarTab::Databases, "🖴", "Discovered databases")}
        </nav>
    }
}

/// Avatar button with pricing, sidebar and sign-out actions.
#[component]
fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };
    let initial = move || name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    let on_sign_out = move |_| {
        ui.update(|u| u.user_menu_open = false);
        auth.update(AuthState::sign_out);
    };

    view! {
        <div class="user-menu">
            <button
                class="user-menu__avatar"
                title=name
                on:click=move |_| ui.update(|u| u.user_menu_open = !u.user_menu_open)
            >
                {initial}
            </button>
            <Show when=move || ui.with(|u| u.user_menu_open)>
                <ul class="user-menu__list" on:click=move |_| ui.update(|u| u.user_menu_open = false)>
                    <li class="user-menu__name">{name}</li>
                    <li>
                        <A href="/pricing">"Upgrade plan"</A>
                    </li>
                    <li>
                        <button on:click=move |_| ui.update(UiState::toggle_sidebar)>"Hide sidebar"</button>
                    </li>
                    <li>
                        <button class="user-menu__sign-out" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
