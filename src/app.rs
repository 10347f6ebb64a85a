//! Root application component with routing and context providers.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::backend::HttpBackend;
use crate::pages::{chat::ChatPage, login::LoginPage, pricing::PricingPage, register::RegisterPage};
use crate::state::{
    auth::AuthState, databases::DatabasesState, form::FormState, history::HistoryState, thread::ThreadState,
    ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let form = RwSignal::new(FormState::with_model(&config.default_model));

    provide_context(config);
    provide_context(RwSignal::new(AuthState::from_storage()));
    provide_context(RwSignal::new(ThreadState::default()));
    provide_context(RwSignal::new(HistoryState::default()));
    provide_context(RwSignal::new(DatabasesState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(form);

    view! {
        <Stylesheet id="leptos" href="/pkg/sqlchat.css"/>
        <Title text="SQL Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}

/// Handles the async flows need, captured while a component's reactive
/// owner is current so event handlers can use them later.
#[derive(Clone, Copy)]
pub struct Services {
    config: StoredValue<AppConfig>,
    auth: RwSignal<AuthState>,
    thread: RwSignal<ThreadState>,
    form: RwSignal<FormState>,
}

impl Services {
    /// Read the app-level contexts. Call during component setup.
    pub fn from_context() -> Self {
        Self {
            config: StoredValue::new(expect_context::<AppConfig>()),
            auth: expect_context::<RwSignal<AuthState>>(),
            thread: expect_context::<RwSignal<ThreadState>>(),
            form: expect_context::<RwSignal<FormState>>(),
        }
    }

    /// Backend client carrying the current access token.
    #[must_use]
    pub fn backend(&self) -> HttpBackend {
        let token = self.auth.try_with_untracked(|a| a.access_token.clone()).flatten();
        HttpBackend::new(self.config.get_value(), token)
    }

    /// Send `text` from the message input or a recommendation chip.
    pub fn submit_question(&self, text: String) {
        let (thread, form, backend) = (self.thread, self.form, self.backend());
        spawn(async move {
            if let Err(rejected) = crate::net::pipeline::send_question(&backend, &thread, &form, &text).await {
                log::debug!("send rejected: {rejected}");
            }
        });
    }
}

/// Run a UI flow on the browser's event loop. Outside the browser the
/// future is dropped unpolled.
pub fn spawn<F>(flow: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(flow);
    #[cfg(not(feature = "hydrate"))]
    drop(flow);
}
