//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, spawn};
use crate::error::ApiError;
use crate::net::pipeline;
use crate::state::auth::{AuthState, SignInForm};
use crate::util::auth::install_signed_in_redirect;

/// User-facing text for a failed sign-in.
fn sign_in_failure(error: &ApiError) -> String {
    if error.is_unauthorized() {
        "Invalid email or password.".to_owned()
    } else {
        format!("Sign in failed: {error}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = Services::from_context();
    let navigate = use_navigate();

    install_signed_in_redirect(auth, navigate.clone());

    let fields = RwSignal::new(SignInForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(SignInForm::validate) {
            Ok(request) => request,
            Err(invalid) => {
                info.set(invalid.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in…".to_owned());

        let backend = services.backend();
        let navigate = navigate.clone();
        spawn(async move {
            match pipeline::sign_in(&backend, &auth, &request).await {
                Ok(()) => {
                    info.set(String::new());
                    navigate("/chat", leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login: sign in failed ({}): {e}", e.error_code());
                    info.set(sign_in_failure(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SQL " <span class="login-card__accent">"Chat"</span></h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || fields.with(|f| f.email.clone())
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || fields.with(|f| f.password.clone())
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? " <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
