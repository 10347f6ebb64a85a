//! Route guards shared by the auth-aware pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/chat` requires a signed-in user; `/login` and `/register` bounce a
//! signed-in user to `/chat`. Both directions use the same effect shape.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !auth.with(AuthState::is_signed_in) {
            navigate("/login", replace());
        }
    });
}

/// Redirect to `/chat` whenever a user is present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(AuthState::is_signed_in) {
            navigate("/chat", replace());
        }
    });
}
