//! Transient error banner for the open thread.
//!
//! The banner clears itself after [`AUTO_DISMISS_SECS`] unless a newer error
//! replaced the text in the meantime.

use leptos::prelude::*;

use crate::state::thread::ThreadState;

pub const AUTO_DISMISS_SECS: u64 = 6;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let thread = expect_context::<RwSignal<ThreadState>>();
    let message = Memo::new(move |_| thread.with(|t| t.error.clone()));

    Effect::new(move || {
        let Some(text) = message.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS)).await;
            thread.try_update(|t| {
                if t.error.as_deref() == Some(text.as_str()) {
                    t.dismiss_error();
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        drop(text);
    });

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                <button
                    class="error-banner__close"
                    title="Dismiss"
                    on:click=move |_| thread.update(ThreadState::dismiss_error)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
