//! Suggested starter questions shown in an empty thread.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::thread::ThreadState;

#[component]
pub fn Recommend() -> impl IntoView {
    let thread = expect_context::<RwSignal<ThreadState>>();
    let services = Services::from_context();

    view! {
        <Show when=move || thread.with(|t| !t.recommends.is_empty())>
            <div class="recommend">
                <p class="recommend__title">"Try asking"</p>
                <div class="recommend__chips">
                    {move || {
                        thread
                            .with(|t| t.recommends.clone())
                            .into_iter()
                            .map(|question| {
                                let text = question.clone();
                                view! {
                                    <button
                                        class="recommend__chip"
                                        disabled=move || !thread.with(ThreadState::accepts_send)
                                        on:click=move |_| services.submit_question(text.clone())
                                    >
                                        {question}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
