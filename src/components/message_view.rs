//! Rendering for a single thread message.
//!
//! DESIGN
//! ======
//! One view per `MessageKind` variant. Response text goes through the
//! Markdown renderer (SQL as a fenced block, then the explanation); a result
//! set, when present, is handed to `ResultView`.

use leptos::prelude::*;

use crate::components::databases_panel::DatabaseCard;
use crate::components::result_view::ResultView;
use crate::state::databases::DatabasesState;
use crate::state::thread::{Message, MessageKind};
use crate::util::markdown::{render_markdown_html, sql_block};

#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    match message.kind {
        MessageKind::Introduction { body } => view! { <IntroductionView body=body/> }.into_any(),
        MessageKind::Question { text } => view! { <QuestionView text=text/> }.into_any(),
        MessageKind::Response { query, explanation, result } => {
            let html = render_markdown_html(&format!("{}{explanation}", sql_block(&query)));
            view! {
                <div class="message message--response">
                    <div class="message__markdown" inner_html=html></div>
                    {result.map(|result| view! { <ResultView result=result/> })}
                </div>
            }
            .into_any()
        }
    }
}

/// Greeting for a new draft, followed by the databases the AI service found.
#[component]
fn IntroductionView(body: String) -> impl IntoView {
    let databases = expect_context::<RwSignal<DatabasesState>>();
    let html = render_markdown_html(&body);

    view! {
        <div class="message message--introduction">
            <div class="message__markdown" inner_html=html></div>
            <Show when=move || databases.with(|d| !d.databases.is_empty())>
                <div class="message__databases">
                    {move || {
                        databases
                            .with(|d| d.databases.clone())
                            .into_iter()
                            .map(|db| view! { <DatabaseCard database=db/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn QuestionView(text: String) -> impl IntoView {
    view! {
        <div class="message message--question">
            <p class="message__text">{text}</p>
        </div>
    }
}
