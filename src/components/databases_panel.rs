//! Discovered-database list for the sidebar and the introduction card.

use leptos::prelude::*;

use crate::app::{Services, spawn};
use crate::net::pipeline;
use crate::net::types::DiscoveredDatabase;
use crate::state::databases::DatabasesState;

/// Sidebar tab listing discovered databases with refresh and rescan actions.
#[component]
pub fn DatabasesPanel() -> impl IntoView {
    let databases = expect_context::<RwSignal<DatabasesState>>();
    let services = Services::from_context();

    let fetch = move |rescan: bool| {
        let backend = services.backend();
        spawn(async move { pipeline::refresh_databases(&backend, &databases, rescan).await });
    };

    if databases.with_untracked(|d| d.databases.is_empty() && !d.busy()) {
        fetch(false);
    }

    view! {
        <div class="databases">
            <div class="databases__actions">
                <button disabled=move || databases.with(DatabasesState::busy) on:click=move |_| fetch(false)>
                    {move || if databases.with(|d| d.loading) { "Loading…" } else { "Refresh" }}
                </button>
                <button disabled=move || databases.with(DatabasesState::busy) on:click=move |_| fetch(true)>
                    {move || if databases.with(|d| d.rescanning) { "Scanning…" } else { "Rediscover" }}
                </button>
            </div>
            <Show when=move || databases.with(|d| d.error.is_some())>
                <p class="databases__error">{move || databases.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || databases.with(|d| !d.summary.is_empty())>
                <p class="databases__summary">{move || databases.with(|d| d.summary.clone())}</p>
            </Show>
            <Show
                when=move || databases.with(|d| !d.databases.is_empty())
                fallback=move || {
                    view! {
                        <p class="databases__empty">
                            {move || if databases.with(DatabasesState::busy) { "" } else { "No databases found" }}
                        </p>
                    }
                }
            >
                <ul class="databases__list">
                    {move || {
                        databases
                            .with(|d| d.databases.clone())
                            .into_iter()
                            .map(|db| view! { <li><DatabaseCard database=db/></li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

/// One discovered database: icon, name and whichever details are known.
#[component]
pub fn DatabaseCard(database: DiscoveredDatabase) -> impl IntoView {
    let details = [
        database.kind.clone(),
        database.host.clone().unwrap_or_default(),
        database.path.clone().unwrap_or_default(),
        database.size_readable.clone().unwrap_or_default(),
    ]
    .into_iter()
    .filter(|d| !d.is_empty())
    .collect::<Vec<_>>()
    .join(" · ");
    let status = database.status.clone().unwrap_or_default();
    let online = status.eq_ignore_ascii_case("online") || status.eq_ignore_ascii_case("active");

    view! {
        <div class="db-card">
            <span class="db-card__icon">{database.icon()}</span>
            <div class="db-card__body">
                <span class="db-card__name">{database.display_name().to_owned()}</span>
                <span class="db-card__details">{details}</span>
            </div>
            {(!status.is_empty())
                .then(|| {
                    view! {
                        <span class="db-card__status" class:db-card__status--online=online>
                            {status.clone()}
                        </span>
                    }
                })}
        </div>
    }
}
