//! Query result rendered as a table, bar chart or line chart.

use charts::{ResultSet, line};
use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::line_chart::LineChart;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultMode {
    Table,
    Bar,
    Line,
}

impl ResultMode {
    fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Bar => "Bar chart",
            Self::Line => "Line chart",
        }
    }
}

#[component]
pub fn ResultView(result: ResultSet) -> impl IntoView {
    if result.columns.is_empty() && result.rows.is_empty() {
        return view! { <p class="result__empty">"The query returned no rows."</p> }.into_any();
    }

    let mode = RwSignal::new(ResultMode::Table);
    let points = line::time_series(&result);
    let mut modes = vec![ResultMode::Table, ResultMode::Bar];
    if points.is_some() {
        modes.push(ResultMode::Line);
    }
    let result = StoredValue::new(result);
    let points = StoredValue::new(points.unwrap_or_default());

    view! {
        <div class="result">
            <div class="result__modes">
                {modes
                    .into_iter()
                    .map(|m| {
                        view! {
                            <button
                                class="result__mode"
                                class:result__mode--active=move || mode.get() == m
                                on:click=move |_| mode.set(m)
                            >
                                {m.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match mode.get() {
                ResultMode::Table => view! { <ResultTable result=result.get_value()/> }.into_any(),
                ResultMode::Bar => view! { <BarChart result=result.get_value()/> }.into_any(),
                ResultMode::Line => view! { <LineChart points=points.get_value()/> }.into_any(),
            }}
        </div>
    }
    .into_any()
}

#[component]
fn ResultTable(result: ResultSet) -> impl IntoView {
    let ragged = !result.is_rectangular();
    let ResultSet { columns, rows } = result;
    let width = columns.len();

    view! {
        <div class="result__table-wrap">
            <Show when=move || ragged>
                <p class="result__note">"Some rows have a different number of cells than there are columns."</p>
            </Show>
            <table class="result__table">
                <thead>
                    <tr>{columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let cells = (0..width.max(row.len()))
                                .map(|i| row.get(i).map(ToString::to_string).unwrap_or_default())
                                .collect::<Vec<_>>();
                            view! { <tr>{cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
