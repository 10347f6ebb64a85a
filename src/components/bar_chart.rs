//! Bar chart for a query result with user-selectable axes.
//!
//! Geometry comes from `charts::BarLayout`; this component only maps it onto
//! SVG elements and re-derives it whenever an axis selection changes.

use charts::curve::fmt_coord;
use charts::{BarAxes, BarLayout, ResultSet};
use leptos::prelude::*;

#[component]
pub fn BarChart(result: ResultSet) -> impl IntoView {
    let axes = RwSignal::new(BarAxes::default_for(&result));
    let columns = result.columns.clone();
    let result = StoredValue::new(result);
    let layout = Memo::new(move |_| {
        let axes = axes.get();
        result.with_value(|r| BarLayout::compute(r, axes))
    });

    let axis_select = move |label: &'static str, is_category: bool| {
        let selected = move || {
            let a = axes.get();
            if is_category { a.category } else { a.value }
        };
        view! {
            <label class="bar-chart__axis">
                {label}
                <select on:change=move |ev| {
                    let Ok(index) = event_target_value(&ev).parse::<usize>() else {
                        return;
                    };
                    axes.update(|a| if is_category { a.category = index } else { a.value = index });
                }>
                    {columns
                        .iter()
                        .enumerate()
                        .map(|(index, name)| {
                            view! {
                                <option value=index.to_string() selected=move || selected() == index>
                                    {name.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        }
    };

    view! {
        <div class="bar-chart">
            <div class="bar-chart__controls">
                {axis_select("Category", true)}
                {axis_select("Value", false)}
            </div>
            {move || {
                let l = layout.get();
                let (left, right) = (l.margin.left, l.width - l.margin.right);
                let (top, bottom) = (l.margin.top, l.height - l.margin.bottom);
                let label_y = bottom + 20.0;
                // Long category lists get slanted labels.
                let slant = l.bars.len() > 8;
                view! {
                    <svg class="bar-chart__svg" viewBox=format!("0 0 {} {}", fmt_coord(l.width), fmt_coord(l.height))>
                        <g class="bar-chart__grid">
                            {l
                                .value_ticks
                                .iter()
                                .map(|t| {
                                    view! {
                                        <line
                                            x1=fmt_coord(left)
                                            x2=fmt_coord(right)
                                            y1=fmt_coord(t.position)
                                            y2=fmt_coord(t.position)
                                        />
                                        <text x=fmt_coord(left - 8.0) y=fmt_coord(t.position) text-anchor="end" dominant-baseline="middle">
                                            {t.label.clone()}
                                        </text>
                                    }
                                })
                                .collect_view()}
                        </g>
                        <g class="bar-chart__bars">
                            {l
                                .bars
                                .iter()
                                .map(|b| {
                                    view! {
                                        <rect
                                            x=fmt_coord(b.x)
                                            y=fmt_coord(b.y)
                                            width=fmt_coord(b.width)
                                            height=fmt_coord(b.height)
                                        ></rect>
                                    }
                                })
                                .collect_view()}
                        </g>
                        <line
                            class="bar-chart__baseline"
                            x1=fmt_coord(left)
                            x2=fmt_coord(right)
                            y1=fmt_coord(l.baseline)
                            y2=fmt_coord(l.baseline)
                        />
                        <g class="bar-chart__labels">
                            {l
                                .category_ticks
                                .iter()
                                .map(|t| {
                                    let transform = if slant {
                                        format!("rotate(-35 {} {})", fmt_coord(t.position), fmt_coord(label_y))
                                    } else {
                                        String::new()
                                    };
                                    view! {
                                        <text
                                            x=fmt_coord(t.position)
                                            y=fmt_coord(label_y)
                                            text-anchor=if slant { "end" } else { "middle" }
                                            transform=transform
                                        >
                                            {t.label.clone()}
                                        </text>
                                    }
                                })
                                .collect_view()}
                        </g>
                        <text class="bar-chart__axis-name" x=fmt_coord((left + right) / 2.0) y=fmt_coord(l.height - 6.0) text-anchor="middle">
                            {l.category_name.clone()}
                        </text>
                        <text
                            class="bar-chart__axis-name"
                            transform=format!("translate(16 {}) rotate(-90)", fmt_coord((top + bottom) / 2.0))
                            text-anchor="middle"
                        >
                            {l.value_name.clone()}
                        </text>
                    </svg>
                }
            }}
        </div>
    }
}
