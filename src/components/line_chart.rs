//! Time-series line chart with gridlines and point markers.

use charts::consts::LINE_DOT_RADIUS;
use charts::curve::fmt_coord;
use charts::{LineLayout, TimePoint};
use leptos::prelude::*;

#[component]
pub fn LineChart(points: Vec<TimePoint>) -> impl IntoView {
    let l = LineLayout::compute(&points);
    let (left, right) = (l.margin.left, l.width - l.margin.right);
    let (top, bottom) = (l.margin.top, l.height - l.margin.bottom);

    let y_grid = l
        .y_ticks
        .iter()
        .map(|t| {
            view! {
                <line class="line-chart__grid" x1=fmt_coord(left) x2=fmt_coord(right) y1=fmt_coord(t.position) y2=fmt_coord(t.position)/>
                <text x=fmt_coord(left - 8.0) y=fmt_coord(t.position) text-anchor="end" dominant-baseline="middle">
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();

    let x_grid = l
        .x_ticks
        .iter()
        .map(|t| {
            view! {
                <line class="line-chart__grid" x1=fmt_coord(t.position) x2=fmt_coord(t.position) y1=fmt_coord(top) y2=fmt_coord(bottom)/>
                <text x=fmt_coord(t.position) y=fmt_coord(bottom + 20.0) text-anchor="middle">
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();

    let dots = l
        .dots
        .iter()
        .map(|d| {
            view! {
                <circle class="line-chart__dot" cx=fmt_coord(d.cx) cy=fmt_coord(d.cy) r=fmt_coord(LINE_DOT_RADIUS)></circle>
            }
        })
        .collect_view();

    view! {
        <div class="line-chart">
            <svg class="line-chart__svg" viewBox=format!("0 0 {} {}", fmt_coord(l.width), fmt_coord(l.height))>
                <g>{y_grid}</g>
                <g>{x_grid}</g>
                <line class="line-chart__axis" x1=fmt_coord(left) x2=fmt_coord(right) y1=fmt_coord(bottom) y2=fmt_coord(bottom)/>
                <path class="line-chart__path" d=l.path.clone() fill="none"/>
                <g>{dots}</g>
            </svg>
        </div>
    }
}
