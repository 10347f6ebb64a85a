//! Bar chart series derivation and layout.
//!
//! The user picks one column as the category axis and one as the value
//! axis. Any index pair is accepted, including identical or out-of-range
//! indices: missing labels render empty and non-numeric values plot as zero.

#[cfg(test)]
#[path = "bar_test.rs"]
mod bar_test;

use crate::consts::{BAR_HEIGHT, BAR_MARGIN, BAR_PADDING, BAR_WIDTH, DEFAULT_TICK_COUNT, Margin};
use crate::scale::{BandScale, LinearScale, Tick};
use crate::table::ResultSet;

/// Column selection for the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarAxes {
    pub category: usize,
    pub value: usize,
}

impl BarAxes {
    /// Category axis on the first column, value axis on the first numeric
    /// column of the first row (falling back to the first column).
    #[must_use]
    pub fn default_for(result: &ResultSet) -> Self {
        Self { category: 0, value: result.first_numeric_column().unwrap_or(0) }
    }
}

/// One plotted bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Reshape rows into `(label, value)` pairs for the selected axes.
#[must_use]
pub fn derive_series(result: &ResultSet, axes: BarAxes) -> Vec<BarDatum> {
    (0..result.rows.len())
        .map(|row| BarDatum {
            label: result.cell(row, axes.category).map(ToString::to_string).unwrap_or_default(),
            value: result
                .cell(row, axes.value)
                .and_then(crate::table::Scalar::as_plot_value)
                .unwrap_or(0.0),
        })
        .collect()
}

/// A positioned bar rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Computed bar chart geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub bars: Vec<BarRect>,
    pub value_ticks: Vec<Tick>,
    /// Category label positions (band centers).
    pub category_ticks: Vec<Tick>,
    /// Pixel row of the zero baseline.
    pub baseline: f64,
    pub category_name: String,
    pub value_name: String,
}

impl BarLayout {
    /// Lay out the selected series in the default viewBox.
    #[must_use]
    pub fn compute(result: &ResultSet, axes: BarAxes) -> Self {
        Self::compute_in(result, axes, BAR_WIDTH, BAR_HEIGHT, BAR_MARGIN)
    }

    #[must_use]
    pub fn compute_in(result: &ResultSet, axes: BarAxes, width: f64, height: f64, margin: Margin) -> Self {
        let series = derive_series(result, axes);

        let (min, max) = series
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), d| (lo.min(d.value), hi.max(d.value)));
        // An all-zero series still gets a unit value axis.
        let max = if min == max { min + 1.0 } else { max };
        let y = LinearScale::new((min, max), (height - margin.bottom, margin.top)).nice(DEFAULT_TICK_COUNT);
        let x = BandScale::new(series.len(), (margin.left, width - margin.right), BAR_PADDING);
        let baseline = y.map(0.0);

        let bandwidth = x.bandwidth();
        let mut bars = Vec::with_capacity(series.len());
        let mut category_ticks = Vec::with_capacity(series.len());
        for (index, datum) in series.into_iter().enumerate() {
            let Some(left) = x.position(index) else {
                continue;
            };
            let top = y.map(datum.value.max(0.0));
            let bottom = y.map(datum.value.min(0.0));
            category_ticks.push(Tick { position: left + bandwidth / 2.0, label: datum.label.clone() });
            bars.push(BarRect {
                x: left,
                y: top,
                width: bandwidth,
                height: (bottom - top).abs(),
                label: datum.label,
                value: datum.value,
            });
        }

        Self {
            width,
            height,
            margin,
            bars,
            value_ticks: y.ticks(DEFAULT_TICK_COUNT),
            category_ticks,
            baseline,
            category_name: result.column_name(axes.category).to_owned(),
            value_name: result.column_name(axes.value).to_owned(),
        }
    }
}
