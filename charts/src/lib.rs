//! Chart geometry for SQL result sets.
//!
//! This crate turns tabular query results into plot-ready geometry: band and
//! linear scales for bar charts, time and linear scales for line charts, tick
//! generation, and SVG path data for monotone line interpolation. It has no
//! browser dependencies; the `sqlchat` UI crate feeds the computed layouts
//! into SVG elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`table`] | `ResultSet` and scalar cell values |
//! | [`ticks`] | Nice tick steps and number formatting |
//! | [`scale`] | Linear, band and time scales |
//! | [`curve`] | SVG path generation (monotone-X and linear) |
//! | [`bar`] | Axis selection and bar series derivation/layout |
//! | [`line`] | Time-series extraction and line chart layout |
//! | [`consts`] | Chart dimensions, margins and tick counts |

pub mod bar;
pub mod consts;
pub mod curve;
pub mod line;
pub mod scale;
pub mod table;
pub mod ticks;

pub use bar::{BarAxes, BarDatum, BarLayout};
pub use line::{LineLayout, TimePoint};
pub use table::{ResultSet, Scalar};
