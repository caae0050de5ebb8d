// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric core of the tchart engine.
//!
//! This crate is the pure half of the charting engine:
//! - **Labels and series** describe the caller's data (`{labels, series}`).
//! - **Scales** turn a value range into a "nice" gridline sequence.
//! - **Geometry** turns labels + series + a plot rectangle into per-point
//!   pixel coordinates, for standard, stacked (overlay), and continuous-time
//!   layouts.
//!
//! Everything here is a synchronous, failure-free function of its inputs:
//! degenerate data (empty labels, all-NaN series, a zero value range)
//! produces empty geometry, never an error. Drawing and interaction live
//! downstream in `tchart_surface` and `tchart_charts`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod scale;

pub use data::{Label, SeriesSpec};
pub use format::{format_binary_value, format_decimal_value, format_stamp, simplify_stamp_labels};
pub use geometry::{
    Geometry, GeometryInput, PlotArea, ScaleStrategy, SeriesGeometry, compute_geometry,
};
pub use scale::{ScaleValue, ValueScale, binary_sequence, decimal_sequence};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tchart_core requires either the `std` or `libm` feature");
