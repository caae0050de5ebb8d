// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart orchestration for the tchart engine.
//!
//! `tchart_core` computes geometry and `tchart_surface` abstracts drawing;
//! this crate puts them to work. It owns the configuration model
//! ([`ChartOptions`]), the draw pipeline and pointer interaction
//! ([`Chart`]), the hover tooltip, click hit-testing, and the caller-facing
//! [`TChart`] facade that coalesces repaints through the frame scheduler.
//!
//! Everything is synchronous and platform-free: hosts supply a
//! [`DrawingSurface`] and a [`FloatingOverlay`], and drive frames by calling
//! [`TChart::tick`].
//!
//! [`DrawingSurface`]: tchart_surface::DrawingSurface

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod chart;
mod config;
mod facade;
mod hit;
mod theme;
mod tooltip;

#[cfg(not(feature = "std"))]
mod float;

#[cfg(test)]
mod engine_tests;

pub use chart::{Chart, ChartAction, ChartKind, SeriesState};
pub use config::{ChartOptions, HoverEvent, HoverHandler, ReloadHandler, ValueFormatter};
pub use facade::TChart;
pub use hit::HitRegistry;
pub use theme::{SERIES_PALETTE, Theme, series_color};
pub use tooltip::{FloatingOverlay, RecordingOverlay, Tooltip, TooltipRow};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tchart_charts requires either the `std` or `libm` feature");
