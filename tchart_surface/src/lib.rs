// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing abstraction for the tchart engine.
//!
//! Charts never touch a platform canvas directly. They draw through the
//! [`DrawingSurface`] capability trait, which a host backs with its 2D
//! surface of choice; tests and the demo use [`RecordingSurface`], which
//! retains every operation as a [`DrawOp`] value.
//!
//! On top of the raw surface sit the painter helpers (gap-aware series
//! strokes, band fills, hover markers, the loading [`Spinner`]) and the
//! explicit [`FrameScheduler`] that coalesces repaint requests into single
//! synchronous ticks.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod painter;
mod record;
mod sched;
mod surface;

#[cfg(not(feature = "std"))]
mod float;

pub use painter::{Spinner, fill_between, hover_marker, stroke_series};
pub use record::{DrawOp, RecordingSurface};
pub use sched::FrameScheduler;
pub use surface::{DrawingSurface, TextAnchor, TextBaseline};

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tchart_surface requires either the `std` or `libm` feature");
