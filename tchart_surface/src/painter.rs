// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painter helpers built on [`DrawingSurface`].
//!
//! These translate series geometry (with gaps) into surface operations. Gap
//! handling is the common thread: a `None` position never produces a point,
//! and no segment ever spans one.

extern crate alloc;

use core::f64::consts::TAU;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::surface::DrawingSurface;

/// Radius multiplier for the circle standing in for a single-point run.
const LONE_POINT_RADIUS: f64 = 1.5;

/// Hover marker halo and center radii.
const MARKER_HALO_RADIUS: f64 = 5.0;
const MARKER_CENTER_RADIUS: f64 = 3.0;

/// Strokes one series as a gap-aware polyline.
///
/// Each contiguous run of defined points becomes one stroke. A run holding a
/// single point would stroke an invisible zero-length path, so it is drawn
/// as a small filled circle instead.
pub fn stroke_series(
    surface: &mut dyn DrawingSurface,
    xs: &[f64],
    ys: &[Option<f64>],
    color: Color,
    width: f64,
) {
    let mut run: SmallVec<[Point; 32]> = SmallVec::new();
    for (&x, &y) in xs.iter().zip(ys) {
        match y {
            Some(y) => run.push(Point::new(x, y)),
            None => flush_run(surface, &mut run, color, width),
        }
    }
    flush_run(surface, &mut run, color, width);
}

fn flush_run(
    surface: &mut dyn DrawingSurface,
    run: &mut SmallVec<[Point; 32]>,
    color: Color,
    width: f64,
) {
    match run.len() {
        0 => {}
        1 => surface.circle(run[0], width * LONE_POINT_RADIUS, color),
        _ => surface.stroke_run(run, color, width),
    }
    run.clear();
}

/// Fills the band between an upper and a lower boundary sharing the same x
/// positions.
///
/// The polygon walks the upper boundary forward and the lower boundary
/// backward. Gaps in either boundary are skipped (the fill bridges them).
/// When the lower boundary is undefined at its first or last position there
/// is no closed band to fill, so this is a no-op.
pub fn fill_between(
    surface: &mut dyn DrawingSurface,
    xs: &[f64],
    upper: &[Option<f64>],
    lower: &[Option<f64>],
    color: Color,
    alpha: f64,
) {
    if xs.is_empty()
        || lower.first().copied().flatten().is_none()
        || lower.last().copied().flatten().is_none()
    {
        return;
    }

    let mut points: SmallVec<[Point; 64]> = SmallVec::new();
    for (&x, &y) in xs.iter().zip(upper) {
        if let Some(y) = y {
            points.push(Point::new(x, y));
        }
    }
    if points.is_empty() {
        return;
    }
    for (&x, &y) in xs.iter().zip(lower).rev() {
        if let Some(y) = y {
            points.push(Point::new(x, y));
        }
    }

    surface.fill_polygon(&points, color, alpha);
}

/// Draws the two-tone hover marker: a white halo under a colored center.
pub fn hover_marker(surface: &mut dyn DrawingSurface, at: Point, color: Color) {
    surface.circle(at, MARKER_HALO_RADIUS, css::WHITE);
    surface.circle(at, MARKER_CENTER_RADIUS, color);
}

/// Number of spokes in the loading spinner.
const SPINNER_SPOKES: usize = 12;

/// One full spinner revolution, in milliseconds.
const SPINNER_PERIOD_MS: f64 = 1_000.0;

/// The spinner gives up after this long, so a caller that never leaves the
/// loading state does not animate forever.
const SPINNER_TIMEOUT_MS: f64 = 6_000.0;

/// The rotating radial loading animation.
///
/// The orchestrator starts it when entering the loading state and calls
/// [`advance`] from the frame driver; the spinner self-cancels after six
/// seconds.
///
/// [`advance`]: Spinner::advance
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spinner {
    elapsed_ms: f64,
    active: bool,
}

impl Spinner {
    /// Creates an inactive spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the animation.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.active = true;
    }

    /// Stops the animation.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Whether the animation is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the animation by `dt_ms` milliseconds.
    ///
    /// Returns `true` while another frame should be scheduled; returns
    /// `false` once stopped or timed out.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= SPINNER_TIMEOUT_MS {
            self.active = false;
        }
        self.active
    }

    /// Draws the current animation frame as a ring of fading spokes.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, center: Point, radius: f64, color: Color) {
        if !self.active {
            return;
        }
        let turn = self.elapsed_ms / SPINNER_PERIOD_MS;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "reduced modulo the spoke count immediately"
        )]
        let lead = ((turn * SPINNER_SPOKES as f64) as i64).rem_euclid(SPINNER_SPOKES as i64);
        for spoke in 0..SPINNER_SPOKES {
            let angle = TAU * spoke as f64 / SPINNER_SPOKES as f64;
            let from = Point::new(
                center.x + angle.cos() * radius * 0.5,
                center.y + angle.sin() * radius * 0.5,
            );
            let to = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            // The spoke nearest the lead is opaque; the rest fade behind it.
            let behind = (lead - spoke as i64).rem_euclid(SPINNER_SPOKES as i64) as f64;
            let fade = 1.0 - behind / SPINNER_SPOKES as f64;
            #[allow(clippy::cast_possible_truncation, reason = "fade is in [0, 1]")]
            surface.line(from, to, color.with_alpha(fade as f32), 2.0);
        }
    }
}
