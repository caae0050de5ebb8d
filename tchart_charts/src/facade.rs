// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-facing entry point.
//!
//! [`TChart`] ties one host surface, one floating overlay, and at most one
//! [`Chart`] instance together, and coalesces repaints through a
//! [`FrameScheduler`]: mutations request a frame, and the host's frame
//! driver calls [`tick`] to paint at most once per frame with the latest
//! state.
//!
//! A facade constructed without a host surface is *permanently inert*:
//! every method is a no-op. Callers are expected to check for their host
//! before constructing; the inert path exists so a missing host degrades to
//! a blank chart instead of a panic deep inside a draw call.
//!
//! [`tick`]: TChart::tick

extern crate alloc;

use kurbo::Point;
use tchart_surface::{DrawingSurface, FrameScheduler};

use crate::chart::{Chart, ChartKind};
use crate::config::ChartOptions;
use crate::tooltip::FloatingOverlay;

/// One chart bound to one host surface and overlay.
pub struct TChart<S: DrawingSurface, O: FloatingOverlay> {
    host: Option<S>,
    overlay: O,
    chart: Option<Chart>,
    scheduler: FrameScheduler,
}

impl<S: DrawingSurface, O: FloatingOverlay> core::fmt::Debug for TChart<S, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TChart")
            .field("inert", &self.host.is_none())
            .field("kind", &self.chart.as_ref().map(Chart::kind))
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl<S: DrawingSurface, O: FloatingOverlay> TChart<S, O> {
    /// Binds a facade to `host`. `None` produces an inert facade.
    pub fn new(host: Option<S>, overlay: O) -> Self {
        Self {
            host,
            overlay,
            chart: None,
            scheduler: FrameScheduler::new(),
        }
    }

    /// Whether this facade was constructed without a host and ignores
    /// everything.
    pub fn is_inert(&self) -> bool {
        self.host.is_none()
    }

    /// The current chart, if one has been configured.
    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// The host surface.
    pub fn host(&self) -> Option<&S> {
        self.host.as_ref()
    }

    /// Shows a chart of `kind` with `options`.
    ///
    /// Rebuilds the chart instance when the kind changed or none exists
    /// yet; otherwise the existing instance is reconfigured in place, which
    /// preserves interaction state like legend toggles.
    pub fn set_kind(&mut self, kind: ChartKind, options: ChartOptions) {
        if self.host.is_none() {
            return;
        }
        match &mut self.chart {
            Some(chart) if chart.kind() == kind => chart.set_options(options),
            _ => self.chart = Some(Chart::new(kind, options)),
        }
        self.scheduler.request();
    }

    /// Requests a repaint; the next [`tick`] paints.
    ///
    /// [`tick`]: TChart::tick
    pub fn draw(&mut self) {
        if self.chart.is_some() {
            self.scheduler.request();
        }
    }

    /// Advances animations and paints if a repaint is pending.
    ///
    /// Called by the host's frame driver with the elapsed milliseconds.
    /// Returns `true` when a frame was painted.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let (Some(host), Some(chart)) = (self.host.as_mut(), self.chart.as_mut()) else {
            return false;
        };
        if chart.advance(dt_ms) {
            self.scheduler.request();
        }
        if !self.scheduler.take() {
            return false;
        }
        chart.draw(host);
        true
    }

    /// Forwards a pointer move; schedules a repaint only when the hover
    /// state actually changed.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if chart.pointer_move(pointer, &mut self.overlay) {
            self.scheduler.request();
        }
    }

    /// Forwards a pointer leave.
    pub fn pointer_leave(&mut self) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if chart.pointer_leave(&mut self.overlay) {
            self.scheduler.request();
        }
    }

    /// Forwards a click (legend toggles, reload, tooltip pinning).
    pub fn click(&mut self, pointer: Point) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if chart.click(pointer, &mut self.overlay) {
            self.scheduler.request();
        }
    }

    /// Emphasizes the series named `name`, as when a tooltip row is
    /// hovered.
    pub fn highlight_series(&mut self, name: &str) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if chart.highlight_series(name) {
            self.scheduler.request();
        }
    }

    /// Unpins and hides the tooltip.
    pub fn close_tooltip(&mut self) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        chart.close_tooltip(&mut self.overlay);
        self.scheduler.request();
    }

    /// Resizes the host surface and the chart.
    pub fn set_size(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        host.set_size(width, height, device_pixel_ratio);
        if let Some(chart) = self.chart.as_mut() {
            chart.set_size(width, height);
            self.scheduler.request();
        }
    }
}
