// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! A [`ChartOptions`] value is rebuilt in full for every reconfiguration and
//! handed to the orchestrator, which diffs it against the previous one to
//! decide how much derived state to recompute. There is no partial-merge
//! path; the caller always describes the complete desired state.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use tchart_core::{Label, ScaleStrategy, SeriesSpec};

use crate::tooltip::TooltipRow;

/// Formats a value for gridline and tooltip text, overriding the built-in
/// decimal/binary formatting.
pub type ValueFormatter = Box<dyn Fn(f64) -> String>;

/// Invoked when the empty-state reload affordance is clicked.
pub type ReloadHandler = Box<dyn FnMut()>;

/// Invoked on every pointer move or leave with the current hover snapshot.
pub type HoverHandler = Box<dyn FnMut(&HoverEvent)>;

/// What the pointer is over right now.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverEvent {
    /// Index of the nearest label, when the pointer is over the plot.
    pub nearest_index: Option<usize>,
    /// Pointer position in surface coordinates.
    pub pointer: Point,
    /// One row per visible series with a value at the nearest label,
    /// sorted by descending value.
    pub rows: Vec<TooltipRow>,
}

/// Complete chart configuration.
pub struct ChartOptions {
    /// Logical chart width in pixels.
    pub width: f64,
    /// Logical chart height in pixels.
    pub height: f64,
    /// Ordered x-axis labels.
    pub labels: Vec<Label>,
    /// The series to render.
    pub series: Vec<SeriesSpec>,
    /// Stack series cumulatively instead of drawing them independently.
    pub overlay: bool,
    /// Interpolate x positions from timestamp labels.
    pub time_series: bool,
    /// Lower timestamp bound for time mode; defaults to the first label.
    pub span_min: Option<i64>,
    /// Upper timestamp bound for time mode; defaults to the last label.
    pub span_max: Option<i64>,
    /// Number of horizontal gridlines.
    pub grid_num: usize,
    /// Explicit gridline values, top-down, overriding the nice-number scale
    /// when the top covers the data maximum.
    pub sequence: Option<Vec<f64>>,
    /// Use the binary nice-number variant and byte-unit labels.
    pub kilobyte_format: bool,
    /// Enable hover markers and line emphasis.
    pub active_hover: bool,
    /// Draw the clickable legend.
    pub show_legend: bool,
    /// Draw the value axis and gridline labels.
    pub show_y_axis: bool,
    /// Show the tooltip on hover.
    pub show_tooltip: bool,
    /// Maximum x-axis labels drawn before thinning.
    pub label_scale: usize,
    /// Overlay the loading spinner on the (stale) chart body.
    pub loading: bool,
    /// Chart title, drawn above the plot.
    pub title: Option<String>,
    /// Value unit, drawn after the title.
    pub unit: Option<String>,
    /// Hover hit distance to a line segment, in pixels.
    pub hover_precision: f64,
    /// Center category labels between gridlines instead of on them.
    pub label_align_center: bool,
    /// Per-series colors; the built-in palette fills in past the end.
    pub colors: Vec<Color>,
    /// Custom gridline/tooltip value formatter.
    pub format_value: Option<ValueFormatter>,
    /// Reload affordance handler for the empty state.
    pub on_reload: Option<ReloadHandler>,
    /// Hover snapshot consumer.
    pub on_hover: Option<HoverHandler>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            labels: Vec::new(),
            series: Vec::new(),
            overlay: false,
            time_series: false,
            span_min: None,
            span_max: None,
            grid_num: 5,
            sequence: None,
            kilobyte_format: false,
            active_hover: true,
            show_legend: true,
            show_y_axis: true,
            show_tooltip: true,
            label_scale: 8,
            loading: false,
            title: None,
            unit: None,
            hover_precision: 4.0,
            label_align_center: false,
            colors: Vec::new(),
            format_value: None,
            on_reload: None,
            on_hover: None,
        }
    }
}

impl core::fmt::Debug for ChartOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("labels", &self.labels.len())
            .field("series", &self.series.len())
            .field("overlay", &self.overlay)
            .field("time_series", &self.time_series)
            .field("grid_num", &self.grid_num)
            .field("kilobyte_format", &self.kilobyte_format)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl ChartOptions {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logical size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the label sequence.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<Label>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one series.
    #[must_use]
    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Enables overlay (stacked) rendering.
    #[must_use]
    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    /// Enables continuous-time x interpolation.
    #[must_use]
    pub fn with_time_series(mut self, time_series: bool) -> Self {
        self.time_series = time_series;
        self
    }

    /// Sets the timestamp span for time mode.
    #[must_use]
    pub fn with_span(mut self, min: i64, max: i64) -> Self {
        self.span_min = Some(min);
        self.span_max = Some(max);
        self
    }

    /// Sets the gridline count.
    #[must_use]
    pub fn with_grid_num(mut self, grid_num: usize) -> Self {
        self.grid_num = grid_num;
        self
    }

    /// Supplies an explicit top-down gridline sequence.
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<Vec<f64>>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    /// Selects binary (byte-unit) scaling.
    #[must_use]
    pub fn with_kilobyte_format(mut self, kilobyte_format: bool) -> Self {
        self.kilobyte_format = kilobyte_format;
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the unit suffix shown after the title.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Toggles the loading spinner.
    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// The strategy implied by the `overlay` and `time_series` flags.
    pub fn strategy(&self) -> ScaleStrategy {
        ScaleStrategy::from_flags(self.overlay, self.time_series)
    }

    /// The timestamp span for time mode, when explicitly configured.
    pub fn span(&self) -> Option<(i64, i64)> {
        Some((self.span_min?, self.span_max?))
    }

    /// Whether switching from `prev` to `self` invalidates derived geometry
    /// (as opposed to needing only a repaint).
    pub fn invalidates_geometry(&self, prev: &Self) -> bool {
        self.width != prev.width
            || self.height != prev.height
            || self.labels != prev.labels
            || self.series != prev.series
            || self.overlay != prev.overlay
            || self.time_series != prev.time_series
            || self.span_min != prev.span_min
            || self.span_max != prev.span_max
            || self.grid_num != prev.grid_num
            || self.sequence != prev.sequence
            || self.kilobyte_format != prev.kilobyte_format
            || self.label_align_center != prev.label_align_center
    }
}
