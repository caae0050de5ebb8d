// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart orchestrator.
//!
//! A [`Chart`] owns the configuration, the derived geometry, per-series
//! render state, the hit registry, and the tooltip, and runs the draw
//! pipeline in a fixed stage order:
//!
//! title → axes → grid → x labels → legend → body (or empty state) →
//! hover markers → loading spinner.
//!
//! Each stage is conditionally skipped by configuration, never reordered.
//! Drawing is failure-free: degenerate configurations fall through to the
//! empty state rather than erroring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use tchart_core::{
    Geometry, GeometryInput, Label, PlotArea, ScaleStrategy, ScaleValue, compute_geometry,
    format_binary_value, format_decimal_value, format_stamp, simplify_stamp_labels,
};
use tchart_surface::{
    DrawingSurface, Spinner, TextAnchor, TextBaseline, fill_between, hover_marker, stroke_series,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::{ChartOptions, HoverEvent};
use crate::hit::HitRegistry;
use crate::theme::{Theme, series_color};
use crate::tooltip::{FloatingOverlay, Tooltip, TooltipRow};

const PAD: f64 = 8.0;
const TITLE_HEIGHT: f64 = 24.0;
const Y_AXIS_WIDTH: f64 = 48.0;
const X_LABEL_HEIGHT: f64 = 20.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const LEGEND_SWATCH: f64 = 10.0;

const TITLE_FONT_SIZE: f64 = 14.0;
const LABEL_FONT_SIZE: f64 = 11.0;

const LINE_WIDTH: f64 = 2.0;
const HOVERED_LINE_WIDTH: f64 = 3.0;
const AREA_FILL_ALPHA: f64 = 0.35;
const BAR_WIDTH_RATIO: f64 = 0.8;
const SPINNER_RADIUS: f64 = 14.0;

/// The four chart kinds.
///
/// `Area` and `Bar` always stack; `TimeSeries` always interpolates x from
/// timestamps. The kind forces the matching configuration flags on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    /// Independent polylines.
    #[default]
    Line,
    /// Stacked filled bands; only the topmost band's outline is stroked.
    Area,
    /// Stacked bars per label.
    Bar,
    /// Polylines or bands over timestamp-interpolated x positions.
    TimeSeries,
}

/// What a registered click region does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartAction {
    /// Toggle the visibility of series `0`-indexed by position.
    ToggleSeries(usize),
    /// Invoke the configured reload handler.
    Reload,
}

/// Per-series render state, owned by the orchestrator (never written back
/// into the caller's series descriptions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesState {
    /// Shown (legend toggles flip this).
    pub visible: bool,
    /// Emphasized because the pointer is near it.
    pub hovered: bool,
    /// Resolved draw color.
    pub color: Color,
}

/// One configured chart: configuration, derived geometry, and interaction
/// state.
pub struct Chart {
    kind: ChartKind,
    options: ChartOptions,
    theme: Theme,
    geometry: Geometry,
    state: Vec<SeriesState>,
    hits: HitRegistry<ChartAction>,
    tooltip: Tooltip,
    spinner: Spinner,
    hovered_index: Option<usize>,
}

impl core::fmt::Debug for Chart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chart")
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("hovered_index", &self.hovered_index)
            .finish_non_exhaustive()
    }
}

impl Chart {
    /// Creates a chart of `kind` from a complete configuration.
    pub fn new(kind: ChartKind, options: ChartOptions) -> Self {
        let mut chart = Self {
            kind,
            options: ChartOptions::default(),
            theme: Theme::default(),
            geometry: Geometry::default(),
            state: Vec::new(),
            hits: HitRegistry::new(),
            tooltip: Tooltip::new(),
            spinner: Spinner::new(),
            hovered_index: None,
        };
        chart.set_options(options);
        chart
    }

    /// The chart kind.
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The current configuration.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The latest derived geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Per-series render state, parallel to the configured series.
    pub fn series_state(&self) -> &[SeriesState] {
        &self.state
    }

    /// The tooltip state.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Replaces the whole configuration and recomputes derived state.
    ///
    /// Geometry is recomputed only when a geometry-relevant field changed.
    /// Visibility toggles survive for series that keep their name; new
    /// series start visible.
    pub fn set_options(&mut self, mut options: ChartOptions) {
        // The kind implies its layout flags.
        match self.kind {
            ChartKind::Line => {}
            ChartKind::Area | ChartKind::Bar => options.overlay = true,
            ChartKind::TimeSeries => options.time_series = true,
        }

        let state: Vec<SeriesState> = options
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let visible = self
                    .options
                    .series
                    .iter()
                    .position(|prev| prev.name == series.name)
                    .and_then(|prev| self.state.get(prev))
                    .map_or(true, |prev| prev.visible);
                SeriesState {
                    visible,
                    hovered: false,
                    color: series_color(&options.colors, i),
                }
            })
            .collect();

        let invalidated = options.invalidates_geometry(&self.options);
        if options.loading && !self.spinner.is_active() {
            self.spinner.start();
        } else if !options.loading {
            self.spinner.stop();
        }

        let state_changed = state.len() != self.state.len();
        self.state = state;
        self.options = options;
        self.hovered_index = None;
        if invalidated || state_changed || self.geometry.is_empty() {
            self.recompute_geometry();
        }
    }

    /// Marks the series named `name` as emphasized (all others plain).
    ///
    /// Returns `true` when the emphasis set changed and a repaint is due.
    pub fn highlight_series(&mut self, name: &str) -> bool {
        let mut changed = false;
        for (series, state) in self.options.series.iter().zip(&mut self.state) {
            let hovered = series.name == name;
            changed |= state.hovered != hovered;
            state.hovered = hovered;
        }
        changed
    }

    /// Flips the visibility of series `index`.
    ///
    /// In overlay mode the stack changes shape, so geometry is recomputed;
    /// otherwise the existing geometry stays valid.
    pub fn toggle_series(&mut self, index: usize) {
        let Some(state) = self.state.get_mut(index) else {
            return;
        };
        state.visible = !state.visible;
        if self.options.strategy().stacked() {
            self.recompute_geometry();
        }
    }

    /// Advances animations by `dt_ms`. Returns `true` while another frame
    /// should be scheduled.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.spinner.advance(dt_ms)
    }

    /// Resizes the chart and recomputes geometry for the new plot area.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if self.options.width == width && self.options.height == height {
            return;
        }
        self.options.width = width;
        self.options.height = height;
        self.recompute_geometry();
    }

    fn recompute_geometry(&mut self) {
        let visible: Vec<bool> = self.state.iter().map(|s| s.visible).collect();
        let input = GeometryInput {
            plot: self.plot_area(),
            labels: &self.options.labels,
            series: &self.options.series,
            visible: &visible,
            strategy: self.options.strategy(),
            grid: self.options.grid_num,
            binary_scale: self.options.kilobyte_format,
            explicit_sequence: self.options.sequence.as_deref(),
            label_align_center: self.options.label_align_center,
            span: self.options.span(),
        };
        self.geometry = compute_geometry(&input);
    }

    /// The plot rectangle implied by the current configuration.
    pub fn plot_area(&self) -> PlotArea {
        let left = PAD
            + if self.options.show_y_axis {
                Y_AXIS_WIDTH
            } else {
                0.0
            };
        let top = PAD
            + if self.options.title.is_some() || self.options.unit.is_some() {
                TITLE_HEIGHT
            } else {
                0.0
            };
        let mut bottom_reserve = X_LABEL_HEIGHT + PAD;
        if self.legend_shown() {
            bottom_reserve += self.estimated_legend_rows() as f64 * LEGEND_ROW_HEIGHT;
        }
        PlotArea {
            left,
            top,
            width: (self.options.width - left - PAD).max(0.0),
            height: (self.options.height - top - bottom_reserve).max(0.0),
        }
    }

    fn legend_shown(&self) -> bool {
        // Overlay charts carry their breakdown in the tooltip; a clickable
        // legend would invite toggles that reshape the whole stack.
        self.options.show_legend && !self.options.overlay && !self.options.series.is_empty()
    }

    fn estimated_legend_rows(&self) -> usize {
        let available = (self.options.width - 2.0 * PAD).max(1.0);
        let mut rows = 1_usize;
        let mut x = 0.0;
        for series in &self.options.series {
            let w = legend_item_width(series.name.chars().count());
            if x + w > available && x > 0.0 {
                rows += 1;
                x = 0.0;
            }
            x += w;
        }
        rows
    }

    fn has_data(&self) -> bool {
        !self.options.labels.is_empty()
            && self
                .options
                .series
                .iter()
                .any(|series| !series.values.is_empty())
    }

    fn format_value(&self, value: f64) -> String {
        if let Some(format) = &self.options.format_value {
            return format(value);
        }
        if self.options.kilobyte_format {
            return format_binary_value(value);
        }
        match &self.geometry.value_scale {
            Some(scale) => format_decimal_value(value, &scale.scale_value),
            None => format_decimal_value(
                value,
                &ScaleValue {
                    value: 1.0,
                    exponent: 0,
                },
            ),
        }
    }

    fn label_text(&self, label: &Label) -> String {
        match label {
            Label::Name(name) => name.clone(),
            Label::Stamp(ms) => format_stamp(*ms),
        }
    }

    // ---- pointer interaction ----

    /// Index of the label nearest to surface x-coordinate `x`.
    ///
    /// Evenly spaced ticks resolve arithmetically; continuous-time ticks by
    /// scanning for the first tick at or past the pointer. Overshoot clamps
    /// to the last label.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        let ticks = &self.geometry.x_ticks;
        if ticks.is_empty() {
            return None;
        }
        let last = ticks.len() - 1;
        if self.continuous_span().is_some() {
            return Some(ticks.iter().position(|&t| t >= x).unwrap_or(last));
        }
        let gap = self.geometry.x_tick_gap;
        if gap <= 0.0 {
            return Some(0);
        }
        let raw = ((x - ticks[0]) / gap).round();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the label index range first"
        )]
        let index = raw.clamp(0.0, last as f64) as usize;
        Some(index)
    }

    fn continuous_span(&self) -> Option<(i64, i64)> {
        match self.options.strategy() {
            ScaleStrategy::ContinuousTime { .. } => self.options.span().or_else(|| {
                let first = self.options.labels.first()?.stamp()?;
                let last = self.options.labels.last()?.stamp()?;
                Some((first, last))
            }),
            _ => None,
        }
    }

    /// Handles a pointer move. Returns `true` when the hover state changed
    /// and a repaint is due.
    pub fn pointer_move(&mut self, pointer: Point, overlay: &mut dyn FloatingOverlay) -> bool {
        let nearest = self.nearest_index(pointer.x);
        let mut changed = core::mem::replace(&mut self.hovered_index, nearest) != nearest;

        if self.options.active_hover {
            for i in 0..self.state.len() {
                let hovered = self.state[i].visible
                    && !self.options.series[i].disabled
                    && self.segment_hit(i, pointer);
                changed |= self.state[i].hovered != hovered;
                self.state[i].hovered = hovered;
            }
        }

        let rows = nearest.map_or_else(Vec::new, |idx| self.tooltip_rows(idx));
        if self.options.show_tooltip {
            let title = nearest
                .and_then(|idx| self.options.labels.get(idx))
                .map(|label| self.label_text(label))
                .unwrap_or_default();
            self.tooltip.update(
                overlay,
                &title,
                &rows,
                self.options.overlay,
                pointer,
                self.options.width,
                self.options.height,
            );
        }

        let event = HoverEvent {
            nearest_index: nearest,
            pointer,
            rows,
        };
        if let Some(on_hover) = self.options.on_hover.as_mut() {
            on_hover(&event);
        }
        changed
    }

    /// Handles the pointer leaving the chart. Returns `true` when a repaint
    /// is due.
    pub fn pointer_leave(&mut self, overlay: &mut dyn FloatingOverlay) -> bool {
        let mut changed = self.hovered_index.take().is_some();
        for state in &mut self.state {
            changed |= state.hovered;
            state.hovered = false;
        }
        self.tooltip.hide(overlay);
        let event = HoverEvent {
            nearest_index: None,
            pointer: Point::ZERO,
            rows: Vec::new(),
        };
        if let Some(on_hover) = self.options.on_hover.as_mut() {
            on_hover(&event);
        }
        changed
    }

    /// Handles a click. Legend and reload regions win over tooltip pinning.
    /// Returns `true` when a repaint is due.
    pub fn click(&mut self, pointer: Point, overlay: &mut dyn FloatingOverlay) -> bool {
        let actions = self.hits.dispatch(pointer);
        if actions.is_empty() {
            if self.tooltip.is_fixed() {
                self.tooltip.close(overlay);
                return true;
            }
            if self.tooltip.is_visible() {
                self.tooltip.pin();
            }
            return false;
        }
        for action in actions {
            match action {
                ChartAction::ToggleSeries(index) => self.toggle_series(index),
                ChartAction::Reload => {
                    if let Some(on_reload) = self.options.on_reload.as_mut() {
                        on_reload();
                    }
                }
            }
        }
        true
    }

    /// Closes (unpins and hides) the tooltip.
    pub fn close_tooltip(&mut self, overlay: &mut dyn FloatingOverlay) {
        self.tooltip.close(overlay);
    }

    /// Whether the pointer is within `hover_precision` of series `index`'s
    /// polyline around the pointed-at segment.
    fn segment_hit(&self, index: usize, pointer: Point) -> bool {
        let Some(series) = self.geometry.series.get(index) else {
            return false;
        };
        let ticks = &self.geometry.x_ticks;
        let precision = self.options.hover_precision;

        // The segment straddling the pointer, if its endpoints exist.
        let seg = ticks
            .windows(2)
            .position(|pair| pair[0] <= pointer.x && pointer.x <= pair[1]);
        if let Some(j) = seg
            && let (Some(y0), Some(y1)) = (series.y_pos[j], series.y_pos[j + 1])
        {
            let (x0, x1) = (ticks[j], ticks[j + 1]);
            let (dx, dy) = (x1 - x0, y1 - y0);
            // Perpendicular distance from the pointer to the segment's
            // line, compared squared to avoid the square root.
            let num = dy * (pointer.x - x0) - dx * (pointer.y - y0);
            if num * num <= precision * precision * (dx * dx + dy * dy) {
                return true;
            }
        }

        // Off the ends, or next to a gap: fall back to the nearest point.
        if let Some(idx) = self.nearest_index(pointer.x)
            && let Some(Some(y)) = series.y_pos.get(idx)
        {
            return (pointer.x - ticks[idx]).abs() <= precision
                && (pointer.y - y).abs() <= precision;
        }
        false
    }

    /// Tooltip rows for label `index`: visible, non-disabled series with a
    /// value there, sorted by descending value.
    fn tooltip_rows(&self, index: usize) -> Vec<TooltipRow> {
        let Some(label) = self.options.labels.get(index) else {
            return Vec::new();
        };
        let mut rows: Vec<TooltipRow> = self
            .options
            .series
            .iter()
            .enumerate()
            .filter(|(i, series)| {
                self.state.get(*i).is_some_and(|s| s.visible) && !series.disabled
            })
            .filter_map(|(i, series)| {
                let value = series.value_at(label)?;
                Some(TooltipRow {
                    name: series.name.clone(),
                    value,
                    text: self.format_value(value),
                    color: self.state[i].color,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(core::cmp::Ordering::Equal));
        rows
    }

    // ---- drawing ----

    /// Runs the full draw pipeline onto `surface`.
    pub fn draw(&mut self, surface: &mut dyn DrawingSurface) {
        self.hits.clear();
        surface.clear();

        self.draw_title(surface);
        self.draw_axes(surface);
        self.draw_grid(surface);
        self.draw_x_labels(surface);
        self.draw_legend(surface);

        if self.has_data() {
            match self.kind {
                ChartKind::Line => self.draw_lines(surface),
                ChartKind::Area => self.draw_areas(surface),
                ChartKind::Bar => self.draw_bars(surface),
                ChartKind::TimeSeries => {
                    if self.options.overlay {
                        self.draw_areas(surface);
                    } else {
                        self.draw_lines(surface);
                    }
                }
            }
            self.draw_hover_markers(surface);
        } else {
            self.draw_empty_state(surface);
        }

        if self.spinner.is_active() {
            let plot = self.plot_area();
            let center = Point::new(plot.left + plot.width * 0.5, plot.top + plot.height * 0.5);
            self.spinner
                .draw(surface, center, SPINNER_RADIUS, self.theme.spinner);
        }
    }

    fn draw_title(&mut self, surface: &mut dyn DrawingSurface) {
        let Some(title) = self.options.title.clone().or_else(|| self.options.unit.clone()) else {
            return;
        };
        surface.text(
            &title,
            Point::new(PAD, PAD),
            self.theme.text,
            TITLE_FONT_SIZE,
            TextAnchor::Start,
            TextBaseline::Top,
        );
        if self.options.title.is_some()
            && let Some(unit) = self.options.unit.clone()
        {
            let x = PAD + surface.measure_text(&title, TITLE_FONT_SIZE) + 6.0;
            surface.text(
                &unit,
                Point::new(x, PAD),
                self.theme.subtle_text,
                LABEL_FONT_SIZE,
                TextAnchor::Start,
                TextBaseline::Top,
            );
        }
    }

    fn draw_axes(&mut self, surface: &mut dyn DrawingSurface) {
        let plot = self.plot_area();
        surface.line(
            Point::new(plot.left, plot.bottom()),
            Point::new(plot.right(), plot.bottom()),
            self.theme.axis,
            1.0,
        );
        if self.options.show_y_axis {
            surface.line(
                Point::new(plot.left, plot.top),
                Point::new(plot.left, plot.bottom()),
                self.theme.axis,
                1.0,
            );
        }
    }

    fn draw_grid(&mut self, surface: &mut dyn DrawingSurface) {
        let Some(scale) = self.geometry.value_scale.clone() else {
            return;
        };
        let plot = self.plot_area();
        if scale.max_value <= 0.0 || plot.height <= 0.0 {
            return;
        }
        let unit_height = plot.height / scale.max_value;
        for &tick in &scale.sequence {
            let y = plot.bottom() - unit_height * tick;
            if tick > 0.0 {
                surface.dashed_line(
                    Point::new(plot.left, y),
                    Point::new(plot.right(), y),
                    self.theme.grid,
                    1.0,
                    4.0,
                );
            }
            if self.options.show_y_axis {
                surface.text(
                    &self.format_value(tick),
                    Point::new(plot.left - 6.0, y),
                    self.theme.subtle_text,
                    LABEL_FONT_SIZE,
                    TextAnchor::End,
                    TextBaseline::Middle,
                );
            }
        }
    }

    fn draw_x_labels(&mut self, surface: &mut dyn DrawingSurface) {
        let plot = self.plot_area();
        let y = plot.bottom() + 6.0;
        let labels = &self.options.labels;
        if labels.is_empty() || self.options.label_scale == 0 {
            return;
        }

        let stamps: Option<Vec<i64>> = labels.iter().map(Label::stamp).collect();
        if let Some(stamps) = stamps {
            for (index, text) in simplify_stamp_labels(&stamps, self.options.label_scale) {
                let Some(&x) = self.geometry.x_ticks.get(index) else {
                    continue;
                };
                surface.text(
                    &text,
                    Point::new(x, y),
                    self.theme.subtle_text,
                    LABEL_FONT_SIZE,
                    TextAnchor::Middle,
                    TextBaseline::Top,
                );
            }
            return;
        }

        let stride = labels.len().div_ceil(self.options.label_scale).max(1);
        for (index, label) in labels.iter().enumerate().step_by(stride) {
            let Some(&x) = self.geometry.x_ticks.get(index) else {
                continue;
            };
            surface.text(
                &self.label_text(label),
                Point::new(x, y),
                self.theme.subtle_text,
                LABEL_FONT_SIZE,
                TextAnchor::Middle,
                TextBaseline::Top,
            );
        }
    }

    fn draw_legend(&mut self, surface: &mut dyn DrawingSurface) {
        if !self.legend_shown() {
            return;
        }
        let plot = self.plot_area();
        let available_right = self.options.width - PAD;
        let mut x = plot.left;
        let mut y = plot.bottom() + X_LABEL_HEIGHT;

        for (i, series) in self.options.series.iter().enumerate() {
            let text_width = surface.measure_text(&series.name, LABEL_FONT_SIZE);
            let item_width = LEGEND_SWATCH + 4.0 + text_width + 12.0;
            if x + item_width > available_right && x > plot.left {
                x = plot.left;
                y += LEGEND_ROW_HEIGHT;
            }

            let visible = self.state[i].visible;
            let color = if visible {
                self.state[i].color
            } else {
                self.state[i].color.with_alpha(0.3)
            };
            let swatch = Rect::new(x, y, x + LEGEND_SWATCH, y + LEGEND_SWATCH);
            surface.rect(swatch, color);
            surface.text(
                &series.name,
                Point::new(x + LEGEND_SWATCH + 4.0, y + LEGEND_SWATCH * 0.5),
                if visible {
                    self.theme.text
                } else {
                    self.theme.subtle_text
                },
                LABEL_FONT_SIZE,
                TextAnchor::Start,
                TextBaseline::Middle,
            );
            self.hits.add(
                Rect::new(x, y - 4.0, x + item_width, y + LEGEND_ROW_HEIGHT - 4.0),
                ChartAction::ToggleSeries(i),
            );
            x += item_width;
        }
    }

    fn draw_empty_state(&mut self, surface: &mut dyn DrawingSurface) {
        let plot = self.plot_area();
        let center = Point::new(plot.left + plot.width * 0.5, plot.top + plot.height * 0.5);
        surface.text(
            "No data",
            center,
            self.theme.subtle_text,
            TITLE_FONT_SIZE,
            TextAnchor::Middle,
            TextBaseline::Middle,
        );
        if self.options.on_reload.is_some() {
            let at = Point::new(center.x, center.y + TITLE_HEIGHT);
            surface.text(
                "Reload",
                at,
                self.theme.accent,
                LABEL_FONT_SIZE,
                TextAnchor::Middle,
                TextBaseline::Middle,
            );
            let half_width = surface.measure_text("Reload", LABEL_FONT_SIZE) * 0.5 + 4.0;
            self.hits.add(
                Rect::new(
                    at.x - half_width,
                    at.y - LABEL_FONT_SIZE,
                    at.x + half_width,
                    at.y + LABEL_FONT_SIZE,
                ),
                ChartAction::Reload,
            );
        }
    }

    fn draw_lines(&mut self, surface: &mut dyn DrawingSurface) {
        for (i, geometry) in self.geometry.series.iter().enumerate() {
            let Some(state) = self.state.get(i) else {
                continue;
            };
            if !state.visible {
                continue;
            }
            let width = if state.hovered {
                HOVERED_LINE_WIDTH
            } else {
                LINE_WIDTH
            };
            stroke_series(
                surface,
                &self.geometry.x_ticks,
                &geometry.y_pos,
                state.color,
                width,
            );
        }
    }

    fn draw_areas(&mut self, surface: &mut dyn DrawingSurface) {
        let mut topmost_visible = None;
        for (i, geometry) in self.geometry.series.iter().enumerate() {
            let Some(state) = self.state.get(i) else {
                continue;
            };
            if !state.visible {
                continue;
            }
            topmost_visible = Some(i);
            let Some(base) = &geometry.base_pos else {
                continue;
            };
            let lower: Vec<Option<f64>> = base.iter().copied().map(Some).collect();
            fill_between(
                surface,
                &self.geometry.x_ticks,
                &geometry.y_pos,
                &lower,
                state.color,
                AREA_FILL_ALPHA,
            );
        }
        // Stroking every band's top would double every interior boundary;
        // only the stack's outline is stroked.
        if let Some(i) = topmost_visible {
            stroke_series(
                surface,
                &self.geometry.x_ticks,
                &self.geometry.series[i].y_pos,
                self.state[i].color,
                LINE_WIDTH,
            );
        }
    }

    fn draw_bars(&mut self, surface: &mut dyn DrawingSurface) {
        let half = self.geometry.x_tick_gap * BAR_WIDTH_RATIO * 0.5;
        for (i, geometry) in self.geometry.series.iter().enumerate() {
            let Some(state) = self.state.get(i) else {
                continue;
            };
            if !state.visible {
                continue;
            }
            let Some(base) = &geometry.base_pos else {
                continue;
            };
            for (j, y) in geometry.y_pos.iter().enumerate() {
                let Some(top) = *y else {
                    continue;
                };
                let x = self.geometry.x_ticks[j];
                surface.rect(Rect::new(x - half, top, x + half, base[j]), state.color);
            }
        }
    }

    fn draw_hover_markers(&mut self, surface: &mut dyn DrawingSurface) {
        if !self.options.active_hover || self.kind == ChartKind::Bar {
            return;
        }
        let Some(index) = self.hovered_index else {
            return;
        };
        for (i, geometry) in self.geometry.series.iter().enumerate() {
            let Some(state) = self.state.get(i) else {
                continue;
            };
            if !state.visible || self.options.series[i].disabled {
                continue;
            }
            if let Some(Some(y)) = geometry.y_pos.get(index) {
                hover_marker(
                    surface,
                    Point::new(self.geometry.x_ticks[index], *y),
                    state.color,
                );
            }
        }
    }
}

/// Heuristic legend item width used for row estimation before a surface is
/// available; mirrors the default `measure_text` glyph width.
fn legend_item_width(name_chars: usize) -> f64 {
    LEGEND_SWATCH + 4.0 + name_chars as f64 * LABEL_FONT_SIZE * 0.6 + 12.0
}
