// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-module tests: configuration through geometry through drawing.

extern crate std;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Point;
use tchart_core::{Label, SeriesSpec};
use tchart_surface::{DrawOp, RecordingSurface};

use crate::chart::{Chart, ChartKind};
use crate::config::ChartOptions;
use crate::facade::TChart;
use crate::tooltip::RecordingOverlay;

fn plain_options() -> ChartOptions {
    let mut options = ChartOptions::new().with_size(416.0, 236.0);
    options.show_y_axis = false;
    options.show_legend = false;
    options
}

fn one_series_options() -> ChartOptions {
    plain_options()
        .with_labels(["1", "2", "3", "4", "5"])
        .with_series(
            SeriesSpec::new("cpu")
                .with_value("1", 10.0)
                .with_value("2", 20.0)
                .with_value("3", 30.0)
                .with_value("4", 40.0)
                .with_value("5", 18.0),
        )
}

#[test]
fn decimal_scale_rounds_to_nice_gridlines() {
    let chart = Chart::new(ChartKind::Line, one_series_options());

    let scale = chart.geometry().value_scale.as_ref().expect("scale");
    assert_eq!(scale.sequence, [0.0, 10.0, 20.0, 30.0, 40.0]);
    assert_eq!(scale.max_value, 40.0);
}

#[test]
fn binary_scale_covers_the_data_maximum() {
    let options = plain_options()
        .with_labels(["a", "b"])
        .with_series(
            SeriesSpec::new("bytes")
                .with_value("a", 0.0)
                .with_value("b", 1000.0),
        )
        .with_kilobyte_format(true);
    let chart = Chart::new(ChartKind::Line, options);

    let scale = chart.geometry().value_scale.as_ref().expect("scale");
    assert_eq!(scale.scale_value.step(), 256.0);
    assert!(scale.max_value >= 1000.0);
}

#[test]
fn area_charts_stack_series_values() {
    let options = plain_options()
        .with_labels(["t"])
        .with_series(SeriesSpec::new("a").with_value("t", 5.0))
        .with_series(SeriesSpec::new("b").with_value("t", 7.0));
    let chart = Chart::new(ChartKind::Area, options);

    // The kind forces overlay on, so the scale sees the combined 12.
    assert!(chart.options().overlay);
    let scale = chart.geometry().value_scale.as_ref().expect("scale");
    assert!(scale.max_value >= 12.0);

    let plot = chart.plot_area();
    let unit = plot.height / scale.max_value;
    let expected = plot.bottom() - (unit * 12.0).round();
    assert_eq!(chart.geometry().series[1].y_pos[0], Some(expected));
}

#[test]
fn gaps_render_as_disjoint_strokes() {
    let options = plain_options()
        .with_labels(["1", "2", "3", "4", "5"])
        .with_series(
            SeriesSpec::new("cpu")
                .with_value("1", 10.0)
                .with_value("2", 20.0)
                .with_value("4", 40.0)
                .with_value("5", 18.0),
        );
    let mut chart = Chart::new(ChartKind::Line, options);

    assert_eq!(chart.geometry().series[0].y_pos[2], None);

    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);
    let runs = surface.stroke_runs();
    assert_eq!(runs.len(), 2, "one stroke per contiguous run");
    assert_eq!(runs[0].len(), 2);
    assert_eq!(runs[1].len(), 2);
}

#[test]
fn hover_within_precision_emphasizes_the_series() {
    let mut chart = Chart::new(ChartKind::Line, one_series_options());
    let mut overlay = RecordingOverlay::default();

    // Midpoint of the segment between the first two points.
    let ticks = chart.geometry().x_ticks.clone();
    let y0 = chart.geometry().series[0].y_pos[0].expect("point");
    let y1 = chart.geometry().series[0].y_pos[1].expect("point");
    let mid = Point::new((ticks[0] + ticks[1]) * 0.5, (y0 + y1) * 0.5);

    let repaint = chart.pointer_move(mid, &mut overlay);
    assert!(repaint);
    assert!(chart.series_state()[0].hovered);

    let far = Point::new(mid.x, mid.y - 50.0);
    let repaint = chart.pointer_move(far, &mut overlay);
    assert!(repaint);
    assert!(!chart.series_state()[0].hovered);

    // Re-sending the same position changes nothing.
    assert!(!chart.pointer_move(far, &mut overlay));
}

#[test]
fn identical_reconfiguration_is_idempotent() {
    let mut chart = Chart::new(ChartKind::Line, one_series_options());
    let first = chart.geometry().clone();
    chart.set_options(one_series_options());
    assert_eq!(*chart.geometry(), first);
}

#[test]
fn tooltip_rows_sort_by_descending_value() {
    let options = plain_options()
        .with_labels(["t"])
        .with_series(SeriesSpec::new("low").with_value("t", 1.0))
        .with_series(SeriesSpec::new("high").with_value("t", 9.0));
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut overlay = RecordingOverlay::default();

    let ticks = chart.geometry().x_ticks.clone();
    chart.pointer_move(Point::new(ticks[0], 50.0), &mut overlay);

    let (_, rows, _) = overlay.content.as_ref().expect("content");
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["high", "low"]);
}

#[test]
fn clicking_the_plot_pins_the_tooltip() {
    let mut chart = Chart::new(ChartKind::Line, one_series_options());
    let mut overlay = RecordingOverlay::default();
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    let ticks = chart.geometry().x_ticks.clone();
    let at = Point::new(ticks[2], 100.0);
    chart.pointer_move(at, &mut overlay);
    assert!(chart.tooltip().is_visible());

    chart.click(at, &mut overlay);
    assert!(chart.tooltip().is_fixed());
    let pinned_at = overlay.shown_at;

    // Moves no longer reposition the tooltip.
    chart.pointer_move(Point::new(ticks[4], 100.0), &mut overlay);
    assert_eq!(overlay.shown_at, pinned_at);

    // A second plot click closes it again.
    chart.click(at, &mut overlay);
    assert!(!chart.tooltip().is_fixed());
    assert!(!overlay.shown);
}

#[test]
fn legend_click_toggles_a_series() {
    let mut options = one_series_options().with_series(
        SeriesSpec::new("mem")
            .with_value("1", 5.0)
            .with_value("2", 4.0)
            .with_value("3", 2.0),
    );
    options.show_legend = true;
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut overlay = RecordingOverlay::default();
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    // The first legend item starts at the plot's left edge, one label row
    // below the axis.
    let plot = chart.plot_area();
    let swatch = Point::new(plot.left + 4.0, plot.bottom() + 24.0);
    let repaint = chart.click(swatch, &mut overlay);

    assert!(repaint);
    assert!(!chart.series_state()[0].visible);
    assert!(chart.series_state()[1].visible);

    // Hidden series draw nothing.
    surface.reset();
    chart.draw(&mut surface);
    let runs = surface.stroke_runs();
    assert_eq!(runs.len(), 1);
}

#[test]
fn single_series_legend_is_drawn_when_enabled() {
    let mut options = one_series_options();
    options.show_legend = true;
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    assert!(surface.has_text("cpu"));

    // The lone legend item still toggles its series.
    let plot = chart.plot_area();
    let mut overlay = RecordingOverlay::default();
    chart.click(
        Point::new(plot.left + 4.0, plot.bottom() + 24.0),
        &mut overlay,
    );
    assert!(!chart.series_state()[0].visible);
}

#[test]
fn highlight_series_emphasizes_by_name() {
    let mut chart = Chart::new(ChartKind::Line, one_series_options());

    assert!(chart.highlight_series("cpu"), "emphasis change repaints");
    assert!(chart.series_state()[0].hovered);

    // The same name again changes nothing.
    assert!(!chart.highlight_series("cpu"));

    // An unknown name clears the emphasis.
    assert!(chart.highlight_series("gpu"));
    assert!(!chart.series_state()[0].hovered);
}

#[test]
fn custom_formatter_overrides_value_text() {
    let mut options = one_series_options();
    options.show_y_axis = true;
    options.format_value = Some(alloc::boxed::Box::new(|v| alloc::format!("{v} units")));
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut overlay = RecordingOverlay::default();
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    // Gridline labels go through the custom formatter.
    assert!(surface.has_text("40 units"));

    // So do tooltip rows.
    let ticks = chart.geometry().x_ticks.clone();
    chart.pointer_move(Point::new(ticks[0], 100.0), &mut overlay);
    let (_, rows, _) = overlay.content.as_ref().expect("content");
    assert_eq!(rows[0].text, "10 units");
}

#[test]
fn overlay_toggle_reshapes_the_stack() {
    let options = plain_options()
        .with_labels(["t"])
        .with_series(SeriesSpec::new("a").with_value("t", 5.0))
        .with_series(SeriesSpec::new("b").with_value("t", 7.0));
    let mut chart = Chart::new(ChartKind::Area, options);

    chart.toggle_series(0);
    let scale = chart.geometry().value_scale.as_ref().expect("scale");
    assert!(scale.max_value < 12.0, "hidden series leaves the stack");
    assert_eq!(chart.geometry().series[0].y_pos[0], None);
}

#[test]
fn empty_data_draws_the_empty_state_with_reload() {
    let reloads = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&reloads);
    let mut options = plain_options();
    options.on_reload = Some(alloc::boxed::Box::new(move || {
        counter.set(counter.get() + 1);
    }));
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut overlay = RecordingOverlay::default();
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    assert!(surface.has_text("No data"));
    assert!(surface.has_text("Reload"));

    let plot = chart.plot_area();
    let reload_at = Point::new(
        plot.left + plot.width * 0.5,
        plot.top + plot.height * 0.5 + 24.0,
    );
    chart.click(reload_at, &mut overlay);
    assert_eq!(reloads.get(), 1);
}

#[test]
fn loading_overlays_a_spinner_on_the_stale_body() {
    let mut chart = Chart::new(ChartKind::Line, one_series_options().with_loading(true));
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    // The stale body is still there, with spinner spokes on top.
    assert_eq!(surface.stroke_runs().len(), 1);
    let spokes = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { .. }))
        .count();
    assert!(spokes >= 12, "expected spinner spokes, got {spokes}");

    // The spinner animates for a while, then gives up.
    assert!(chart.advance(16.0));
    assert!(!chart.advance(6_000.0));
}

#[test]
fn time_series_resolves_the_nearest_stamp_by_scan() {
    let labels: Vec<Label> = [0_i64, 250, 1_000].map(Label::Stamp).into_iter().collect();
    let mut options = plain_options().with_series(
        SeriesSpec::new("s")
            .with_value(0_i64, 1.0)
            .with_value(250_i64, 2.0)
            .with_value(1_000_i64, 3.0),
    );
    options.labels = labels;
    let chart = Chart::new(ChartKind::TimeSeries, options);

    assert!(chart.options().time_series);
    let ticks = chart.geometry().x_ticks.clone();
    assert_eq!(chart.nearest_index(ticks[1] - 1.0), Some(1));
    assert_eq!(chart.nearest_index(ticks[1] + 1.0), Some(2));
    assert_eq!(chart.nearest_index(ticks[2] + 100.0), Some(2));
}

#[test]
fn bar_charts_draw_stacked_rectangles() {
    let options = plain_options()
        .with_labels(["a", "b"])
        .with_series(
            SeriesSpec::new("x")
                .with_value("a", 2.0)
                .with_value("b", 3.0),
        )
        .with_series(
            SeriesSpec::new("y")
                .with_value("a", 1.0)
                .with_value("b", 4.0),
        );
    let mut chart = Chart::new(ChartKind::Bar, options);
    let mut surface = RecordingSurface::new(416.0, 236.0);
    chart.draw(&mut surface);

    // Two series times two labels.
    assert_eq!(surface.rect_count(), 4);
    let gap = chart.geometry().x_tick_gap;
    let widths: Vec<f64> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { rect, .. } => Some(rect.width()),
            _ => None,
        })
        .collect();
    for width in widths {
        assert!((width - gap * 0.8).abs() < 1e-9);
    }
}

#[test]
fn facade_without_a_host_is_permanently_inert() {
    let mut facade: TChart<RecordingSurface, RecordingOverlay> =
        TChart::new(None, RecordingOverlay::default());

    facade.set_kind(ChartKind::Line, one_series_options());
    facade.draw();
    facade.pointer_move(Point::new(10.0, 10.0));
    facade.set_size(100.0, 100.0, 1.0);

    assert!(facade.is_inert());
    assert!(facade.chart().is_none());
    assert!(!facade.tick(16.0));
}

#[test]
fn facade_coalesces_draw_requests() {
    let host = RecordingSurface::new(416.0, 236.0);
    let mut facade = TChart::new(Some(host), RecordingOverlay::default());
    facade.set_kind(ChartKind::Line, one_series_options());

    facade.draw();
    facade.draw();
    facade.draw();

    assert!(facade.tick(16.0), "one coalesced paint");
    assert!(!facade.tick(16.0), "nothing pending after the paint");

    let clears = facade
        .host()
        .expect("host")
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Clear))
        .count();
    assert_eq!(clears, 1);
}

#[test]
fn facade_rebuilds_only_on_kind_change() {
    let host = RecordingSurface::new(416.0, 236.0);
    let mut facade = TChart::new(Some(host), RecordingOverlay::default());

    facade.set_kind(ChartKind::Line, one_series_options());
    assert_eq!(facade.chart().expect("chart").kind(), ChartKind::Line);

    // Same kind: reconfigured in place, toggles survive.
    let ticks = facade.chart().expect("chart").geometry().x_ticks.clone();
    assert_eq!(ticks.len(), 5);
    facade.set_kind(ChartKind::Line, one_series_options().with_title("cpu"));
    assert_eq!(
        facade.chart().expect("chart").options().title.as_deref(),
        Some("cpu")
    );

    facade.set_kind(ChartKind::Bar, one_series_options());
    assert_eq!(facade.chart().expect("chart").kind(), ChartKind::Bar);
}

#[test]
fn facade_resize_recomputes_geometry() {
    let host = RecordingSurface::new(416.0, 236.0);
    let mut facade = TChart::new(Some(host), RecordingOverlay::default());
    facade.set_kind(ChartKind::Line, one_series_options());
    let before = facade.chart().expect("chart").geometry().x_tick_gap;

    facade.set_size(816.0, 236.0, 2.0);

    let after = facade.chart().expect("chart").geometry().x_tick_gap;
    assert!(after > before);
    assert_eq!(facade.host().expect("host").width(), 816.0);
}

#[test]
fn hover_events_fire_on_move_and_leave() {
    let seen = Rc::new(Cell::new((0_u32, false)));
    let sink = Rc::clone(&seen);
    let mut options = one_series_options();
    options.on_hover = Some(alloc::boxed::Box::new(move |event| {
        let (count, _) = sink.get();
        sink.set((count + 1, event.nearest_index.is_some()));
    }));
    let mut chart = Chart::new(ChartKind::Line, options);
    let mut overlay = RecordingOverlay::default();

    let ticks = chart.geometry().x_ticks.clone();
    chart.pointer_move(Point::new(ticks[1], 60.0), &mut overlay);
    assert_eq!(seen.get(), (1, true));

    chart.pointer_leave(&mut overlay);
    assert_eq!(seen.get(), (2, false));
}
