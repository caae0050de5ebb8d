// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for the tchart engine.
//!
//! Every chart is drawn through the recording surface and replayed into
//! inline SVG, so the report exercises exactly the code path hosts use.

mod html;
mod svg;

use kurbo::Point;
use tchart_charts::{Chart, ChartKind, ChartOptions, RecordingOverlay, TChart};
use tchart_core::SeriesSpec;
use tchart_surface::RecordingSurface;

use crate::html::Section;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;

fn main() {
    let sections = vec![
        line_demo(),
        hover_demo(),
        area_demo(),
        bar_demo(),
        time_series_demo(),
        binary_scale_demo(),
        empty_state_demo(),
    ];

    let report = html::render_report("tchart demo", &sections);
    std::fs::write("tchart_demo.html", report).expect("write tchart_demo.html");
    println!("wrote tchart_demo.html");
}

fn render(mut chart: Chart) -> String {
    let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
    chart.draw(&mut surface);
    svg::ops_to_svg(surface.ops(), WIDTH, HEIGHT)
}

fn weekday_labels() -> [&'static str; 7] {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
}

fn line_demo() -> Section {
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Request rate")
        .with_unit("req/s")
        .with_labels(weekday_labels())
        .with_series(
            SeriesSpec::new("api")
                .with_value("Mon", 120.0)
                .with_value("Tue", 180.0)
                .with_value("Wed", 90.0)
                .with_value("Thu", 240.0)
                .with_value("Fri", 310.0)
                .with_value("Sat", 70.0)
                .with_value("Sun", 60.0),
        )
        .with_series(
            SeriesSpec::new("web")
                .with_value("Mon", 80.0)
                .with_value("Tue", 95.0)
                // Wed is a deliberate gap.
                .with_value("Thu", 130.0)
                .with_value("Fri", 150.0)
                .with_value("Sat", 40.0)
                .with_value("Sun", 35.0),
        );
    Section {
        title: String::from("Line chart with a gap"),
        svg: render(Chart::new(ChartKind::Line, options)),
    }
}

fn hover_demo() -> Section {
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Hover emphasis")
        .with_labels(weekday_labels())
        .with_series(
            SeriesSpec::new("cpu")
                .with_value("Mon", 35.0)
                .with_value("Tue", 52.0)
                .with_value("Wed", 47.0)
                .with_value("Thu", 64.0)
                .with_value("Fri", 58.0)
                .with_value("Sat", 22.0)
                .with_value("Sun", 18.0),
        );
    let mut chart = Chart::new(ChartKind::Line, options);

    // Drive a pointer move through the facade-visible path so the rendered
    // frame carries hover markers and the emphasized stroke.
    let mut overlay = RecordingOverlay::default();
    let ticks = chart.geometry().x_ticks.to_vec();
    let y = chart.geometry().series[0].y_pos[3].unwrap_or(HEIGHT * 0.5);
    chart.pointer_move(Point::new(ticks[3], y), &mut overlay);

    let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
    chart.draw(&mut surface);
    Section {
        title: String::from("Hovered line with markers"),
        svg: svg::ops_to_svg(surface.ops(), WIDTH, HEIGHT),
    }
}

fn area_demo() -> Section {
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Memory by pool")
        .with_labels(weekday_labels())
        .with_series(series_ramp("heap", &[30.0, 34.0, 38.0, 36.0, 44.0, 41.0, 39.0]))
        .with_series(series_ramp("cache", &[12.0, 15.0, 11.0, 18.0, 22.0, 19.0, 16.0]))
        .with_series(series_ramp("stack", &[5.0, 6.0, 5.0, 7.0, 8.0, 6.0, 6.0]));
    Section {
        title: String::from("Stacked area chart"),
        svg: render(Chart::new(ChartKind::Area, options)),
    }
}

fn bar_demo() -> Section {
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Deploys per day")
        .with_labels(weekday_labels())
        .with_series(series_ramp("staging", &[4.0, 6.0, 3.0, 7.0, 5.0, 1.0, 0.0]))
        .with_series(series_ramp("production", &[1.0, 2.0, 1.0, 3.0, 4.0, 0.0, 0.0]));
    Section {
        title: String::from("Stacked bar chart"),
        svg: render(Chart::new(ChartKind::Bar, options)),
    }
}

fn time_series_demo() -> Section {
    // Unevenly spaced samples over two days; the x positions interpolate.
    let day = 24 * 60 * 60 * 1_000_i64;
    let stamps = [0, day / 6, day / 2, day, day + day / 3, 2 * day];
    let values = [40.0, 65.0, 55.0, 90.0, 72.0, 48.0];
    let mut series = SeriesSpec::new("throughput");
    for (&stamp, &value) in stamps.iter().zip(&values) {
        series = series.with_value(stamp, value);
    }
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Throughput over time")
        .with_labels(stamps)
        .with_series(series)
        .with_span(0, 2 * day);
    Section {
        title: String::from("Continuous time series"),
        svg: render(Chart::new(ChartKind::TimeSeries, options)),
    }
}

fn binary_scale_demo() -> Section {
    let options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("Network traffic")
        .with_labels(weekday_labels())
        .with_series(series_ramp(
            "rx",
            &[
                200_000.0,
                1_500_000.0,
                800_000.0,
                2_400_000.0,
                3_100_000.0,
                600_000.0,
                400_000.0,
            ],
        ))
        .with_kilobyte_format(true);
    Section {
        title: String::from("Binary (byte) value scale"),
        svg: render(Chart::new(ChartKind::Line, options)),
    }
}

fn empty_state_demo() -> Section {
    // Rendered through the facade: request, then tick to paint.
    let host = RecordingSurface::new(WIDTH, HEIGHT);
    let mut facade = TChart::new(Some(host), RecordingOverlay::default());
    let mut options = ChartOptions::new()
        .with_size(WIDTH, HEIGHT)
        .with_title("No data yet");
    options.on_reload = Some(Box::new(|| {}));
    facade.set_kind(ChartKind::Line, options);
    facade.tick(16.0);

    let svg = facade
        .host()
        .map(|host| svg::ops_to_svg(host.ops(), WIDTH, HEIGHT))
        .unwrap_or_default();
    Section {
        title: String::from("Empty state with reload"),
        svg,
    }
}

fn series_ramp(name: &str, values: &[f64]) -> SeriesSpec {
    let mut series = SeriesSpec::new(name);
    for (label, &value) in weekday_labels().iter().zip(values) {
        series = series.with_value(*label, value);
    }
    series
}
