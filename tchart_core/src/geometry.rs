// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label/series to pixel-coordinate conversion.
//!
//! [`compute_geometry`] is a pure function of its input: it derives the value
//! scale, the x tick positions, and per-series y pixel positions in one
//! synchronous pass. The caller's series descriptions are never mutated; the
//! result is held by the orchestrator alongside them and replaced wholesale
//! whenever the configuration changes.
//!
//! Three layout strategies exist:
//! - **Standard**: one independent y position per series point.
//! - **Overlay**: visible series stack cumulatively per label, so each
//!   series' band sits on top of the previous one.
//! - **Continuous time**: x positions are interpolated from timestamp labels
//!   over a `[min, max]` span instead of being evenly index-spaced, so real
//!   time gaps render proportionally. Y follows either of the above.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::data::{Label, SeriesSpec};
use crate::scale::ValueScale;

/// The plot rectangle in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PlotArea {
    /// Returns the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns the bottom edge (the value-zero baseline).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// How labels and values map to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleStrategy {
    /// Index-spaced x, independent y per series.
    Standard,
    /// Index-spaced x, cumulative stacked y.
    Overlay,
    /// Timestamp-interpolated x; `stacked` selects the y computation.
    ContinuousTime {
        /// Stack series cumulatively as in [`ScaleStrategy::Overlay`].
        stacked: bool,
    },
}

impl ScaleStrategy {
    /// Derives the strategy from the two independent configuration flags.
    pub fn from_flags(overlay: bool, time_series: bool) -> Self {
        if time_series {
            Self::ContinuousTime { stacked: overlay }
        } else if overlay {
            Self::Overlay
        } else {
            Self::Standard
        }
    }

    /// Whether y positions accumulate across series.
    pub fn stacked(&self) -> bool {
        match self {
            Self::Standard => false,
            Self::Overlay => true,
            Self::ContinuousTime { stacked } => *stacked,
        }
    }
}

/// Everything [`compute_geometry`] needs, borrowed from the configuration.
#[derive(Clone, Copy, Debug)]
pub struct GeometryInput<'a> {
    /// The plot rectangle.
    pub plot: PlotArea,
    /// Ordered label sequence.
    pub labels: &'a [Label],
    /// The caller's series descriptions.
    pub series: &'a [SeriesSpec],
    /// Per-series visibility (legend toggles); an empty slice means all
    /// series are visible.
    pub visible: &'a [bool],
    /// Layout strategy.
    pub strategy: ScaleStrategy,
    /// Number of horizontal gridlines.
    pub grid: usize,
    /// Use the binary nice-number variant for byte-like values.
    pub binary_scale: bool,
    /// Caller-supplied tick sequence (top-down), overriding the nice-number
    /// algorithm when it covers the data maximum.
    pub explicit_sequence: Option<&'a [f64]>,
    /// Shift ticks by half a gap so labels sit between gridlines.
    pub label_align_center: bool,
    /// Timestamp span for continuous time; defaults to first/last label.
    pub span: Option<(i64, i64)>,
}

/// Pixel geometry for one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesGeometry {
    /// Y pixel per label index; `None` exactly where the series has a gap.
    pub y_pos: Vec<Option<f64>>,
    /// In stacked layouts, the pixel y of the band bottom per label (the top
    /// of the stack below this series). `None` for independent layouts.
    pub base_pos: Option<Vec<f64>>,
}

/// The complete derived geometry for one configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// The value scale, absent for degenerate input (no grid is drawn).
    pub value_scale: Option<ValueScale>,
    /// One x pixel position per label.
    pub x_ticks: Vec<f64>,
    /// Nominal spacing between ticks (`width / labels.len()`).
    pub x_tick_gap: f64,
    /// Per-series y geometry, parallel to the input series.
    pub series: Vec<SeriesGeometry>,
}

impl Geometry {
    /// Whether there is anything to draw at all.
    pub fn is_empty(&self) -> bool {
        self.x_ticks.is_empty() || self.series.is_empty()
    }
}

/// Computes the full geometry for one configuration generation.
///
/// Failure-free: empty labels or series, all-gap data, and zero-size plots
/// all produce an empty or zero-height result.
pub fn compute_geometry(input: &GeometryInput<'_>) -> Geometry {
    let n = input.labels.len();
    if n == 0 {
        return Geometry::default();
    }

    let x_tick_gap = input.plot.width / n as f64;
    let x_ticks = x_tick_positions(input, x_tick_gap);

    let (min, max) = value_bounds(input);
    let value_scale = ValueScale::build(
        min,
        max,
        input.grid,
        input.binary_scale,
        input.explicit_sequence,
    );

    let max_value = value_scale.as_ref().map_or(max.max(0.0), |s| s.max_value);
    let unit_height = if max_value > 0.0 {
        input.plot.height / max_value
    } else {
        0.0
    };

    let series = if input.strategy.stacked() {
        stacked_positions(input, unit_height)
    } else {
        independent_positions(input, unit_height)
    };

    Geometry {
        value_scale,
        x_ticks,
        x_tick_gap,
        series,
    }
}

fn is_visible(input: &GeometryInput<'_>, index: usize) -> bool {
    input.visible.get(index).copied().unwrap_or(true)
}

fn x_tick_positions(input: &GeometryInput<'_>, gap: f64) -> Vec<f64> {
    let n = input.labels.len();
    let center_shift = if input.label_align_center {
        gap * 0.5
    } else {
        0.0
    };

    if let ScaleStrategy::ContinuousTime { .. } = input.strategy {
        let span = input.span.or_else(|| {
            let first = input.labels.first()?.stamp()?;
            let last = input.labels.last()?.stamp()?;
            Some((first, last))
        });
        if let Some((min, max)) = span
            && max > min
        {
            let denom = (max - min) as f64;
            return input
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| match label.stamp() {
                    Some(ms) => {
                        input.plot.left + ((ms - min) as f64 / denom) * input.plot.width
                    }
                    // A non-timestamp label in time mode falls back to its
                    // index position.
                    None => input.plot.left + gap * i as f64 + center_shift,
                })
                .collect();
        }
    }

    (0..n)
        .map(|i| input.plot.left + gap * i as f64 + center_shift)
        .collect()
}

fn value_bounds(input: &GeometryInput<'_>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    if input.strategy.stacked() {
        // The scale must cover the per-label sum of visible series.
        for label in input.labels {
            let mut sum = 0.0;
            let mut any = false;
            for (si, series) in input.series.iter().enumerate() {
                if !is_visible(input, si) {
                    continue;
                }
                if let Some(v) = series.value_at(label) {
                    sum += v;
                    any = true;
                }
            }
            if any {
                min = min.min(sum.min(0.0));
                max = max.max(sum);
            }
        }
    } else {
        for series in input.series {
            for label in input.labels {
                if let Some(v) = series.value_at(label) {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
    }

    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}

fn independent_positions(input: &GeometryInput<'_>, unit_height: f64) -> Vec<SeriesGeometry> {
    let bottom = input.plot.bottom();
    input
        .series
        .iter()
        .map(|series| {
            let y_pos = input
                .labels
                .iter()
                .map(|label| {
                    series
                        .value_at(label)
                        .map(|v| bottom - (unit_height * v).round())
                })
                .collect();
            SeriesGeometry {
                y_pos,
                base_pos: None,
            }
        })
        .collect()
}

fn stacked_positions(input: &GeometryInput<'_>, unit_height: f64) -> Vec<SeriesGeometry> {
    let bottom = input.plot.bottom();
    let n = input.labels.len();
    // Running per-label cumulative value across visible series.
    let mut cumulative = alloc::vec![0.0_f64; n];

    input
        .series
        .iter()
        .enumerate()
        .map(|(si, series)| {
            let mut y_pos = Vec::with_capacity(n);
            let mut base_pos = Vec::with_capacity(n);
            let visible = is_visible(input, si);

            for (i, label) in input.labels.iter().enumerate() {
                base_pos.push(bottom - (unit_height * cumulative[i]).round());
                if !visible {
                    y_pos.push(None);
                    continue;
                }
                match series.value_at(label) {
                    Some(v) => {
                        cumulative[i] += v;
                        y_pos.push(Some(bottom - (unit_height * cumulative[i]).round()));
                    }
                    // Gaps contribute zero to the stack but render no point.
                    None => y_pos.push(None),
                }
            }

            SeriesGeometry {
                y_pos,
                base_pos: Some(base_pos),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::data::SeriesSpec;

    fn plot() -> PlotArea {
        PlotArea {
            left: 40.0,
            top: 10.0,
            width: 500.0,
            height: 200.0,
        }
    }

    fn labels(n: i64) -> Vec<Label> {
        (1..=n).map(Label::Stamp).collect()
    }

    fn input<'a>(labels: &'a [Label], series: &'a [SeriesSpec]) -> GeometryInput<'a> {
        GeometryInput {
            plot: plot(),
            labels,
            series,
            visible: &[],
            strategy: ScaleStrategy::Standard,
            grid: 5,
            binary_scale: false,
            explicit_sequence: None,
            label_align_center: false,
            span: None,
        }
    }

    #[test]
    fn one_tick_per_label_with_even_spacing() {
        let labels = labels(5);
        let series = [SeriesSpec::new("s").with_value(1_i64, 10.0)];
        let geom = compute_geometry(&input(&labels, &series));

        assert_eq!(geom.x_ticks.len(), labels.len());
        assert_eq!(geom.x_tick_gap, 100.0);
        for pair in geom.x_ticks.windows(2) {
            assert!((pair[1] - pair[0] - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn center_alignment_shifts_ticks_by_half_a_gap() {
        let labels = labels(4);
        let series = [SeriesSpec::new("s").with_value(1_i64, 1.0)];
        let mut inp = input(&labels, &series);
        let plain = compute_geometry(&inp);
        inp.label_align_center = true;
        let centered = compute_geometry(&inp);

        for (a, b) in plain.x_ticks.iter().zip(&centered.x_ticks) {
            assert!((b - a - plain.x_tick_gap * 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn gaps_produce_none_positions() {
        let labels = labels(3);
        let series = [SeriesSpec::new("s")
            .with_value(1_i64, 10.0)
            .with_value(3_i64, 30.0)];
        let geom = compute_geometry(&input(&labels, &series));

        let y = &geom.series[0].y_pos;
        assert!(y[0].is_some());
        assert!(y[1].is_none());
        assert!(y[2].is_some());
    }

    #[test]
    fn standard_positions_scale_from_the_bottom() {
        let labels = labels(1);
        let series = [SeriesSpec::new("s").with_value(1_i64, 40.0)];
        let geom = compute_geometry(&input(&labels, &series));

        // max_value resolves to 40, so the point sits exactly at the top.
        let scale = geom.value_scale.expect("scale");
        assert_eq!(scale.max_value, 40.0);
        assert_eq!(geom.series[0].y_pos[0], Some(plot().top));
    }

    #[test]
    fn overlay_stacks_visible_series_cumulatively() {
        let labels = labels(1);
        let series = [
            SeriesSpec::new("a").with_value(1_i64, 5.0),
            SeriesSpec::new("b").with_value(1_i64, 7.0),
        ];
        let mut inp = input(&labels, &series);
        inp.strategy = ScaleStrategy::Overlay;
        let geom = compute_geometry(&inp);

        let scale = geom.value_scale.as_ref().expect("scale");
        assert!(scale.max_value >= 12.0);

        let unit = plot().height / scale.max_value;
        let bottom = plot().bottom();
        // Series b renders at the cumulative value 12, not its own 7.
        assert_eq!(geom.series[1].y_pos[0], Some(bottom - (unit * 12.0).round()));
        // And its band bottom is series a's top.
        assert_eq!(
            geom.series[1].base_pos.as_ref().unwrap()[0],
            geom.series[0].y_pos[0].unwrap()
        );
    }

    #[test]
    fn hidden_series_are_skipped_when_stacking() {
        let labels = labels(1);
        let series = [
            SeriesSpec::new("a").with_value(1_i64, 5.0),
            SeriesSpec::new("b").with_value(1_i64, 7.0),
        ];
        let mut inp = input(&labels, &series);
        inp.strategy = ScaleStrategy::Overlay;
        inp.visible = &[false, true];
        let geom = compute_geometry(&inp);

        let scale = geom.value_scale.as_ref().expect("scale");
        // Only b contributes to the combined maximum.
        assert!(scale.max_value >= 7.0 && scale.max_value < 12.0);
        assert_eq!(geom.series[0].y_pos[0], None);
    }

    #[test]
    fn continuous_time_interpolates_uneven_stamps() {
        let labels = vec![Label::Stamp(0), Label::Stamp(250), Label::Stamp(1000)];
        let series = [SeriesSpec::new("s").with_value(0_i64, 1.0)];
        let mut inp = input(&labels, &series);
        inp.strategy = ScaleStrategy::ContinuousTime { stacked: false };
        let geom = compute_geometry(&inp);

        let p = plot();
        assert!((geom.x_ticks[0] - p.left).abs() < 1e-9);
        assert!((geom.x_ticks[1] - (p.left + p.width * 0.25)).abs() < 1e-9);
        assert!((geom.x_ticks[2] - p.right()).abs() < 1e-9);
    }

    #[test]
    fn continuous_time_honors_an_explicit_span() {
        let labels = vec![Label::Stamp(500)];
        let series = [SeriesSpec::new("s").with_value(500_i64, 1.0)];
        let mut inp = input(&labels, &series);
        inp.strategy = ScaleStrategy::ContinuousTime { stacked: false };
        inp.span = Some((0, 1000));
        let geom = compute_geometry(&inp);

        let p = plot();
        assert!((geom.x_ticks[0] - (p.left + p.width * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn identical_input_yields_identical_geometry() {
        let labels = labels(5);
        let series = [
            SeriesSpec::new("a")
                .with_value(1_i64, 10.0)
                .with_value(2_i64, 20.0)
                .with_value(4_i64, 40.0),
            SeriesSpec::new("b").with_value(3_i64, 18.0),
        ];
        let inp = input(&labels, &series);
        assert_eq!(compute_geometry(&inp), compute_geometry(&inp));
    }

    #[test]
    fn empty_labels_yield_empty_geometry() {
        let series = [SeriesSpec::new("s")];
        let geom = compute_geometry(&input(&[], &series));
        assert!(geom.is_empty());
        assert!(geom.value_scale.is_none());
    }
}
