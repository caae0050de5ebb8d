// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nice-number value scales.
//!
//! A value scale turns a data range and a gridline count into a sequence of
//! "round" tick values covering the range. Two variants exist:
//! - a decimal variant for ordinary quantities, and
//! - a base-2 variant for byte-like quantities, where binary-unit-friendly
//!   steps read better.
//!
//! Degenerate inputs (zero gridlines, an empty range, a non-finite step)
//! yield no scale at all; the chart then renders without a grid rather than
//! failing.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Fallback maximum when every input value is zero or negative, so the chart
/// keeps a visible value axis instead of collapsing to zero height.
const MAX_VALUE_FLOOR: f64 = 5.0;

/// Hard cap on emitted ticks, guarding against absurd step/range ratios.
const MAX_TICKS: usize = 1_000;

/// The grid step in split form: `value * 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleValue {
    /// Step mantissa (the rounded leading digit for the decimal variant,
    /// the full step for the binary variant).
    pub value: f64,
    /// Decimal exponent applied to `value`.
    pub exponent: i32,
}

impl ScaleValue {
    /// Returns the reconstituted grid step.
    pub fn step(&self) -> f64 {
        self.value * pow10(self.exponent)
    }
}

/// A computed value scale: the gridline sequence plus its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueScale {
    /// Smallest raw data value seen (not necessarily a tick).
    pub min_value: f64,
    /// Top of the scale; always the last element of `sequence`.
    pub max_value: f64,
    /// Tick values ordered bottom-up (ascending).
    pub sequence: Vec<f64>,
    /// The grid step in split form.
    pub scale_value: ScaleValue,
}

impl ValueScale {
    /// Builds a scale for `[min, max]` with `grid` gridlines.
    ///
    /// An `explicit` tick sequence (given top-down, as rendered) takes
    /// precedence when its top value covers the data maximum. Otherwise the
    /// binary variant is used when `binary` is set, the decimal variant when
    /// not. Returns `None` when no usable sequence exists.
    pub fn build(
        min: f64,
        max: f64,
        grid: usize,
        binary: bool,
        explicit: Option<&[f64]>,
    ) -> Option<Self> {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            MAX_VALUE_FLOOR
        };

        if let Some(seq) = explicit
            && let Some(&top) = seq.first()
            && seq.len() > 1
            && top >= max
        {
            let mut sequence: Vec<f64> = seq.to_vec();
            sequence.reverse();
            let step = sequence[1] - sequence[0];
            return Some(Self {
                min_value: min,
                max_value: top,
                sequence,
                scale_value: ScaleValue {
                    value: step,
                    exponent: 0,
                },
            });
        }

        let (sequence, scale_value) = if binary {
            binary_sequence(min, max, grid)?
        } else {
            decimal_sequence(max, grid)?
        };
        let max_value = *sequence.last()?;
        Some(Self {
            min_value: min,
            max_value,
            sequence,
            scale_value,
        })
    }
}

/// Decimal nice-number sequence: `0, step, 2*step, …` up to the first tick
/// covering `max`.
///
/// The step is `max / grid` normalized to a single leading digit (tracking
/// the decimal exponent) and rounded up to the nearest of `{1, 2, 5, 10}`.
pub fn decimal_sequence(max: f64, grid: usize) -> Option<(Vec<f64>, ScaleValue)> {
    if grid == 0 || !max.is_finite() || max <= 0.0 {
        return None;
    }

    let step0 = max / grid as f64;
    if !step0.is_finite() || step0 <= 0.0 {
        return None;
    }

    // Normalize to [1, 10) by shifting powers of ten.
    let mut exponent = 0_i32;
    let mut leading = step0;
    while leading >= 10.0 {
        leading /= 10.0;
        exponent += 1;
    }
    while leading < 1.0 {
        leading *= 10.0;
        exponent -= 1;
    }

    let digit = if leading <= 1.0 {
        1.0
    } else if leading <= 2.0 {
        2.0
    } else if leading <= 5.0 {
        5.0
    } else {
        10.0
    };
    let scale_value = ScaleValue {
        value: digit,
        exponent,
    };
    let step = scale_value.step();
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let mut sequence = Vec::with_capacity(grid + 1);
    let mut tick = 0.0;
    let mut i = 0_usize;
    loop {
        sequence.push(tick);
        if tick >= max || i >= grid.min(MAX_TICKS) {
            break;
        }
        i += 1;
        tick = step * i as f64;
    }
    Some((sequence, scale_value))
}

/// Binary nice-number sequence for byte-like values.
///
/// The raw step `(max - min) / grid` is split as `ratio * 2^power` and the
/// ratio rounded to a multiplier from `{1, 2, 5, 10}` using the classic
/// `sqrt(2)` / `sqrt(10)` / `sqrt(50)` thresholds, applied in base 2 so
/// steps land on binary-unit-friendly values. Ticks start at
/// `floor(min / step) * step` and run `ceil(range / step) + 1` long.
pub fn binary_sequence(min: f64, max: f64, grid: usize) -> Option<(Vec<f64>, ScaleValue)> {
    if grid == 0 || !min.is_finite() || !max.is_finite() || min >= max {
        return None;
    }

    let range = max - min;
    let step0 = range / grid as f64;
    if !step0.is_finite() || step0 <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, reason = "clamped to a tiny range")]
    let power = step0.log2().floor().clamp(-1_000.0, 1_000.0) as i32;
    let base = 2.0_f64.powi(power);
    let ratio = step0 / base;
    let multiplier = if ratio < 2.0_f64.sqrt() {
        1.0
    } else if ratio < 10.0_f64.sqrt() {
        2.0
    } else if ratio < 50.0_f64.sqrt() {
        5.0
    } else {
        10.0
    };
    let step = multiplier * base;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let start = (min / step).floor() * step;
    let n_f = (range / step).ceil();
    if !n_f.is_finite() || n_f < 0.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "guarded by finite/non-negative checks and capped"
    )]
    let n = n_f.min(MAX_TICKS as f64) as usize;

    let sequence: Vec<f64> = (0..=n).map(|i| start + step * i as f64).collect();
    Some((
        sequence,
        ScaleValue {
            value: step,
            exponent: 0,
        },
    ))
}

fn pow10(exponent: i32) -> f64 {
    10.0_f64.powi(exponent)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn decimal_sequence_rounds_the_leading_digit_up() {
        // max 40 over 5 gridlines: raw step 8 rounds up to 10.
        let (seq, sv) = decimal_sequence(40.0, 5).expect("scale");
        assert_eq!(seq, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(sv.step(), 10.0);
    }

    #[test]
    fn decimal_sequence_tracks_the_exponent() {
        let (seq, sv) = decimal_sequence(0.04, 4).expect("scale");
        assert_eq!(sv.value, 1.0);
        assert_eq!(sv.exponent, -2);
        assert!((seq.last().unwrap() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn binary_sequence_covers_the_maximum() {
        // 1000 / 5 = 200 = 1.5625 * 2^7 -> multiplier 2 -> step 256.
        let (seq, sv) = binary_sequence(0.0, 1000.0, 5).expect("scale");
        assert_eq!(sv.step(), 256.0);
        assert_eq!(seq, vec![0.0, 256.0, 512.0, 768.0, 1024.0]);
        assert!(*seq.last().unwrap() >= 1000.0);
    }

    #[test]
    fn degenerate_inputs_yield_no_scale() {
        assert!(decimal_sequence(40.0, 0).is_none());
        assert!(decimal_sequence(0.0, 5).is_none());
        assert!(decimal_sequence(f64::NAN, 5).is_none());
        assert!(binary_sequence(3.0, 3.0, 5).is_none());
        assert!(binary_sequence(0.0, f64::INFINITY, 5).is_none());
    }

    #[test]
    fn build_prefers_a_covering_explicit_sequence() {
        let explicit = [100.0, 75.0, 50.0, 25.0, 0.0];
        let scale = ValueScale::build(0.0, 90.0, 5, false, Some(&explicit)).expect("scale");
        assert_eq!(scale.max_value, 100.0);
        assert_eq!(scale.sequence, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

        // An explicit sequence below the data maximum is ignored.
        let scale = ValueScale::build(0.0, 150.0, 5, false, Some(&explicit)).expect("scale");
        assert!(scale.max_value >= 150.0);
    }

    #[test]
    fn nonpositive_data_falls_back_to_the_floor_maximum() {
        let scale = ValueScale::build(-3.0, 0.0, 5, false, None).expect("scale");
        assert_eq!(scale.max_value, 5.0);
        assert_eq!(scale.sequence.len(), 6);
    }

    #[test]
    fn scale_top_is_always_the_last_tick() {
        for max in [7.0, 40.0, 99.5, 1234.0] {
            let scale = ValueScale::build(0.0, max, 5, false, None).expect("scale");
            assert_eq!(scale.max_value, *scale.sequence.last().unwrap());
            assert!(scale.max_value >= max);
        }
    }
}
