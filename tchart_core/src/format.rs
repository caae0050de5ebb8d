// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and axis label formatting.
//!
//! Gridline values are formatted to match the scale step: a decimal scale
//! with a fractional step keeps exactly the step's precision, and a binary
//! scale renders byte units (`B`, `KiB`, …). Timestamp axis labels are
//! thinned to a label budget and collapse within a day: the first stamp of
//! each civil day shows the date, subsequent stamps show only the time.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::scale::ScaleValue;

const BINARY_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

const MS_PER_MINUTE: i64 = 60 * 1_000;
const MS_PER_DAY: i64 = 24 * 60 * MS_PER_MINUTE;

/// Formats a gridline value with precision matching the scale step.
///
/// A step of `0.05` yields two decimals, a step of `10` yields none.
pub fn format_decimal_value(value: f64, scale: &ScaleValue) -> String {
    let precision = if scale.exponent < 0 {
        scale.exponent.unsigned_abs() as usize
    } else {
        0
    };
    format!("{value:.precision$}")
}

/// Formats a byte-like value with a binary unit suffix.
pub fn format_binary_value(value: f64) -> String {
    let mut v = value;
    let mut unit = 0;
    while v.abs() >= 1024.0 && unit + 1 < BINARY_UNITS.len() {
        v /= 1024.0;
        unit += 1;
    }
    let suffix = BINARY_UNITS[unit];
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0} {suffix}")
    } else {
        format!("{v:.1} {suffix}")
    }
}

/// Formats one millisecond timestamp as `MM-DD HH:MM`, for tooltip titles.
pub fn format_stamp(ms: i64) -> String {
    let day = ms.div_euclid(MS_PER_DAY);
    let (_, month, mday) = civil_from_days(day);
    let minute_of_day = ms.rem_euclid(MS_PER_DAY) / MS_PER_MINUTE;
    format!(
        "{month:02}-{mday:02} {:02}:{:02}",
        minute_of_day / 60,
        minute_of_day % 60
    )
}

/// Thins millisecond timestamps to at most `max_labels` axis labels.
///
/// Returns `(label_index, text)` pairs. The first label of each civil day is
/// rendered as `MM-DD`; later labels within the same day as `HH:MM`.
pub fn simplify_stamp_labels(stamps: &[i64], max_labels: usize) -> Vec<(usize, String)> {
    if stamps.is_empty() || max_labels == 0 {
        return Vec::new();
    }

    let stride = stamps.len().div_ceil(max_labels).max(1);
    let mut out = Vec::new();
    let mut last_day: Option<i64> = None;

    for (i, &ms) in stamps.iter().enumerate().step_by(stride) {
        let day = ms.div_euclid(MS_PER_DAY);
        let text = if last_day == Some(day) {
            let minute_of_day = ms.rem_euclid(MS_PER_DAY) / MS_PER_MINUTE;
            format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
        } else {
            let (_, month, mday) = civil_from_days(day);
            format!("{month:02}-{mday:02}")
        };
        last_day = Some(day);
        out.push((i, text));
    }
    out
}

/// Converts days since 1970-01-01 to `(year, month, day)` in the proleptic
/// Gregorian calendar. Integer-only, valid across the full i64 ms range.
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "month is in 1..=12 and day in 1..=31 by construction"
    )]
    let (month, day) = (month as u32, day as u32);
    (year, month, day)
}
