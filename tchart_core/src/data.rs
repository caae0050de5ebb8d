// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-facing data types: labels and series.
//!
//! A chart is configured with an ordered label sequence plus any number of
//! named series mapping labels to values. Labels are either category names or
//! timestamps; the continuous-time layout interpolates timestamp labels over
//! a `[min, max]` span instead of placing them by index.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;

/// One position along the x-axis: a category name or a timestamp.
///
/// Timestamps are milliseconds since the Unix epoch. Using an integer keeps
/// labels hashable and totally ordered, so they can key a series' value map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// A categorical label, placed by index.
    Name(String),
    /// A timestamp in milliseconds, placed by interpolation in time mode.
    Stamp(i64),
}

impl Label {
    /// Returns the timestamp for `Stamp` labels.
    pub fn stamp(&self) -> Option<i64> {
        match self {
            Self::Name(_) => None,
            Self::Stamp(ms) => Some(*ms),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Name(String::from(value))
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Stamp(value)
    }
}

/// One named series: a legend entry plus a label-to-value map.
///
/// A label that is absent from `values`, or mapped to a non-finite value,
/// is a *gap*: the point is skipped when drawing, and no line segment spans
/// it. The engine never mutates a `SeriesSpec`; per-series render state
/// (visibility, hover, color) is tracked separately by the orchestrator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSpec {
    /// Legend text identifying this series.
    pub name: String,
    /// Values keyed by label.
    pub values: HashMap<Label, f64>,
    /// Excluded from hover hit-testing and tooltips (still drawn).
    pub disabled: bool,
}

impl SeriesSpec {
    /// Creates an empty series with the given legend text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
            disabled: false,
        }
    }

    /// Inserts one label-value pair (builder style).
    #[must_use]
    pub fn with_value(mut self, label: impl Into<Label>, value: f64) -> Self {
        self.values.insert(label.into(), value);
        self
    }

    /// Marks this series as excluded from interaction.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the finite value at `label`, or `None` for a gap.
    pub fn value_at(&self, label: &Label) -> Option<f64> {
        self.values.get(label).copied().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn missing_and_nan_values_are_gaps() {
        let s = SeriesSpec::new("cpu")
            .with_value("a", 1.0)
            .with_value("b", f64::NAN);

        assert_eq!(s.value_at(&Label::from("a")), Some(1.0));
        assert_eq!(s.value_at(&Label::from("b")), None);
        assert_eq!(s.value_at(&Label::from("c")), None);
    }

    #[test]
    fn stamp_labels_order_by_time() {
        let a = Label::Stamp(1_000);
        let b = Label::Stamp(2_000);
        assert!(a < b);
        assert_eq!(b.stamp(), Some(2_000));
        assert_eq!(Label::from("x").stamp(), None);
    }
}
