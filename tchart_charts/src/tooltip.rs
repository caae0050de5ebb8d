// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover tooltip.
//!
//! The tooltip's placement and pin logic lives here; the actual popup is a
//! host concern behind the [`FloatingOverlay`] capability trait, so the
//! logic can be unit-tested against a recording fake.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

/// Horizontal offset between the pointer and the tooltip edge.
const POINTER_OFFSET: f64 = 12.0;

/// One line of tooltip content.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    /// Series legend text.
    pub name: String,
    /// The raw value at the hovered label.
    pub value: f64,
    /// The formatted value text.
    pub text: String,
    /// Series color, shown as a dot before the name.
    pub color: Color,
}

/// A floating popup positioned over the chart.
///
/// Hosts back this with a DOM node, a native window, whatever floats; tests
/// use [`RecordingOverlay`].
pub trait FloatingOverlay {
    /// Replaces the popup content. `rows` are pre-sorted by descending
    /// value; `color_dots` selects whether row colors are shown.
    fn set_content(&mut self, title: &str, rows: &[TooltipRow], color_dots: bool);

    /// Moves the popup so its anchor sits at `(x, y)` and shows it.
    fn show_at(&mut self, x: f64, y: f64);

    /// Hides the popup.
    fn hide(&mut self);
}

/// Tooltip placement and pin state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tooltip {
    fixed: bool,
    visible: bool,
}

impl Tooltip {
    /// Creates a hidden, unpinned tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tooltip is pinned open by a click.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Whether the tooltip is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Updates content and position for a pointer at `pointer`.
    ///
    /// Ignored while pinned. The popup sits to the lower right of the
    /// pointer, flipping to the opposite side on each axis once the pointer
    /// passes the chart midpoint, so it stays within the chart bounds.
    pub fn update(
        &mut self,
        overlay: &mut dyn FloatingOverlay,
        title: &str,
        rows: &[TooltipRow],
        color_dots: bool,
        pointer: Point,
        chart_width: f64,
        chart_height: f64,
    ) {
        if self.fixed {
            return;
        }
        if rows.is_empty() {
            self.hide(overlay);
            return;
        }
        overlay.set_content(title, rows, color_dots);
        let x = if pointer.x > chart_width * 0.5 {
            pointer.x - POINTER_OFFSET
        } else {
            pointer.x + POINTER_OFFSET
        };
        let y = if pointer.y > chart_height * 0.5 {
            pointer.y - POINTER_OFFSET
        } else {
            pointer.y + POINTER_OFFSET
        };
        overlay.show_at(x, y);
        self.visible = true;
    }

    /// Pins the tooltip open; subsequent [`update`] calls are ignored until
    /// [`close`] is called.
    ///
    /// [`update`]: Tooltip::update
    /// [`close`]: Tooltip::close
    pub fn pin(&mut self) {
        if self.visible {
            self.fixed = true;
        }
    }

    /// Hides the popup without clearing the pin.
    pub fn hide(&mut self, overlay: &mut dyn FloatingOverlay) {
        if self.fixed {
            return;
        }
        overlay.hide();
        self.visible = false;
    }

    /// Clears the pin and hides the popup.
    pub fn close(&mut self, overlay: &mut dyn FloatingOverlay) {
        self.fixed = false;
        overlay.hide();
        self.visible = false;
    }
}

/// A [`FloatingOverlay`] that records calls for assertions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingOverlay {
    /// Last content set, as `(title, rows, color_dots)`.
    pub content: Option<(String, Vec<TooltipRow>, bool)>,
    /// Last position shown at.
    pub shown_at: Option<(f64, f64)>,
    /// Whether the popup is currently shown.
    pub shown: bool,
}

impl FloatingOverlay for RecordingOverlay {
    fn set_content(&mut self, title: &str, rows: &[TooltipRow], color_dots: bool) {
        self.content = Some((String::from(title), rows.to_vec(), color_dots));
    }

    fn show_at(&mut self, x: f64, y: f64) {
        self.shown_at = Some((x, y));
        self.shown = true;
    }

    fn hide(&mut self) {
        self.shown = false;
    }
}
