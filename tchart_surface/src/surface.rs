// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`DrawingSurface`] capability trait.

extern crate alloc;

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal anchoring of drawn text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    #[default]
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}

/// Vertical anchoring of drawn text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the top of the text box.
    Top,
    /// The position is the vertical center of the text box.
    Middle,
    /// The position is the text baseline.
    #[default]
    Alphabetic,
}

/// Width factor of the average glyph relative to the font size, for the
/// default heuristic [`DrawingSurface::measure_text`].
const HEURISTIC_GLYPH_WIDTH: f64 = 0.6;

/// A 2D surface the chart draws onto.
///
/// Hosts implement this over their platform canvas; [`RecordingSurface`]
/// implements it by retaining [`DrawOp`] values. Every operation is
/// fire-and-forget and infallible: a surface may silently clip or drop what
/// it cannot render, but it never reports an error back into the drawing
/// path.
///
/// [`RecordingSurface`]: crate::RecordingSurface
/// [`DrawOp`]: crate::DrawOp
pub trait DrawingSurface {
    /// Erases the whole surface.
    fn clear(&mut self);

    /// Resizes the surface to a logical size and device pixel ratio.
    fn set_size(&mut self, width: f64, height: f64, device_pixel_ratio: f64);

    /// Strokes a straight line segment.
    fn line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Strokes a dashed line segment with equal on/off lengths of `dash`.
    fn dashed_line(&mut self, from: Point, to: Point, color: Color, width: f64, dash: f64);

    /// Strokes one polyline through `points` as a single path.
    fn stroke_run(&mut self, points: &[Point], color: Color, width: f64);

    /// Fills the polygon outlined by `points` with `alpha` opacity.
    fn fill_polygon(&mut self, points: &[Point], color: Color, alpha: f64);

    /// Fills an axis-aligned rectangle.
    fn rect(&mut self, rect: Rect, color: Color);

    /// Fills a circle.
    fn circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draws a run of text anchored at `at`.
    fn text(
        &mut self,
        text: &str,
        at: Point,
        color: Color,
        size: f64,
        anchor: TextAnchor,
        baseline: TextBaseline,
    );

    /// Measures the advance width of `text` at the given font size.
    ///
    /// The default is a heuristic that treats every glyph as `0.6em` wide,
    /// which is good enough for layout decisions like legend wrapping.
    /// Surfaces with real font metrics should override it.
    fn measure_text(&mut self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * HEURISTIC_GLYPH_WIDTH
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::RecordingSurface;

    #[test]
    fn heuristic_measure_scales_with_length_and_size() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let short = surface.measure_text("ab", 10.0);
        let long = surface.measure_text("abcd", 10.0);
        let large = surface.measure_text("ab", 20.0);

        assert_eq!(long, short * 2.0);
        assert_eq!(large, short * 2.0);
    }
}
