// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A surface that retains its operations as values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::surface::{DrawingSurface, TextAnchor, TextBaseline};

/// One retained drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// The surface was erased.
    Clear,
    /// The surface was resized.
    SetSize {
        /// Logical width.
        width: f64,
        /// Logical height.
        height: f64,
        /// Device pixel ratio.
        device_pixel_ratio: f64,
    },
    /// A solid line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// A dashed line segment.
    DashedLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
        /// On/off dash length.
        dash: f64,
    },
    /// A stroked polyline.
    StrokeRun {
        /// Polyline vertices.
        points: Vec<Point>,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// A filled polygon.
    FillPolygon {
        /// Polygon vertices.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
        /// Fill opacity.
        alpha: f64,
    },
    /// A filled rectangle.
    Rect {
        /// The rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A filled circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A text run.
    Text {
        /// The text content.
        text: String,
        /// Anchor position.
        at: Point,
        /// Text color.
        color: Color,
        /// Font size.
        size: f64,
        /// Horizontal anchoring.
        anchor: TextAnchor,
        /// Vertical anchoring.
        baseline: TextBaseline,
    },
}

/// A [`DrawingSurface`] that records instead of rendering.
///
/// The unit-test fake and the demo's SVG source: after drawing, the op list
/// can be asserted against or replayed into another format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
}

impl RecordingSurface {
    /// Creates a surface with the given logical size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Returns every retained op, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drops all retained ops, keeping the size.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Current logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// All retained text contents, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any retained text equals `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// All retained stroke runs, in draw order.
    pub fn stroke_runs(&self) -> Vec<&[Point]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRun { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Number of retained circles.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Number of retained filled rectangles.
    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }

    /// Number of retained filled polygons.
    pub fn polygon_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPolygon { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_size(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.width = width;
        self.height = height;
        self.device_pixel_ratio = device_pixel_ratio;
        self.ops.push(DrawOp::SetSize {
            width,
            height,
            device_pixel_ratio,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn dashed_line(&mut self, from: Point, to: Point, color: Color, width: f64, dash: f64) {
        self.ops.push(DrawOp::DashedLine {
            from,
            to,
            color,
            width,
            dash,
        });
    }

    fn stroke_run(&mut self, points: &[Point], color: Color, width: f64) {
        self.ops.push(DrawOp::StrokeRun {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color, alpha: f64) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
            alpha,
        });
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(
        &mut self,
        text: &str,
        at: Point,
        color: Color,
        size: f64,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) {
        self.ops.push(DrawOp::Text {
            text: String::from(text),
            at,
            color,
            size,
            anchor,
            baseline,
        });
    }
}
