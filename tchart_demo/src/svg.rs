// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for recorded draw ops.

use peniko::Color;
use tchart_surface::{DrawOp, TextAnchor, TextBaseline};

/// Replays a recorded op list into a standalone SVG document.
pub(crate) fn ops_to_svg(ops: &[DrawOp], width: f64, height: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
    ));
    out.push('\n');

    for op in ops {
        match op {
            DrawOp::Clear | DrawOp::SetSize { .. } => {}
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    svg_color(*color),
                    svg_opacity(*color),
                ));
                out.push('\n');
            }
            DrawOp::DashedLine {
                from,
                to,
                color,
                width,
                dash,
            } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{width}" stroke-dasharray="{dash} {dash}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    svg_color(*color),
                    svg_opacity(*color),
                ));
                out.push('\n');
            }
            DrawOp::StrokeRun {
                points,
                color,
                width,
            } => {
                out.push_str(&format!(
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{width}"/>"#,
                    point_list(points),
                    svg_color(*color),
                    svg_opacity(*color),
                ));
                out.push('\n');
            }
            DrawOp::FillPolygon {
                points,
                color,
                alpha,
            } => {
                out.push_str(&format!(
                    r#"<polygon points="{}" fill="{}" fill-opacity="{alpha}"/>"#,
                    point_list(points),
                    svg_color(*color),
                ));
                out.push('\n');
            }
            DrawOp::Rect { rect, color } => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    svg_color(*color),
                    svg_opacity(*color),
                ));
                out.push('\n');
            }
            DrawOp::Circle {
                center,
                radius,
                color,
            } => {
                out.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}" fill-opacity="{}"/>"#,
                    center.x,
                    center.y,
                    svg_color(*color),
                    svg_opacity(*color),
                ));
                out.push('\n');
            }
            DrawOp::Text {
                text,
                at,
                color,
                size,
                anchor,
                baseline,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let baseline = match baseline {
                    TextBaseline::Top => "hanging",
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{size}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}">{}</text>"#,
                    at.x,
                    at.y,
                    svg_color(*color),
                    escape_xml(text),
                ));
                out.push('\n');
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn point_list(points: &[kurbo::Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn svg_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b)
}

fn svg_opacity(color: Color) -> f64 {
    f64::from(color.to_rgba8().a) / 255.0
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
