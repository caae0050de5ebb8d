// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and fonts.

extern crate alloc;

use peniko::Color;
use peniko::color::palette::css;

/// Fallback series color cycle, used past the end of any caller palette.
pub const SERIES_PALETTE: [Color; 8] = [
    css::STEEL_BLUE,
    css::DARK_ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::INDIAN_RED,
    css::MEDIUM_PURPLE,
    css::GOLDENROD,
    css::LIGHT_SEA_GREEN,
    css::SLATE_GRAY,
];

/// Chrome colors for everything that is not series data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Title and axis label text.
    pub text: Color,
    /// Gridline value labels and the empty-state message.
    pub subtle_text: Color,
    /// Axis lines.
    pub axis: Color,
    /// Dashed horizontal gridlines.
    pub grid: Color,
    /// The loading spinner.
    pub spinner: Color,
    /// The reload affordance in the empty state.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: css::DARK_SLATE_GRAY,
            subtle_text: css::GRAY,
            axis: css::DARK_GRAY,
            grid: css::LIGHT_GRAY,
            spinner: css::GRAY,
            accent: css::STEEL_BLUE,
        }
    }
}

/// Resolves the color for series `index`: the caller palette first, then the
/// built-in cycle.
pub fn series_color(colors: &[Color], index: usize) -> Color {
    colors
        .get(index)
        .copied()
        .unwrap_or(SERIES_PALETTE[index % SERIES_PALETTE.len()])
}
