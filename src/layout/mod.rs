// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The milestone layout engine.
//!
//! A pure pipeline from a [`crate::model::ProjectRow`] plus a [`Window`] to a
//! [`LaidOutRow`]: filter milestones to the window, bucket them by calendar
//! month, alternate buckets above/below the bar by month parity, budget label
//! widths against same-side neighbors, compose and truncate label lines, and
//! derive the vertical space the row must reserve. Same inputs always yield
//! the same output; nothing here touches global state.

pub mod axis;
pub mod height;
pub mod labels;
pub mod neighbors;
pub mod row;
pub mod window;

pub use axis::{axis_width_px, bar_x_end, pixel_of, DAYS_PER_MONTH};
pub use labels::{estimate_text_width, truncate_to_width};
pub use row::{
    compute_row_layout, layout_rows, BarGeom, LaidOutRow, MarkerStyle, MonthBlock, PhaseGeom,
};
pub use window::{ParseViewRangeError, ViewRange, Window, MIN_MONTH_WIDTH_PX};

/// Tuning points shared across the pipeline.
///
/// Heights and paddings are in pixels; width budgets are expressed in months
/// and converted with the window's month width. The defaults match the
/// production roadmap views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub bar_height_px: f64,
    pub minimum_row_height_px: f64,
    /// Gap between a label stack and the diamond it belongs to.
    pub stack_gap_px: f64,
    pub row_padding_px: f64,
    pub budget_floor_months: f64,
    pub budget_cap_months: f64,
    /// Side of the rotated-square milestone marker, clamped to 8..=12.
    pub marker_size_px: f64,
    /// Width of the left name panel, for the wrapped-name height estimate.
    pub name_panel_width_px: f64,
}

impl LayoutConfig {
    pub fn new(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            line_height_px: 12.0,
            bar_height_px: 12.0,
            minimum_row_height_px: 28.0,
            stack_gap_px: 2.0,
            row_padding_px: 2.0,
            budget_floor_months: 2.0,
            budget_cap_months: 24.0,
            marker_size_px: (font_size_px * 0.7).clamp(8.0, 12.0),
            name_panel_width_px: 180.0,
        }
    }

    pub fn with_marker_size(mut self, marker_size_px: f64) -> Self {
        self.marker_size_px = marker_size_px.clamp(8.0, 12.0);
        self
    }

    pub fn avg_char_width_px(&self) -> f64 {
        labels::avg_char_width(self.font_size_px)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(14.0)
    }
}
