// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::window::Window;

/// Average calendar month length used for date-to-pixel interpolation.
///
/// Using the mean month keeps the axis continuous: a milestone on the 15th
/// sits roughly halfway through its month column instead of snapping to it.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Pixel x of `date` on the window's axis, clamped at 0 for dates before the
/// window start. Monotone non-decreasing in `date`.
pub fn pixel_of(date: NaiveDate, window: &Window) -> f64 {
    let days = (date - window.start()).num_days() as f64;
    ((days / DAYS_PER_MONTH) * window.month_width_px()).max(0.0)
}

/// Marker x for a milestone, pulled half a marker inside the bar when the
/// milestone lands exactly on the bar's last day so the diamond never
/// overshoots the bar's right edge.
pub fn bar_x_end(
    date: NaiveDate,
    bar_end: Option<NaiveDate>,
    window: &Window,
    marker_size_px: f64,
) -> f64 {
    let x = pixel_of(date, window);
    match bar_end {
        Some(end) if end == date => (x - marker_size_px / 2.0).max(0.0),
        _ => x,
    }
}

/// Total drawable axis width for the window, in whole month columns.
pub fn axis_width_px(window: &Window) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let days = (window.end() - window.start()).num_days() as f64;
    (days / 30.0).ceil() * window.month_width_px()
}
