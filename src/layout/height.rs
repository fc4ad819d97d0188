// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vertical space accounting.
//!
//! Label stacks above and below the bar are summed *before* any drawing
//! happens, so the final row height always has room for the tallest stack on
//! each side — no stack can overrun the bar or an opposite-side stack.

use super::labels::avg_char_width;
use super::LayoutConfig;

/// Pixel height of one month block's label stack.
pub(crate) fn stack_height_px(non_empty_lines: usize, config: &LayoutConfig) -> f64 {
    if non_empty_lines == 0 {
        return 0.0;
    }
    non_empty_lines as f64 * config.line_height_px + config.stack_gap_px
}

/// Estimated height of the wrapped project name in the left panel.
pub(crate) fn name_block_height_px(name: &str, config: &LayoutConfig) -> f64 {
    let char_width = avg_char_width(config.font_size_px);
    let chars_per_line = ((config.name_panel_width_px / char_width).floor() as usize).max(1);
    let chars = name.chars().count().max(1);
    let lines = (chars + chars_per_line - 1) / chars_per_line;
    lines as f64 * config.line_height_px
}

/// Final row height: whichever of the label column, the name panel, and the
/// configured minimum needs the most room.
pub(crate) fn row_height_px(
    max_above_px: f64,
    max_below_px: f64,
    name: &str,
    config: &LayoutConfig,
) -> f64 {
    let right_panel = max_above_px + config.bar_height_px + max_below_px + config.row_padding_px;
    let left_panel = name_block_height_px(name, config) + config.row_padding_px;
    right_panel
        .max(left_panel)
        .max(config.minimum_row_height_px)
}
