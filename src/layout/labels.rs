// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label composition and width-budgeted truncation.
//!
//! Text widths are estimated, not measured: the renderer may not have font
//! metrics at layout time, so the engine uses a mean character width derived
//! from the font size. The estimate only has to be consistent, not exact —
//! every property downstream (budgets, heights) is stated against it.

use chrono::Datelike;
use smallvec::SmallVec;

use crate::model::dates::ordinal_day;
use crate::model::Milestone;

/// Mean glyph width as a fraction of the font size.
pub const AVG_CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Width of the truncation ellipsis, in characters.
pub const ELLIPSIS_CHARS: usize = 1;

/// A clipped line never goes below this many visible characters.
pub const MIN_VISIBLE_CHARS: usize = 8;

pub(crate) fn avg_char_width(font_size_px: f64) -> f64 {
    AVG_CHAR_WIDTH_FACTOR * font_size_px
}

/// Estimated pixel width of `text` at the given font size.
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * avg_char_width(font_size_px)
}

/// Clips `text` to fit `budget_px`, appending `…` when it had to shorten.
///
/// Deterministic and idempotent: a result re-clipped with the same budget is
/// returned unchanged. A budget at or below the ellipsis width collapses to
/// `"…"`; otherwise at least [`MIN_VISIBLE_CHARS`] characters survive.
pub fn truncate_to_width(text: &str, budget_px: f64, font_size_px: f64) -> String {
    if estimate_text_width(text, font_size_px) <= budget_px {
        return text.to_owned();
    }

    let char_width = avg_char_width(font_size_px);
    let ellipsis_width = ELLIPSIS_CHARS as f64 * char_width;
    if budget_px <= ellipsis_width {
        return "…".to_owned();
    }

    let max_chars = (((budget_px - ellipsis_width) / char_width).floor() as usize)
        .max(MIN_VISIBLE_CHARS);
    if text.chars().count() <= max_chars {
        // Clipping would not shorten the line; appending an ellipsis here
        // would grow it instead, breaking idempotence.
        return text.to_owned();
    }

    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

/// Composes the ordered label lines for one month bucket.
///
/// A single milestone shows its bare label; two or more stack one line each,
/// prefixed with the ordinal day (`4th: Spain`, `11th: Mexico`) so readers
/// can tell them apart under a single shared diamond. Input must already be
/// day-ascending.
pub fn compose_lines(milestones: &[Milestone]) -> SmallVec<[String; 2]> {
    match milestones {
        [] => SmallVec::new(),
        [only] => SmallVec::from_iter([only.label().to_owned()]),
        many => many
            .iter()
            .map(|m| format!("{}: {}", ordinal_day(m.date().day()), m.label()))
            .collect(),
    }
}
