// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::model::dates::month_start;
use crate::model::MonthKey;

/// Hard floor for the pixel width of one calendar month column.
pub const MIN_MONTH_WIDTH_PX: f64 = 30.0;

/// The visible timeline: an inclusive date range plus the pixel width of one
/// calendar month.
///
/// An inverted range (`end < start`) is tolerated and behaves as an empty
/// window: nothing is contained, nothing overlaps, layouts come out minimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    month_width_px: f64,
}

impl Window {
    /// Builds a window, clamping `month_width_px` up to [`MIN_MONTH_WIDTH_PX`].
    pub fn new(start: NaiveDate, end: NaiveDate, month_width_px: f64) -> Self {
        Self {
            start,
            end,
            month_width_px: month_width_px.max(MIN_MONTH_WIDTH_PX),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn month_width_px(&self) -> f64 {
        self.month_width_px
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_empty() && self.start <= date && date <= self.end
    }

    /// Whether the inclusive span `[span_start, span_end]` overlaps the window.
    pub fn overlaps(&self, span_start: NaiveDate, span_end: NaiveDate) -> bool {
        !self.is_empty() && span_start <= self.end && span_end >= self.start
    }
}

/// The fixed set of timeline ranges the view dropdown offers.
///
/// Each variant yields a month-aligned window relative to a caller-supplied
/// "today"; the engine itself has no clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRange {
    /// One month back through twelve months ahead (14 month columns).
    Current14,
    Future14,
    Past14,
    Future24,
    Past24,
    Future36,
    Past36,
}

impl ViewRange {
    pub const ALL: [ViewRange; 7] = [
        Self::Current14,
        Self::Future14,
        Self::Past14,
        Self::Future24,
        Self::Past24,
        Self::Future36,
        Self::Past36,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Current14 => "current14",
            Self::Future14 => "future14",
            Self::Past14 => "past14",
            Self::Future24 => "future24",
            Self::Past24 => "past24",
            Self::Future36 => "future36",
            Self::Past36 => "past36",
        }
    }

    /// Month offsets relative to the month containing "today".
    fn month_offsets(&self) -> (i32, i32) {
        match self {
            Self::Current14 => (-1, 12),
            Self::Future14 => (0, 14),
            Self::Past14 => (-14, 0),
            Self::Future24 => (0, 24),
            Self::Past24 => (-24, 0),
            Self::Future36 => (0, 36),
            Self::Past36 => (-36, 0),
        }
    }

    pub fn window(&self, today: NaiveDate, month_width_px: f64) -> Window {
        let anchor = MonthKey::of(month_start(today));
        let (back, ahead) = self.month_offsets();
        Window::new(
            anchor.offset(back).first_day(),
            anchor.offset(ahead).first_day(),
            month_width_px,
        )
    }
}

impl fmt::Display for ViewRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseViewRangeError {
    UnknownOption { input: String },
}

impl fmt::Display for ParseViewRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption { input } => {
                write!(f, "unknown view range {input:?} (expected one of: ")?;
                for (idx, option) in ViewRange::ALL.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{option}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::error::Error for ParseViewRangeError {}

impl FromStr for ViewRange {
    type Err = ParseViewRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewRange::ALL
            .iter()
            .find(|option| option.name() == s)
            .copied()
            .ok_or_else(|| ParseViewRangeError::UnknownOption {
                input: s.to_owned(),
            })
    }
}
