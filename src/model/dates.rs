// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate};

/// Which side of the project bar a month's label stack occupies.
///
/// Derived from the calendar month alone (odd month above, even month below),
/// so two adjacent months never share a row and horizontal collision analysis
/// only ever needs same-side neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelSide {
    Above,
    Below,
}

/// A calendar month, the grouping key for milestone buckets.
///
/// Ordering follows chronology (`2024-12 < 2025-01`), which lets a
/// `BTreeMap<MonthKey, _>` iterate buckets in ascending month order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based calendar month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Absolute month index (`year * 12 + month0`), used for span arithmetic.
    pub fn index(&self) -> i64 {
        (self.year as i64) * 12 + (self.month as i64 - 1)
    }

    /// Odd months stack labels above the bar, even months below.
    pub fn side(&self) -> LabelSide {
        if self.month % 2 == 1 {
            LabelSide::Above
        } else {
            LabelSide::Below
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated to 1..=12 and day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("first day of a valid month")
    }

    /// The month `delta` calendar months away (negative moves backwards).
    pub fn offset(&self, delta: i32) -> Self {
        let index = self.index() + delta as i64;
        let year = index.div_euclid(12);
        let month0 = index.rem_euclid(12);
        Self {
            year: year as i32,
            month: (month0 + 1) as u32,
        }
    }

    /// Signed distance in calendar months from `self` to `other`.
    pub fn months_until(&self, other: &MonthKey) -> i64 {
        other.index() - self.index()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyError {
    InvalidMonth { month: u32 },
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth { month } => {
                write!(f, "month must be 1..=12, got {month}")
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    MonthKey::of(date).first_day()
}

/// Signed distance in calendar months between the months of two dates.
///
/// Day-of-month is ignored: `2025-01-31 -> 2025-02-01` is one month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    MonthKey::of(from).months_until(&MonthKey::of(to))
}

/// English ordinal for a day-of-month (`1st`, `2nd`, `11th`, `23rd`).
pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Parses the date formats the upstream feed is known to emit.
///
/// Tried in order: ISO `YYYY-MM-DD`, RFC 3339, RFC 2822, legacy `dd-MMM-yy`.
/// Returns `None` for anything else; the feed drops such milestones before
/// they reach the layout engine.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d-%b-%y") {
        return Some(date);
    }

    None
}
