// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Same-side neighbor analysis: how wide may a month block's labels grow?
//!
//! Only milestones whose month shares the block's side (above/below) can
//! collide with it, and only when they live in a *different* month — same
//! month milestones stack inside the block instead. The nearest such
//! neighbor on each side converts to a width budget in months.

use chrono::NaiveDate;

use crate::model::dates::months_between;
use crate::model::MonthKey;

/// One-sided budgets stretch twice the free span; two-sided budgets take 9/10
/// of the span between the neighbors.
const ONE_SIDED_SPAN_FACTOR: f64 = 2.0;
const TWO_SIDED_SPAN_FACTOR: f64 = 0.9;

/// Width budget in months for the bucket of `month`, given every in-window
/// milestone date on the same side of the bar, sorted ascending.
///
/// Dates inside `month` itself are skipped; they form one contiguous run in
/// the sorted slice, so the nearest different-month neighbors are the entries
/// just outside that run.
pub(crate) fn budget_months(
    same_side_dates: &[NaiveDate],
    month: MonthKey,
    floor_months: f64,
    cap_months: f64,
) -> f64 {
    let run_start = same_side_dates.partition_point(|d| MonthKey::of(*d) < month);
    let run_end = same_side_dates.partition_point(|d| MonthKey::of(*d) <= month);

    let left = (run_start > 0).then(|| same_side_dates[run_start - 1]);
    let right = same_side_dates.get(run_end).copied();
    let anchor = month.first_day();

    let months = match (left, right) {
        (None, None) => cap_months,
        (None, Some(r)) => {
            let right_span = months_between(anchor, r) as f64;
            (ONE_SIDED_SPAN_FACTOR * right_span).max(floor_months)
        }
        (Some(l), None) => {
            let left_span = months_between(l, anchor) as f64;
            (ONE_SIDED_SPAN_FACTOR * left_span).max(floor_months)
        }
        (Some(l), Some(r)) => {
            let total_span = months_between(l, r) as f64;
            (TWO_SIDED_SPAN_FACTOR * total_span).max(floor_months)
        }
    };

    months.min(cap_months)
}
