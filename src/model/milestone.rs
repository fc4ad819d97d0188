// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::dates::MonthKey;

/// Completion state of a milestone, closed at ingest.
///
/// The upstream dataset uses "Completed" and "Complete" interchangeably and
/// with arbitrary casing; [`MilestoneStatus::normalize`] folds both onto
/// `Completed` and treats every other value as `Incomplete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneStatus {
    Completed,
    Incomplete,
}

impl MilestoneStatus {
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("completed") || raw.eq_ignore_ascii_case("complete") {
            Self::Completed
        } else {
            Self::Incomplete
        }
    }
}

/// A dated, labeled event on a project bar. Immutable layout input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    date: NaiveDate,
    label: String,
    status: MilestoneStatus,
}

impl Milestone {
    pub fn new(date: NaiveDate, label: impl Into<String>, status: MilestoneStatus) -> Self {
        Self {
            date,
            label: label.into(),
            status,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> MilestoneStatus {
        self.status
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}
