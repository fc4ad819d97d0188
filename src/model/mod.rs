// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed layout inputs: projects, milestones, and calendar-month keys.
//!
//! Everything here is an immutable value object; the layout engine consumes
//! these and never mutates them.

pub mod dates;
pub mod fixtures;
pub mod ids;
pub mod milestone;
pub mod project;

pub use dates::{
    month_start, months_between, ordinal_day, parse_flexible_date, LabelSide, MonthKey,
    MonthKeyError,
};
pub use ids::{Id, IdError, ProjectId};
pub use milestone::{Milestone, MilestoneStatus};
pub use project::{Phase, ProjectRow};
