// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in demo portfolio used by the CLI `--demo` mode and shared test
//! fixtures.

use chrono::NaiveDate;

use super::ids::ProjectId;
use super::milestone::{Milestone, MilestoneStatus};
use super::project::{Phase, ProjectRow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn pid(value: &str) -> ProjectId {
    ProjectId::new(value).expect("fixture project id")
}

/// A small portfolio exercising the interesting layout cases: same-month
/// stacking, same-side crowding, phases, and an end-of-bar milestone.
pub fn demo_portfolio() -> Vec<ProjectRow> {
    vec![
        ProjectRow::new(pid("prj:emea-rollout"), "EMEA Market Rollout")
            .with_bar(date(2025, 1, 1), date(2025, 12, 31))
            .with_milestones(vec![
                Milestone::new(date(2025, 4, 4), "Spain", MilestoneStatus::Incomplete),
                Milestone::new(date(2025, 4, 11), "Mexico", MilestoneStatus::Completed),
                Milestone::new(date(2025, 6, 15), "SG3 Launch", MilestoneStatus::Incomplete),
                Milestone::new(date(2025, 9, 30), "GA", MilestoneStatus::Incomplete),
            ]),
        ProjectRow::new(pid("prj:billing-replatform"), "Billing Replatform")
            .with_bar(date(2025, 1, 1), date(2025, 6, 30))
            .with_phases(vec![
                Phase::new("Design", date(2025, 1, 1), date(2025, 3, 1), Some("#7aa2f7".to_owned())),
                Phase::new("Build", date(2025, 3, 1), date(2025, 6, 30), Some("#9ece6a".to_owned())),
            ])
            .with_milestones(vec![
                Milestone::new(date(2025, 3, 1), "Design freeze", MilestoneStatus::Completed),
                Milestone::new(date(2025, 6, 30), "Cutover", MilestoneStatus::Incomplete),
            ]),
        ProjectRow::new(pid("prj:data-quality"), "Data Quality Program")
            .with_bar(date(2025, 2, 1), date(2026, 1, 31))
            .with_milestones(vec![
                Milestone::new(date(2025, 1, 15), "Audit kickoff", MilestoneStatus::Completed),
                Milestone::new(date(2025, 3, 15), "Baseline report", MilestoneStatus::Completed),
                Milestone::new(date(2025, 5, 15), "Remediation wave 1", MilestoneStatus::Incomplete),
            ]),
        ProjectRow::new(pid("prj:archive"), "Archive Decommission"),
    ]
}

#[cfg(test)]
pub(crate) fn crowded_row(milestones: usize) -> ProjectRow {
    let mut out = Vec::with_capacity(milestones);
    for i in 0..milestones {
        let month = (i % 12) as u32 + 1;
        let day = (i % 27) as u32 + 1;
        out.push(Milestone::new(
            date(2025, month, day),
            format!("Milestone {i} with a fairly long label"),
            if i % 2 == 0 { MilestoneStatus::Completed } else { MilestoneStatus::Incomplete },
        ));
    }
    ProjectRow::new(pid("prj:crowded"), "Crowded Row")
        .with_bar(date(2025, 1, 1), date(2025, 12, 31))
        .with_milestones(out)
}
