// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::ids::ProjectId;
use super::milestone::Milestone;

/// A named sub-interval of a project bar, drawn as a colored segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
    color: Option<String>,
}

impl Phase {
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        color: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Placeholder phases the upstream emits for unphased projects; these are
    /// drawn as a single plain bar instead of colored segments.
    pub fn is_generic(&self) -> bool {
        self.name.eq_ignore_ascii_case("unphased") || self.name.eq_ignore_ascii_case("project")
    }
}

/// One roadmap row: an optional bar span, milestones, and optional phases.
///
/// Rows are layout inputs and never mutated by the engine. `bar_start` and
/// `bar_end` may be missing independently (upstream data is patchy); bar
/// geometry is only produced when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    id: ProjectId,
    name: String,
    bar_start: Option<NaiveDate>,
    bar_end: Option<NaiveDate>,
    milestones: Vec<Milestone>,
    phases: Vec<Phase>,
}

impl ProjectRow {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bar_start: None,
            bar_end: None,
            milestones: Vec::new(),
            phases: Vec::new(),
        }
    }

    pub fn with_bar(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.bar_start = Some(start);
        self.bar_end = Some(end);
        self
    }

    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }

    pub fn with_phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = phases;
        self
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bar_start(&self) -> Option<NaiveDate> {
        self.bar_start
    }

    pub fn bar_end(&self) -> Option<NaiveDate> {
        self.bar_end
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}
