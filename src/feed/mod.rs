// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dataset ingest: the JSON feed the roadmap backend exports.
//!
//! The wire format is permissive — dates are strings in several formats,
//! statuses are free text — so everything passes through a raw serde layer
//! and is normalized into the typed model here. Milestones whose dates do
//! not parse are dropped (counted, not fatal); rows with unusable ids are a
//! feed error because downstream output references them.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{
    parse_flexible_date, IdError, Milestone, MilestoneStatus, Phase, ProjectId, ProjectRow,
};

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    projects: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: String,
    name: String,
    #[serde(default)]
    bar_start: Option<String>,
    #[serde(default)]
    bar_end: Option<String>,
    #[serde(default)]
    milestones: Vec<RawMilestone>,
    #[serde(default)]
    phases: Vec<RawPhase>,
}

#[derive(Debug, Deserialize)]
struct RawMilestone {
    date: String,
    label: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct RawPhase {
    name: String,
    start: String,
    end: String,
    #[serde(default)]
    color: Option<String>,
}

/// A decoded portfolio plus ingest diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    rows: Vec<ProjectRow>,
    dropped_milestones: usize,
    dropped_phases: usize,
}

impl Portfolio {
    pub fn rows(&self) -> &[ProjectRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ProjectRow> {
        self.rows
    }

    /// Milestones discarded because their date failed every known format.
    pub fn dropped_milestones(&self) -> usize {
        self.dropped_milestones
    }

    pub fn dropped_phases(&self) -> usize {
        self.dropped_phases
    }
}

#[derive(Debug)]
pub enum FeedError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    InvalidProjectId { raw: String, source: IdError },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Json(err) => write!(f, "malformed portfolio JSON: {err}"),
            Self::InvalidProjectId { raw, source } => {
                write!(f, "invalid project id {raw:?}: {source}")
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::InvalidProjectId { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Parses a portfolio from its JSON text.
pub fn parse_portfolio(json: &str) -> Result<Portfolio, FeedError> {
    let file: PortfolioFile = serde_json::from_str(json)?;

    let mut rows = Vec::with_capacity(file.projects.len());
    let mut dropped_milestones = 0usize;
    let mut dropped_phases = 0usize;

    for raw in file.projects {
        let id = ProjectId::new(raw.id.clone()).map_err(|source| FeedError::InvalidProjectId {
            raw: raw.id,
            source,
        })?;

        let mut row = ProjectRow::new(id, raw.name);

        let bar_start = raw.bar_start.as_deref().and_then(parse_flexible_date);
        let bar_end = raw.bar_end.as_deref().and_then(parse_flexible_date);
        if let (Some(start), Some(end)) = (bar_start, bar_end) {
            row = row.with_bar(start, end);
        }

        let mut milestones = Vec::with_capacity(raw.milestones.len());
        for m in raw.milestones {
            match parse_flexible_date(&m.date) {
                Some(date) => milestones.push(Milestone::new(
                    date,
                    m.label,
                    MilestoneStatus::normalize(&m.status),
                )),
                None => dropped_milestones += 1,
            }
        }

        let mut phases = Vec::with_capacity(raw.phases.len());
        for p in raw.phases {
            match (parse_flexible_date(&p.start), parse_flexible_date(&p.end)) {
                (Some(start), Some(end)) => {
                    phases.push(Phase::new(p.name, start, end, p.color));
                }
                _ => dropped_phases += 1,
            }
        }

        rows.push(row.with_milestones(milestones).with_phases(phases));
    }

    Ok(Portfolio {
        rows,
        dropped_milestones,
        dropped_phases,
    })
}

/// Reads and parses a portfolio JSON file from disk.
pub fn load_portfolio(path: impl AsRef<Path>) -> Result<Portfolio, FeedError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_portfolio(&json)
}
