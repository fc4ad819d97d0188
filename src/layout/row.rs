// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use smallvec::SmallVec;

use super::axis::{bar_x_end, pixel_of};
use super::window::Window;
use super::{height, labels, neighbors, LayoutConfig};
use crate::model::{LabelSide, Milestone, MilestoneStatus, MonthKey, ProjectRow};

/// How the single diamond of a month bucket is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// Solid fill: every milestone in the bucket is completed.
    Completed,
    /// Outline only: the bucket's milestone is still open.
    Incomplete,
    /// Black fill, white stroke: the bucket holds two or more milestones,
    /// regardless of their statuses.
    Multiple,
}

/// Horizontal extent of the project bar on the axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeom {
    x_start: f64,
    x_end: f64,
}

impl BarGeom {
    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }
}

/// A colored sub-segment of the bar for a named project phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseGeom {
    name: String,
    x_start: f64,
    x_end: f64,
    color: Option<String>,
}

impl PhaseGeom {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// All in-window milestones of one calendar month, laid out.
///
/// The block's first milestone anchors everything: the diamond renders at
/// [`MonthBlock::position_px`], and the label lines stack from there toward
/// the block's side of the bar. The remaining milestones contribute lines but
/// no shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBlock {
    month: MonthKey,
    side: LabelSide,
    milestones: Vec<Milestone>,
    position_px: f64,
    width_budget_px: f64,
    lines: SmallVec<[String; 2]>,
    above_height_px: f64,
    below_height_px: f64,
    marker: MarkerStyle,
}

impl MonthBlock {
    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn side(&self) -> LabelSide {
        self.side
    }

    /// Day-ascending milestones of this month.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn position_px(&self) -> f64 {
        self.position_px
    }

    pub fn width_budget_px(&self) -> f64 {
        self.width_budget_px
    }

    /// Truncated label lines, day-ascending. The first line sits closest to
    /// the bar; the stack grows away from it.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn above_height_px(&self) -> f64 {
        self.above_height_px
    }

    pub fn below_height_px(&self) -> f64 {
        self.below_height_px
    }

    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }

    /// Index of the milestone that renders the diamond: always the bucket
    /// head after the day-ascending sort.
    pub fn shape_anchor(&self) -> usize {
        0
    }
}

/// The laid-out row: geometry the renderer can draw without further math.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutRow {
    bar: Option<BarGeom>,
    phases: Vec<PhaseGeom>,
    blocks: Vec<MonthBlock>,
    max_above_px: f64,
    max_below_px: f64,
    row_height_px: f64,
}

impl LaidOutRow {
    pub fn bar(&self) -> Option<&BarGeom> {
        self.bar.as_ref()
    }

    pub fn phases(&self) -> &[PhaseGeom] {
        &self.phases
    }

    /// Month blocks in ascending month order.
    pub fn blocks(&self) -> &[MonthBlock] {
        &self.blocks
    }

    pub fn max_above_px(&self) -> f64 {
        self.max_above_px
    }

    pub fn max_below_px(&self) -> f64 {
        self.max_below_px
    }

    pub fn row_height_px(&self) -> f64 {
        self.row_height_px
    }

    /// Top of the bar relative to the row's baseline y.
    pub fn bar_y_px(&self, config: &LayoutConfig) -> f64 {
        config.row_padding_px / 2.0 + self.max_above_px
    }

    pub fn is_empty(&self) -> bool {
        self.bar.is_none() && self.blocks.is_empty()
    }

    fn minimal(config: &LayoutConfig) -> Self {
        Self {
            bar: None,
            phases: Vec::new(),
            blocks: Vec::new(),
            max_above_px: 0.0,
            max_below_px: 0.0,
            row_height_px: config.minimum_row_height_px,
        }
    }
}

fn marker_for(milestones: &[Milestone]) -> MarkerStyle {
    if milestones.len() >= 2 {
        return MarkerStyle::Multiple;
    }
    match milestones.first().map(Milestone::status) {
        Some(MilestoneStatus::Completed) => MarkerStyle::Completed,
        _ => MarkerStyle::Incomplete,
    }
}

fn bar_geometry(row: &ProjectRow, window: &Window) -> Option<BarGeom> {
    let (start, end) = (row.bar_start()?, row.bar_end()?);
    // A degenerate bar (end before start) is skipped; milestones still lay out.
    if end < start || !window.overlaps(start, end) {
        return None;
    }
    Some(BarGeom {
        x_start: pixel_of(start, window),
        x_end: pixel_of(end, window),
    })
}

fn phase_geometry(row: &ProjectRow, window: &Window) -> Vec<PhaseGeom> {
    row.phases()
        .iter()
        .filter(|phase| !phase.is_generic() && phase.start() <= phase.end())
        .filter(|phase| window.overlaps(phase.start(), phase.end()))
        .map(|phase| PhaseGeom {
            name: phase.name().to_owned(),
            x_start: pixel_of(phase.start(), window),
            x_end: pixel_of(phase.end(), window),
            color: phase.color().map(str::to_owned),
        })
        .collect()
}

/// Marker x for the bucket head, flush inside the bar when it lands on the
/// bar's last day. When the bar collapses to a point the inset is clamped at
/// the bar start so the diamond never escapes to the left.
fn marker_position(
    anchor: NaiveDate,
    row: &ProjectRow,
    bar: Option<&BarGeom>,
    window: &Window,
    config: &LayoutConfig,
) -> f64 {
    let x = bar_x_end(anchor, row.bar_end(), window, config.marker_size_px);
    match bar {
        Some(bar) if row.bar_end() == Some(anchor) => x.max(bar.x_start),
        _ => x,
    }
}

/// Lays out one project row against a window. Pure and total: malformed
/// input degrades to a minimal, well-formed layout instead of failing.
pub fn compute_row_layout(
    row: &ProjectRow,
    window: &Window,
    config: &LayoutConfig,
) -> LaidOutRow {
    let mut in_window: Vec<Milestone> = row
        .milestones()
        .iter()
        .filter(|m| window.contains(m.date()))
        .cloned()
        .collect();
    // One stable pre-sort serves bucketing and neighbor analysis alike.
    in_window.sort_by_key(Milestone::date);

    let bar = bar_geometry(row, window);
    if in_window.is_empty() && bar.is_none() {
        return LaidOutRow::minimal(config);
    }

    let phases = if bar.is_some() {
        phase_geometry(row, window)
    } else {
        Vec::new()
    };

    let mut buckets = BTreeMap::<MonthKey, Vec<Milestone>>::new();
    for milestone in &in_window {
        buckets
            .entry(milestone.month_key())
            .or_default()
            .push(milestone.clone());
    }

    let mut above_dates = Vec::new();
    let mut below_dates = Vec::new();
    for milestone in &in_window {
        match milestone.month_key().side() {
            LabelSide::Above => above_dates.push(milestone.date()),
            LabelSide::Below => below_dates.push(milestone.date()),
        }
    }

    let mut blocks = Vec::with_capacity(buckets.len());
    let mut max_above_px = 0.0f64;
    let mut max_below_px = 0.0f64;

    for (month, milestones) in buckets {
        let side = month.side();
        let same_side = match side {
            LabelSide::Above => above_dates.as_slice(),
            LabelSide::Below => below_dates.as_slice(),
        };
        let width_budget_px = neighbors::budget_months(
            same_side,
            month,
            config.budget_floor_months,
            config.budget_cap_months,
        ) * window.month_width_px();

        let lines: SmallVec<[String; 2]> = labels::compose_lines(&milestones)
            .into_iter()
            .map(|line| labels::truncate_to_width(&line, width_budget_px, config.font_size_px))
            .collect();
        let non_empty = lines.iter().filter(|line| !line.is_empty()).count();
        let stack_px = height::stack_height_px(non_empty, config);
        let (above_height_px, below_height_px) = match side {
            LabelSide::Above => (stack_px, 0.0),
            LabelSide::Below => (0.0, stack_px),
        };
        max_above_px = max_above_px.max(above_height_px);
        max_below_px = max_below_px.max(below_height_px);

        let anchor = milestones[0].date();
        blocks.push(MonthBlock {
            month,
            side,
            position_px: marker_position(anchor, row, bar.as_ref(), window, config),
            width_budget_px,
            lines,
            above_height_px,
            below_height_px,
            marker: marker_for(&milestones),
            milestones,
        });
    }

    let row_height_px = height::row_height_px(max_above_px, max_below_px, row.name(), config);

    LaidOutRow {
        bar,
        phases,
        blocks,
        max_above_px,
        max_below_px,
        row_height_px,
    }
}

/// Lays out a page of rows. Rows are independent by construction, so this
/// fans out across threads for large portfolios.
pub fn layout_rows(rows: &[ProjectRow], window: &Window, config: &LayoutConfig) -> Vec<LaidOutRow> {
    rows.par_iter()
        .map(|row| compute_row_layout(row, window, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{compute_row_layout, layout_rows, MarkerStyle};
    use crate::layout::window::Window;
    use crate::layout::LayoutConfig;
    use crate::model::{
        LabelSide, Milestone, MilestoneStatus, MonthKey, Phase, ProjectId, ProjectRow,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn window() -> Window {
        Window::new(date(2025, 1, 1), date(2026, 1, 1), 100.0)
    }

    fn config() -> LayoutConfig {
        LayoutConfig::new(10.0).with_marker_size(10.0)
    }

    fn row(milestones: Vec<Milestone>) -> ProjectRow {
        ProjectRow::new(ProjectId::new("p1").expect("id"), "Row").with_milestones(milestones)
    }

    fn ms(d: NaiveDate, label: &str, status: MilestoneStatus) -> Milestone {
        Milestone::new(d, label, status)
    }

    #[test]
    fn empty_row_gets_a_minimal_layout() {
        let layout = compute_row_layout(&row(Vec::new()), &window(), &config());
        assert!(layout.is_empty());
        assert!(layout.blocks().is_empty());
        assert_eq!(layout.row_height_px(), 28.0);
    }

    #[test]
    fn inverted_window_produces_minimal_layouts() {
        let w = Window::new(date(2026, 1, 1), date(2025, 1, 1), 100.0);
        let r = row(vec![ms(date(2025, 6, 15), "X", MilestoneStatus::Completed)])
            .with_bar(date(2025, 1, 1), date(2025, 12, 31));
        let layout = compute_row_layout(&r, &w, &config());
        assert!(layout.is_empty());
        assert_eq!(layout.row_height_px(), 28.0);
    }

    #[test]
    fn degenerate_bar_is_skipped_but_milestones_lay_out() {
        let r = row(vec![ms(date(2025, 6, 15), "X", MilestoneStatus::Completed)])
            .with_bar(date(2025, 12, 31), date(2025, 1, 1));
        let layout = compute_row_layout(&r, &window(), &config());
        assert!(layout.bar().is_none());
        assert_eq!(layout.blocks().len(), 1);
    }

    #[test]
    fn out_of_window_milestones_are_dropped_entirely() {
        // One day past the window end.
        let r = row(vec![ms(date(2026, 1, 2), "Late", MilestoneStatus::Incomplete)]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert!(layout.blocks().is_empty());
        assert_eq!(layout.row_height_px(), 28.0);
    }

    #[test]
    fn window_edges_are_inclusive() {
        let r = row(vec![
            ms(date(2025, 1, 1), "First", MilestoneStatus::Incomplete),
            ms(date(2026, 1, 1), "Last", MilestoneStatus::Incomplete),
        ]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert_eq!(layout.blocks().len(), 2);
    }

    #[test]
    fn same_month_milestones_share_one_block_and_one_marker() {
        let r = row(vec![
            ms(date(2025, 4, 11), "Mexico", MilestoneStatus::Completed),
            ms(date(2025, 4, 4), "Spain", MilestoneStatus::Incomplete),
        ]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert_eq!(layout.blocks().len(), 1);

        let block = &layout.blocks()[0];
        assert_eq!(block.month(), MonthKey::new(2025, 4).expect("month"));
        assert_eq!(block.side(), LabelSide::Below);
        assert_eq!(block.marker(), MarkerStyle::Multiple);
        assert_eq!(block.shape_anchor(), 0);
        // Day-ascending despite insertion order.
        assert_eq!(block.lines(), ["4th: Spain", "11th: Mexico"]);
        assert_eq!(block.milestones()[0].label(), "Spain");
        // Anchored at the April 4th x, not April 11th.
        let expected_x = crate::layout::pixel_of(date(2025, 4, 4), &window());
        assert_eq!(block.position_px(), expected_x);
    }

    #[test]
    fn adjacent_months_alternate_sides() {
        let r = row(vec![
            ms(date(2025, 3, 10), "March", MilestoneStatus::Incomplete),
            ms(date(2025, 4, 10), "April", MilestoneStatus::Incomplete),
        ]);
        let layout = compute_row_layout(&r, &window(), &config());
        let sides: Vec<LabelSide> = layout.blocks().iter().map(|b| b.side()).collect();
        assert_eq!(sides, [LabelSide::Above, LabelSide::Below]);

        // Different parity → neither constrains the other; both take the cap.
        for block in layout.blocks() {
            assert_eq!(block.width_budget_px(), 24.0 * 100.0);
        }
    }

    #[test]
    fn same_side_crowding_constrains_budgets() {
        let r = row(vec![
            ms(date(2025, 1, 15), "One", MilestoneStatus::Incomplete),
            ms(date(2025, 3, 15), "Two", MilestoneStatus::Incomplete),
            ms(date(2025, 5, 15), "Three", MilestoneStatus::Incomplete),
        ]);
        let layout = compute_row_layout(&r, &window(), &config());
        let budgets: Vec<f64> = layout.blocks().iter().map(|b| b.width_budget_px()).collect();
        assert_eq!(budgets[0], 400.0); // right neighbor only: 2 × 2 months
        assert!((budgets[1] - 360.0).abs() < 1e-9); // 0.9 × 4 months
        assert_eq!(budgets[2], 400.0);
    }

    #[test]
    fn single_completed_milestone_renders_filled_marker() {
        let r = row(vec![ms(date(2025, 6, 15), "Done", MilestoneStatus::Completed)]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert_eq!(layout.blocks()[0].marker(), MarkerStyle::Completed);
    }

    #[test]
    fn bar_end_milestone_is_pulled_inside_the_bar() {
        let bar_end = date(2025, 6, 30);
        let r = row(vec![ms(bar_end, "Cutover", MilestoneStatus::Incomplete)])
            .with_bar(date(2025, 1, 1), bar_end);
        let layout = compute_row_layout(&r, &window(), &config());
        let bar = layout.bar().expect("bar");
        let block = &layout.blocks()[0];
        assert_eq!(block.position_px(), bar.x_end() - 5.0);
        assert!(block.position_px() < bar.x_end());
    }

    #[test]
    fn point_bar_keeps_the_marker_at_the_bar_start() {
        let day = date(2025, 6, 30);
        let r = row(vec![ms(day, "Point", MilestoneStatus::Incomplete)]).with_bar(day, day);
        let layout = compute_row_layout(&r, &window(), &config());
        let bar = layout.bar().expect("bar");
        assert_eq!(layout.blocks()[0].position_px(), bar.x_start());
    }

    #[test]
    fn heights_accumulate_per_side() {
        let r = row(vec![
            // March (above): two milestones → two lines.
            ms(date(2025, 3, 4), "A", MilestoneStatus::Incomplete),
            ms(date(2025, 3, 20), "B", MilestoneStatus::Incomplete),
            // June (below): one line.
            ms(date(2025, 6, 15), "C", MilestoneStatus::Incomplete),
        ]);
        let cfg = config();
        let layout = compute_row_layout(&r, &window(), &cfg);
        assert_eq!(layout.max_above_px(), 2.0 * 12.0 + 2.0);
        assert_eq!(layout.max_below_px(), 12.0 + 2.0);
        // 26 + 12 + 14 + 2
        assert_eq!(layout.row_height_px(), 54.0);
        assert!(
            layout.row_height_px()
                >= layout.max_above_px() + cfg.bar_height_px + layout.max_below_px()
        );
        assert_eq!(layout.bar_y_px(&cfg), 1.0 + 26.0);
    }

    #[test]
    fn generic_phases_collapse_to_a_plain_bar() {
        let r = row(Vec::new())
            .with_bar(date(2025, 1, 1), date(2025, 12, 31))
            .with_phases(vec![Phase::new(
                "Unphased",
                date(2025, 1, 1),
                date(2025, 12, 31),
                None,
            )]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert!(layout.bar().is_some());
        assert!(layout.phases().is_empty());
    }

    #[test]
    fn named_phases_emit_segments() {
        let r = row(Vec::new())
            .with_bar(date(2025, 1, 1), date(2025, 6, 30))
            .with_phases(vec![
                Phase::new("Design", date(2025, 1, 1), date(2025, 3, 1), None),
                Phase::new("Build", date(2025, 3, 1), date(2025, 6, 30), None),
            ]);
        let layout = compute_row_layout(&r, &window(), &config());
        assert_eq!(layout.phases().len(), 2);
        assert_eq!(layout.phases()[0].name(), "Design");
        assert!(layout.phases()[0].x_start() <= layout.phases()[0].x_end());
    }

    #[test]
    fn crowded_year_fills_every_month_bucket() {
        let r = crate::model::fixtures::crowded_row(24);
        let layout = compute_row_layout(&r, &window(), &config());
        assert_eq!(layout.blocks().len(), 12);
        for block in layout.blocks() {
            // Two milestones per month in this fixture.
            assert_eq!(block.marker(), MarkerStyle::Multiple);
            assert_eq!(block.lines().len(), 2);
            assert!(block.width_budget_px() >= 2.0 * 100.0);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let r = row(vec![
            ms(date(2025, 4, 4), "Spain", MilestoneStatus::Incomplete),
            ms(date(2025, 4, 11), "Mexico", MilestoneStatus::Completed),
            ms(date(2025, 6, 15), "SG3", MilestoneStatus::Incomplete),
        ])
        .with_bar(date(2025, 1, 1), date(2025, 12, 31));
        let a = compute_row_layout(&r, &window(), &config());
        let b = compute_row_layout(&r, &window(), &config());
        assert_eq!(a, b);
    }

    #[test]
    fn batch_layout_matches_per_row_layout() {
        let rows = vec![
            row(vec![ms(date(2025, 6, 15), "X", MilestoneStatus::Completed)]),
            row(Vec::new()),
        ];
        let batch = layout_rows(&rows, &window(), &config());
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], compute_row_layout(&rows[0], &window(), &config()));
        assert_eq!(batch[1], compute_row_layout(&rows[1], &window(), &config()));
    }
}
