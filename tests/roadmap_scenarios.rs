// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end layout scenarios over the public API, from single isolated
//! milestones through same-side crowding and feed-to-render round trips.

use chrono::NaiveDate;

use larissa::feed::parse_portfolio;
use larissa::layout::{
    compute_row_layout, estimate_text_width, pixel_of, LayoutConfig, MarkerStyle, Window,
};
use larissa::model::{LabelSide, Milestone, MilestoneStatus, MonthKey, ProjectId, ProjectRow};
use larissa::render::{render_roadmap_unicode, RenderOptions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn window() -> Window {
    Window::new(date(2025, 1, 1), date(2026, 1, 1), 100.0)
}

fn config() -> LayoutConfig {
    LayoutConfig::new(10.0).with_marker_size(10.0)
}

fn row(name: &str, milestones: Vec<Milestone>) -> ProjectRow {
    ProjectRow::new(ProjectId::new("prj:test").expect("id"), name).with_milestones(milestones)
}

fn ms(d: NaiveDate, label: &str, status: MilestoneStatus) -> Milestone {
    Milestone::new(d, label, status)
}

#[test]
fn single_isolated_milestone() {
    let r = row(
        "Launch",
        vec![ms(date(2025, 6, 15), "SG3 Launch", MilestoneStatus::Incomplete)],
    );
    let layout = compute_row_layout(&r, &window(), &config());

    assert_eq!(layout.blocks().len(), 1);
    let block = &layout.blocks()[0];
    assert_eq!(block.month(), MonthKey::new(2025, 6).expect("month"));
    // June is even → below the bar.
    assert_eq!(block.side(), LabelSide::Below);
    // Single milestone: bare label, no date prefix.
    assert_eq!(block.lines(), ["SG3 Launch"]);
    assert_eq!(block.marker(), MarkerStyle::Incomplete);
    // No same-side neighbor anywhere: generous cap of 24 months.
    assert_eq!(block.width_budget_px(), 2400.0);
    // June 15th is 165 days in: 165 / 30.44 × 100.
    assert!((block.position_px() - 542.05).abs() < 0.01);
    assert_eq!(layout.row_height_px(), 28.0);
}

#[test]
fn two_same_month_milestones_stack_under_one_marker() {
    let r = row(
        "LATAM",
        vec![
            ms(date(2025, 4, 4), "Spain", MilestoneStatus::Incomplete),
            ms(date(2025, 4, 11), "Mexico", MilestoneStatus::Completed),
        ],
    );
    let layout = compute_row_layout(&r, &window(), &config());

    assert_eq!(layout.blocks().len(), 1);
    let block = &layout.blocks()[0];
    assert_eq!(block.side(), LabelSide::Below);
    assert_eq!(block.lines(), ["4th: Spain", "11th: Mexico"]);
    assert_eq!(block.marker(), MarkerStyle::Multiple);
    assert_eq!(block.position_px(), pixel_of(date(2025, 4, 4), &window()));
    // Two line heights land below the bar.
    assert_eq!(block.below_height_px(), 2.0 * 12.0 + 2.0);
    assert_eq!(block.above_height_px(), 0.0);
    assert_eq!(layout.max_below_px(), 26.0);
}

#[test]
fn adjacent_months_alternate_and_do_not_constrain_each_other() {
    let r = row(
        "Alternating",
        vec![
            ms(date(2025, 3, 10), "March drop", MilestoneStatus::Incomplete),
            ms(date(2025, 4, 10), "April drop", MilestoneStatus::Incomplete),
        ],
    );
    let layout = compute_row_layout(&r, &window(), &config());

    let sides: Vec<LabelSide> = layout.blocks().iter().map(|b| b.side()).collect();
    assert_eq!(sides, [LabelSide::Above, LabelSide::Below]);
    for block in layout.blocks() {
        assert_eq!(block.width_budget_px(), 2400.0);
    }
}

#[test]
fn same_side_crowding_pins_the_budget_formulas() {
    let cfg = config();
    let r = row(
        "Crowded",
        vec![
            ms(date(2025, 1, 15), "January milestone", MilestoneStatus::Incomplete),
            ms(date(2025, 3, 15), "March milestone with a very long label indeed, long enough to clip", MilestoneStatus::Incomplete),
            ms(date(2025, 5, 15), "May milestone", MilestoneStatus::Incomplete),
        ],
    );
    let layout = compute_row_layout(&r, &window(), &cfg);

    let budgets: Vec<f64> = layout.blocks().iter().map(|b| b.width_budget_px()).collect();
    // Edge buckets: right/left neighbor two months out → 2 × 2 = 4 months.
    assert_eq!(budgets[0], 400.0);
    assert_eq!(budgets[2], 400.0);
    // Middle bucket: 9/10 of the 4-month span between its neighbors.
    assert!((budgets[1] - 360.0).abs() < 1e-9);

    // Horizontal non-extension: every line fits its block's budget as
    // measured by the same estimator the truncator used.
    for block in layout.blocks() {
        for line in block.lines() {
            let width = estimate_text_width(line, cfg.font_size_px);
            assert!(
                width <= block.width_budget_px(),
                "line {line:?} is {width}px wide for a {}px budget",
                block.width_budget_px()
            );
        }
    }
    // The long March label actually got clipped.
    assert!(layout.blocks()[1].lines()[0].ends_with('…'));
}

#[test]
fn milestone_on_bar_end_stays_flush_inside() {
    let bar_end = date(2025, 6, 30);
    let r = row(
        "Cutover",
        vec![ms(bar_end, "Cutover", MilestoneStatus::Incomplete)],
    )
    .with_bar(date(2025, 1, 1), bar_end);
    let layout = compute_row_layout(&r, &window(), &config());

    let bar = layout.bar().expect("bar");
    let block = &layout.blocks()[0];
    assert_eq!(block.position_px(), bar.x_end() - 5.0);
}

#[test]
fn out_of_window_milestone_contributes_nothing() {
    let w = Window::new(date(2025, 1, 1), date(2025, 12, 31), 100.0);
    let r = row(
        "Future",
        vec![ms(date(2026, 2, 1), "Next year", MilestoneStatus::Incomplete)],
    );
    let layout = compute_row_layout(&r, &w, &config());

    assert!(layout.blocks().is_empty());
    assert!(layout.is_empty());
    assert_eq!(layout.row_height_px(), 28.0);
}

#[test]
fn layouts_are_bitwise_stable_across_calls() {
    let r = row(
        "Stable",
        vec![
            ms(date(2025, 1, 15), "One", MilestoneStatus::Completed),
            ms(date(2025, 4, 4), "Two", MilestoneStatus::Incomplete),
            ms(date(2025, 4, 11), "Three", MilestoneStatus::Incomplete),
        ],
    )
    .with_bar(date(2025, 1, 1), date(2025, 12, 31));

    let first = compute_row_layout(&r, &window(), &config());
    for _ in 0..10 {
        assert_eq!(compute_row_layout(&r, &window(), &config()), first);
    }
}

#[test]
fn row_height_always_covers_both_stacks() {
    let cfg = config();
    for month_width in [30.0, 100.0, 300.0] {
        let w = Window::new(date(2025, 1, 1), date(2026, 1, 1), month_width);
        let r = row(
            "Heights",
            vec![
                ms(date(2025, 3, 4), "A", MilestoneStatus::Incomplete),
                ms(date(2025, 3, 20), "B", MilestoneStatus::Incomplete),
                ms(date(2025, 3, 28), "C", MilestoneStatus::Incomplete),
                ms(date(2025, 6, 15), "D", MilestoneStatus::Incomplete),
            ],
        );
        let layout = compute_row_layout(&r, &w, &cfg);
        assert!(
            layout.row_height_px()
                >= layout.max_above_px() + cfg.bar_height_px + layout.max_below_px()
        );
        assert!(layout.row_height_px() >= cfg.minimum_row_height_px);
    }
}

#[test]
fn every_month_bucket_renders_exactly_one_marker() {
    let r = row(
        "Markers",
        vec![
            ms(date(2025, 4, 4), "A", MilestoneStatus::Completed),
            ms(date(2025, 4, 11), "B", MilestoneStatus::Completed),
            ms(date(2025, 4, 22), "C", MilestoneStatus::Incomplete),
            ms(date(2025, 7, 1), "D", MilestoneStatus::Completed),
        ],
    );
    let layout = compute_row_layout(&r, &window(), &config());

    // One block (and so one marker) per distinct month, months ascending.
    let months: Vec<String> = layout.blocks().iter().map(|b| b.month().to_string()).collect();
    assert_eq!(months, ["2025-04", "2025-07"]);
    assert_eq!(layout.blocks()[0].marker(), MarkerStyle::Multiple);
    assert_eq!(layout.blocks()[1].marker(), MarkerStyle::Completed);
}

#[test]
fn feed_to_render_round_trip() {
    let portfolio = parse_portfolio(
        r#"{
            "projects": [{
                "id": "prj:emea",
                "name": "EMEA Market Rollout",
                "bar_start": "2025-01-01",
                "bar_end": "2025-12-31",
                "milestones": [
                    { "date": "2025-04-04", "label": "Spain", "status": "Complete" },
                    { "date": "2025-04-11", "label": "Mexico", "status": "Completed" },
                    { "date": "2025-06-15", "label": "SG3 Launch", "status": "Open" },
                    { "date": "bogus", "label": "Dropped" }
                ]
            }]
        }"#,
    )
    .expect("portfolio");
    assert_eq!(portfolio.dropped_milestones(), 1);

    let w = Window::new(date(2025, 1, 1), date(2025, 12, 31), 100.0);
    let rendered = render_roadmap_unicode(
        portfolio.rows(),
        &w,
        &LayoutConfig::default(),
        &RenderOptions::default(),
    )
    .expect("render");

    assert!(rendered.contains("EMEA Market Rollout"));
    assert!(rendered.contains("4th: Spain"));
    assert!(rendered.contains("11th: Mexico"));
    assert!(rendered.contains("SG3 Launch"));
    assert!(rendered.contains('◈'));
    assert!(rendered.contains('◇'));
}
