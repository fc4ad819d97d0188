// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::{
    axis_width_px, layout_rows, pixel_of, LaidOutRow, LayoutConfig, MarkerStyle, MonthBlock,
    Window,
};
use crate::model::{LabelSide, MonthKey, ProjectRow};

use super::{
    Cells, CellsError, BAR_CELL, MARKER_FILLED, MARKER_MULTIPLE, MARKER_OUTLINE, PHASE_CELLS,
};

/// Scaling and framing knobs for the character renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Layout pixels represented by one character cell.
    pub px_per_cell: f64,
    /// Width of the left project-name panel, in cells.
    pub name_panel_cols: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            px_per_cell: 10.0,
            name_panel_cols: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapRenderError {
    NonPositiveScale { px_per_cell: f64 },
    Cells(CellsError),
}

impl fmt::Display for RoadmapRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { px_per_cell } => {
                write!(f, "px_per_cell must be positive and finite, got {px_per_cell}")
            }
            Self::Cells(err) => write!(f, "cell grid error: {err}"),
        }
    }
}

impl std::error::Error for RoadmapRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cells(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CellsError> for RoadmapRenderError {
    fn from(err: CellsError) -> Self {
        Self::Cells(err)
    }
}

struct Frame {
    axis_cells: usize,
    name_panel_cols: usize,
    px_per_cell: f64,
}

impl Frame {
    fn axis_col(&self, px: f64) -> usize {
        let cell = (px / self.px_per_cell).round() as usize;
        self.name_panel_cols + 1 + cell.min(self.axis_cells.saturating_sub(1))
    }
}

fn marker_char(style: MarkerStyle) -> char {
    match style {
        MarkerStyle::Completed => MARKER_FILLED,
        MarkerStyle::Incomplete => MARKER_OUTLINE,
        MarkerStyle::Multiple => MARKER_MULTIPLE,
    }
}

fn side_rows(layout: &LaidOutRow, side: LabelSide) -> usize {
    layout
        .blocks()
        .iter()
        .filter(|block| block.side() == side)
        .map(visible_lines)
        .max()
        .unwrap_or(0)
}

fn visible_lines(block: &MonthBlock) -> usize {
    block.lines().iter().filter(|line| !line.is_empty()).count()
}

fn fit_name(name: &str, cols: usize) -> String {
    if cols == 0 {
        return String::new();
    }
    if name.chars().count() <= cols {
        return name.to_owned();
    }
    let mut out: String = name.chars().take(cols - 1).collect();
    out.push('…');
    out
}

fn draw_header(
    grid: &mut Cells,
    window: &Window,
    frame: &Frame,
    rule_y: usize,
) -> Result<(), CellsError> {
    if !window.is_empty() {
        let mut month = MonthKey::of(window.start());
        while month.first_day() <= window.end() {
            let next = month.offset(1);
            let col = frame.axis_col(pixel_of(month.first_day(), window));
            let clip = if next.first_day() <= window.end() {
                Some(frame.axis_col(pixel_of(next.first_day(), window)))
            } else {
                None
            };
            let label = if month.month() == 1 || month == MonthKey::of(window.start()) {
                month.first_day().format("%b %y").to_string()
            } else {
                month.first_day().format("%b").to_string()
            };
            grid.write_clipped(col, 0, &label, clip)?;
            month = next;
        }
    }

    grid.set(frame.name_panel_cols, 0, '│')?;
    grid.fill_run(0, grid.width().saturating_sub(1), rule_y, '─')?;
    grid.set(frame.name_panel_cols, rule_y, '┼')?;
    Ok(())
}

fn draw_row(
    grid: &mut Cells,
    row: &ProjectRow,
    layout: &LaidOutRow,
    frame: &Frame,
    y_top: usize,
) -> Result<usize, CellsError> {
    let above_rows = side_rows(layout, LabelSide::Above);
    let below_rows = side_rows(layout, LabelSide::Below);
    let row_cells = above_rows + 1 + below_rows;
    let bar_y = y_top + above_rows;

    for y in y_top..y_top + row_cells {
        grid.set(frame.name_panel_cols, y, '│')?;
    }

    grid.write_clipped(0, bar_y, &fit_name(row.name(), frame.name_panel_cols), None)?;

    if let Some(bar) = layout.bar() {
        grid.fill_run(
            frame.axis_col(bar.x_start()),
            frame.axis_col(bar.x_end()),
            bar_y,
            BAR_CELL,
        )?;
        for (idx, phase) in layout.phases().iter().enumerate() {
            grid.fill_run(
                frame.axis_col(phase.x_start()),
                frame.axis_col(phase.x_end()),
                bar_y,
                PHASE_CELLS[idx % PHASE_CELLS.len()],
            )?;
        }
    }

    for block in layout.blocks() {
        let col = frame.axis_col(block.position_px());
        let lines = block.lines().iter().filter(|line| !line.is_empty());
        for (idx, line) in lines.enumerate() {
            let y = match block.side() {
                LabelSide::Above => bar_y - 1 - idx,
                LabelSide::Below => bar_y + 1 + idx,
            };
            grid.write_clipped(col, y, line, None)?;
        }
        grid.set(col, bar_y, marker_char(block.marker()))?;
    }

    Ok(row_cells)
}

/// Renders a page of project rows as Unicode text: a month header, a name
/// panel, and one bar line per row with label stacks above and below.
pub fn render_roadmap_unicode(
    rows: &[ProjectRow],
    window: &Window,
    config: &LayoutConfig,
    options: &RenderOptions,
) -> Result<String, RoadmapRenderError> {
    if !(options.px_per_cell > 0.0) || !options.px_per_cell.is_finite() {
        return Err(RoadmapRenderError::NonPositiveScale {
            px_per_cell: options.px_per_cell,
        });
    }

    let layouts = layout_rows(rows, window, config);

    let frame = Frame {
        axis_cells: ((axis_width_px(window) / options.px_per_cell).ceil() as usize).max(1),
        name_panel_cols: options.name_panel_cols,
        px_per_cell: options.px_per_cell,
    };

    let header_cells = 2;
    let body_cells: usize = layouts
        .iter()
        .map(|layout| side_rows(layout, LabelSide::Above) + 1 + side_rows(layout, LabelSide::Below))
        .sum();

    let width = frame.name_panel_cols + 1 + frame.axis_cells;
    let mut grid = Cells::new(width, header_cells + body_cells)?;

    draw_header(&mut grid, window, &frame, header_cells - 1)?;

    let mut y = header_cells;
    for (row, layout) in rows.iter().zip(&layouts) {
        y += draw_row(&mut grid, row, layout, &frame, y)?;
    }

    Ok(grid.to_string())
}
