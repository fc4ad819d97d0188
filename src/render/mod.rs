// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode rendering of laid-out roadmap rows.
//!
//! The engine mandates no renderer technology; this one maps layout pixels to
//! character cells, which keeps the whole `LaidOutRow` contract observable in
//! tests and gives the CLI something to print.

use std::fmt;

pub mod roadmap;

pub use roadmap::{render_roadmap_unicode, RenderOptions, RoadmapRenderError};

pub const MARKER_FILLED: char = '◆';
pub const MARKER_OUTLINE: char = '◇';
pub const MARKER_MULTIPLE: char = '◈';
pub const BAR_CELL: char = '█';
pub const PHASE_CELLS: [char; 3] = ['▓', '▒', '░'];

/// A fixed-size character grid with deterministic last-writer-wins cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cells {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Cells {
    /// Creates a grid filled with spaces.
    pub fn new(width: usize, height: usize) -> Result<Self, CellsError> {
        let len = width
            .checked_mul(height)
            .ok_or(CellsError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CellsError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CellsError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at the right edge
    /// and at an optional clip column. Errors only when `y` is out of bounds.
    pub fn write_clipped(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        clip_at: Option<usize>,
    ) -> Result<(), CellsError> {
        if y >= self.height {
            return Err(CellsError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let limit = clip_at.unwrap_or(self.width).min(self.width);
        for (offset, ch) in text.chars().enumerate() {
            let col = x + offset;
            if col >= limit {
                break;
            }
            self.set(col, y, ch)?;
        }

        Ok(())
    }

    /// Fills the inclusive run `x0..=x1` on row `y` with `ch`, clipping at
    /// the right edge.
    pub fn fill_run(&mut self, x0: usize, x1: usize, y: usize, ch: char) -> Result<(), CellsError> {
        if y >= self.height {
            return Err(CellsError::OutOfBounds {
                x: x0,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in min_x..=max_x.min(self.width.saturating_sub(1)) {
            self.set(x, y, ch)?;
        }
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CellsError> {
        if !self.in_bounds(x, y) {
            return Err(CellsError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

impl fmt::Display for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            let mut end = row.len();
            while end > 0 && row[end - 1] == ' ' {
                end -= 1;
            }
            for ch in &row[..end] {
                fmt::Write::write_char(f, *ch)?;
            }
            if y + 1 < self.height {
                fmt::Write::write_char(f, '\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellsError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CellsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "cell grid area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for CellsError {}
