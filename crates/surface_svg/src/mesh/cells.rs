//! Cell scanning: turns a grid of corners into quadrilaterals.
//!
//! Cells are visited with `i` in the outer loop and `j` in the inner loop, both
//! increasing. Without a depth buffer the output relies on this order to draw the
//! far side of the surface first, so it is never changed.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mesh::{Corner, CornerEvaluator};
use crate::svg::HexColor;

/// Corner offsets of a cell in drawing order: `(i+1, j)`, `(i, j)`, `(i, j+1)`, `(i+1, j+1)`.
pub const WINDING: [(u32, u32); 4] = [(1, 0), (0, 0), (0, 1), (1, 1)];

/// Which corner of a cell provides the polygon's fill color.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillCorner {
    /// The first corner in [`WINDING`] order, `(i+1, j)`.
    First,
    /// The last corner in [`WINDING`] order, `(i+1, j+1)`. Matches the output of the
    /// classic surface plot.
    #[default]
    Last,
}

/// One projected quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    /// Cell indices `(i, j)`.
    pub cell: (u32, u32),
    /// Canvas points in [`WINDING`] order.
    pub points: [DVec2; 4],
    /// Fill color chosen by the [`FillCorner`] policy.
    pub fill: HexColor,
}

/// Outcome of scanning a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellOutcome {
    Drawn(Polygon),
    /// At least one corner was undefined; the cell contributes nothing.
    Skipped {
        cell: (u32, u32),
        /// First invalid corner encountered, in [`WINDING`] order.
        corner: (u32, u32),
        /// Its non-finite height.
        z: f64,
    },
}

impl CellOutcome {
    pub fn cell(&self) -> (u32, u32) {
        match *self {
            CellOutcome::Drawn(ref polygon) => polygon.cell,
            CellOutcome::Skipped { cell, .. } => cell,
        }
    }

    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            CellOutcome::Drawn(polygon) => Some(polygon),
            CellOutcome::Skipped { .. } => None,
        }
    }
}

/// Lazy iterator over every cell of a grid in scan order.
pub struct CellScan<'a> {
    evaluator: CornerEvaluator<'a>,
    fill: FillCorner,
    cells: u32,
    i: u32,
    j: u32,
}

impl<'a> CellScan<'a> {
    pub fn new(evaluator: CornerEvaluator<'a>, fill: FillCorner) -> Self {
        Self {
            cells: evaluator.spec().cells(),
            evaluator,
            fill,
            i: 0,
            j: 0,
        }
    }

    /// Drops skipped cells and yields only the drawn polygons.
    pub fn polygons(self) -> impl Iterator<Item = Polygon> + 'a {
        self.filter_map(CellOutcome::into_polygon)
    }

    fn scan_cell(&self, i: u32, j: u32) -> CellOutcome {
        let mut points = [DVec2::ZERO; 4];
        let mut colors = [HexColor::BLACK; 4];
        for (k, (di, dj)) in WINDING.into_iter().enumerate() {
            let (ci, cj) = (i + di, j + dj);
            match self.evaluator.corner(ci, cj) {
                Corner::Valid { device, color, .. } => {
                    points[k] = device;
                    colors[k] = color;
                }
                Corner::Invalid { z, .. } => {
                    return CellOutcome::Skipped {
                        cell: (i, j),
                        corner: (ci, cj),
                        z,
                    };
                }
            }
        }
        let fill = match self.fill {
            FillCorner::First => colors[0],
            FillCorner::Last => colors[3],
        };
        CellOutcome::Drawn(Polygon {
            cell: (i, j),
            points,
            fill,
        })
    }
}

impl Iterator for CellScan<'_> {
    type Item = CellOutcome;

    fn next(&mut self) -> Option<CellOutcome> {
        if self.i >= self.cells {
            return None;
        }
        let outcome = self.scan_cell(self.i, self.j);
        self.j += 1;
        if self.j >= self.cells {
            self.j = 0;
            self.i += 1;
        }
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cells as usize;
        let done = (self.i as usize).min(n) * n + self.j as usize;
        let remaining = (n * n).saturating_sub(done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellScan<'_> {}
