//! Grid mesh: configuration, corner evaluation, and cell scanning.
//!
//! A [`GridSpec`] describes the sampled domain and the isometric projection.
//! [`CornerEvaluator`] turns a corner index into a [`Corner`], and [`CellScan`] walks
//! the grid in drawing order, producing one [`Polygon`] per fully defined cell.
pub mod cells;
pub mod corner;
pub mod grid;

pub use cells::{CellOutcome, CellScan, FillCorner, Polygon, WINDING};
pub use corner::{Corner, CornerEvaluator};
pub use grid::{GridParams, GridSpec};
