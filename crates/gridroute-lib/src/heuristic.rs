//! Remaining-distance estimates for guided search.
//!
//! A [`Heuristic`] returns a non-negative lower bound on the cost from a
//! vertex to the goal. The search engine only ever calls
//! [`Heuristic::estimate`], so alternative metrics can be swapped in without
//! touching the expansion loop.

use crate::error::{Error, Result};
use crate::graph::{Graph, Region, VertexId};

/// Number of region columns in the default grid.
pub const DEFAULT_GRID_COLUMNS: u32 = 10;

/// Width of one region cell in distance units.
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// Estimator of the remaining distance between a vertex and the goal.
pub trait Heuristic: Send + Sync {
    /// Estimate the distance from `node` to `goal`. Must never be negative.
    fn estimate(&self, graph: &Graph, node: VertexId, goal: VertexId) -> f64;
}

/// Always estimates zero, turning guided search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _node: VertexId, _goal: VertexId) -> f64 {
        0.0
    }
}

/// Euclidean lower bound derived from the grid cells vertices lie in.
///
/// Regions are numbered row-major across `columns` columns. A vertex may sit
/// anywhere inside its cell, so each non-zero axial cell difference is shrunk
/// by one cell before scaling by `cell_size`. This keeps the estimate
/// admissible when edge weights are physical distances.
///
/// Axial differences are taken as absolute values, so this estimate happens
/// to be symmetric in `node` and `goal`. [`Heuristic`] does not require that,
/// and callers must not rely on it for other implementations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGridHeuristic {
    columns: u32,
    cell_size: f64,
}

impl RegionGridHeuristic {
    /// Create a heuristic for a grid `columns` cells wide with cells `cell_size` units across.
    pub fn new(columns: u32, cell_size: f64) -> Result<Self> {
        if columns == 0 {
            return Err(Error::InvalidHeuristicConfig {
                message: "grid must have at least one column".to_string(),
            });
        }
        if !cell_size.is_finite() || cell_size < 0.0 {
            return Err(Error::InvalidHeuristicConfig {
                message: format!("cell size must be a finite non-negative number, got {cell_size}"),
            });
        }
        Ok(Self { columns, cell_size })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Estimate directly from two region tags.
    pub fn estimate_regions(&self, node: Region, goal: Region) -> f64 {
        let (node_row, node_column) = self.cell(node);
        let (goal_row, goal_column) = self.cell(goal);

        let column = self.shrink(goal_column - node_column);
        let row = self.shrink(goal_row - node_row);

        (column * column + row * row).sqrt()
    }

    fn cell(&self, region: Region) -> (i64, i64) {
        let columns = i64::from(self.columns);
        let region = i64::from(region);
        (region / columns, region % columns)
    }

    fn shrink(&self, cells: i64) -> f64 {
        if cells == 0 {
            0.0
        } else {
            (cells.abs() - 1) as f64 * self.cell_size
        }
    }
}

impl Default for RegionGridHeuristic {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Heuristic for RegionGridHeuristic {
    fn estimate(&self, graph: &Graph, node: VertexId, goal: VertexId) -> f64 {
        if node == goal {
            return 0.0;
        }
        match (graph.region(node), graph.region(goal)) {
            (Some(node_region), Some(goal_region)) => {
                self.estimate_regions(node_region, goal_region)
            }
            _ => 0.0,
        }
    }
}
