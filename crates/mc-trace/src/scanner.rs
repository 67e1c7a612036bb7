use mc_core::{Coord, GridView, neighbors};

#[cfg(feature = "tracing")]
use tracing::{debug, instrument};

use crate::walker::walk;
use crate::{ContourSet, TraceConfig, VisitTracker};

#[derive(Debug, Default)]
pub struct GridScanner {
    visited: VisitTracker,
    stack: Vec<Coord>,
}

impl GridScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&mut self, grid: &GridView<'_, u8>, target: u8, cfg: &TraceConfig) -> ContourSet {
        scan_with(grid, target, cfg, &mut self.visited, &mut self.stack)
    }

    pub fn visited(&self) -> &VisitTracker {
        &self.visited
    }
}

pub fn count_contours(grid: &GridView<'_, u8>, target: u8, cfg: &TraceConfig) -> ContourSet {
    GridScanner::new().scan(grid, target, cfg)
}

/// Same as [`count_contours`] but marks into a caller-owned tracker, which is
/// reset (and resized) to `grid` before the scan.
pub fn count_contours_with(
    grid: &GridView<'_, u8>,
    target: u8,
    cfg: &TraceConfig,
    visited: &mut VisitTracker,
) -> ContourSet {
    scan_with(grid, target, cfg, visited, &mut Vec::new())
}

#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(grid, cfg, visited, stack), fields(rows = grid.rows(), cols = grid.cols()))
)]
fn scan_with(
    grid: &GridView<'_, u8>,
    target: u8,
    cfg: &TraceConfig,
    visited: &mut VisitTracker,
    stack: &mut Vec<Coord>,
) -> ContourSet {
    let dims = grid.dims();
    visited.reset_for(dims);

    let mut out = ContourSet {
        dims,
        intensity: target,
        contours: Vec::new(),
    };
    if dims.is_empty() {
        return out;
    }

    let max_steps = cfg.step_limit(grid);
    for r in 0..grid.rows() {
        for (c, &v) in grid.row(r).iter().enumerate() {
            if v != target {
                continue;
            }
            let seed = Coord::from_index(r, c);
            if visited.is_marked(seed) {
                continue;
            }

            let mut contour = walk(grid, seed, target, max_steps, visited);
            let interior = claim_region(grid, target, contour.boundary(), visited, stack);
            contour.region_size += interior;

            #[cfg(feature = "tracing")]
            debug!(
                row = seed.row,
                col = seed.col,
                outcome = contour.outcome.name(),
                boundary = contour.boundary().len(),
                region = contour.region_size,
                "contour traced"
            );

            out.contours.push(contour);
        }
    }

    out
}

// Floods the rest of the region out from its boundary; returns the newly marked count.
fn claim_region(
    grid: &GridView<'_, u8>,
    target: u8,
    boundary: &[Coord],
    visited: &mut VisitTracker,
    stack: &mut Vec<Coord>,
) -> usize {
    let dims = grid.dims();
    stack.clear();
    stack.extend_from_slice(boundary);

    let mut claimed = 0usize;
    while let Some(p) = stack.pop() {
        for nb in neighbors(p, dims) {
            if grid.matches(nb, target) && visited.mark(nb) {
                claimed += 1;
                stack.push(nb);
            }
        }
    }

    claimed
}
