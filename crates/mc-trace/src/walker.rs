use std::collections::HashSet;

use mc_core::{Coord, DIR_W, Error, GridView, backtrack_after, step};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Contour, TraceOutcome, VisitTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceConfig {
    pub max_steps: Option<usize>,
}

impl TraceConfig {
    pub fn step_limit(&self, grid: &GridView<'_, u8>) -> usize {
        self.max_steps.unwrap_or_else(|| grid.dims().len())
    }
}

pub fn trace(
    grid: &GridView<'_, u8>,
    seed: Coord,
    target: u8,
    cfg: &TraceConfig,
) -> Result<Contour, Error> {
    let mut visited = VisitTracker::new(grid.dims());
    trace_with(grid, seed, target, cfg, &mut visited)
}

/// Traces one contour from `seed`, marking every appended pixel in `visited`.
///
/// The seed must lie inside the grid and hold `target`. Already-marked seeds
/// are accepted; avoiding them is the caller's business.
pub fn trace_with(
    grid: &GridView<'_, u8>,
    seed: Coord,
    target: u8,
    cfg: &TraceConfig,
    visited: &mut VisitTracker,
) -> Result<Contour, Error> {
    let found = grid.at(seed);
    if found != Some(target) {
        return Err(Error::InvalidSeed {
            seed,
            target,
            found,
        });
    }
    if visited.dims() != grid.dims() {
        return Err(Error::InvalidGridShape {
            expected: grid.dims().len(),
            actual: visited.dims().len(),
        });
    }

    Ok(walk(grid, seed, target, cfg.step_limit(grid), visited))
}

// Seed is assumed valid. West is never part of the region for a row-major
// seed, so it is the first backtrack.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(grid, visited), fields(row = seed.row, col = seed.col))
)]
pub(crate) fn walk(
    grid: &GridView<'_, u8>,
    seed: Coord,
    target: u8,
    max_steps: usize,
    visited: &mut VisitTracker,
) -> Contour {
    let mut points = vec![seed];
    let mut on_path = HashSet::new();
    on_path.insert(seed);
    visited.mark(seed);

    let mut cur = seed;
    let mut back = DIR_W;
    let mut outcome = TraceOutcome::StepLimit;

    for _ in 0..max_steps {
        let Some(dir) = next_boundary_dir(grid, cur, back, target) else {
            outcome = TraceOutcome::DeadEnd;
            break;
        };

        let next = step(cur, dir);
        if next == seed {
            points.push(seed);
            outcome = TraceOutcome::Closed;
            break;
        }

        if !on_path.insert(next) {
            outcome = TraceOutcome::Revisited;
            break;
        }

        visited.mark(next);
        points.push(next);
        back = backtrack_after(dir);
        cur = next;
    }

    let region_size = on_path.len();
    Contour {
        points,
        outcome,
        region_size,
    }
}

#[inline]
fn next_boundary_dir(grid: &GridView<'_, u8>, cur: Coord, back: u8, target: u8) -> Option<u8> {
    (1..=8u8)
        .map(|k| (back + k) & 7)
        .find(|&dir| grid.matches(step(cur, dir), target))
}
