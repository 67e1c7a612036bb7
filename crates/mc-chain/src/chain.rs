use std::collections::BTreeSet;

use mc_core::{Coord, Dims};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Where each new run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// First remaining point on the outer frame in sorted order; when none is
    /// left, the last remaining point in sorted order.
    #[default]
    FrameEdgeFirst,
    /// Always the first remaining point in sorted order.
    SortedOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainConfig {
    pub seed_policy: SeedPolicy,
}

/// Greedily splits `points` into runs of 4-neighbor links.
///
/// A run grows from its current end to the smallest remaining point (in
/// row-major order) at distance exactly 1 and stops when there is none.
/// Duplicate points are collapsed. `dims` only matters for the frame test.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(points, cfg), fields(n = points.len()))
)]
pub fn chain_line_components(points: &[Coord], dims: Dims, cfg: &ChainConfig) -> Vec<Vec<Coord>> {
    let mut remaining: BTreeSet<Coord> = points.iter().copied().collect();
    let mut frame: BTreeSet<Coord> = match cfg.seed_policy {
        SeedPolicy::FrameEdgeFirst => remaining
            .iter()
            .copied()
            .filter(|&c| dims.is_on_frame(c))
            .collect(),
        SeedPolicy::SortedOrder => BTreeSet::new(),
    };

    let mut chains = Vec::new();
    while let Some(seed) = pick_seed(&remaining, &frame, cfg.seed_policy) {
        remaining.remove(&seed);
        frame.remove(&seed);

        let mut chain = vec![seed];
        let mut end = seed;
        while let Some(next) = unit_neighbors(end)
            .into_iter()
            .filter(|c| remaining.contains(c))
            .min()
        {
            remaining.remove(&next);
            frame.remove(&next);
            chain.push(next);
            end = next;
        }

        chains.push(chain);
    }

    chains
}

pub fn count_line_components(points: &[Coord], dims: Dims, cfg: &ChainConfig) -> usize {
    chain_line_components(points, dims, cfg).len()
}

fn pick_seed(
    remaining: &BTreeSet<Coord>,
    frame: &BTreeSet<Coord>,
    policy: SeedPolicy,
) -> Option<Coord> {
    match policy {
        SeedPolicy::FrameEdgeFirst => frame.first().or_else(|| remaining.last()).copied(),
        SeedPolicy::SortedOrder => remaining.first().copied(),
    }
}

#[inline]
fn unit_neighbors(c: Coord) -> [Coord; 4] {
    [c + (-1, 0), c + (0, -1), c + (0, 1), c + (1, 0)]
}
