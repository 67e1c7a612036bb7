use mc_core::{Coord, GridView, neighbors};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Sorted boundary points of `intensity`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(grid), fields(rows = grid.rows(), cols = grid.cols()))
)]
pub fn boundary_points(grid: &GridView<'_, u8>, intensity: u8) -> Vec<Coord> {
    let dims = grid.dims();
    let mut out = Vec::new();

    for (c, &v) in grid.iter_coords() {
        if v != intensity {
            continue;
        }
        if neighbors(c, dims).any(|nb| !grid.matches(nb, intensity)) {
            out.push(c);
        }
    }

    out
}

/// Distinct values in first-seen row-major order.
pub fn distinct_intensities(grid: &GridView<'_, u8>) -> Vec<u8> {
    let mut seen = [false; 256];
    let mut out = Vec::new();
    for r in 0..grid.rows() {
        for &v in grid.row(r) {
            if !seen[v as usize] {
                seen[v as usize] = true;
                out.push(v);
            }
        }
    }
    out
}

pub fn intensity_histogram(grid: &GridView<'_, u8>) -> [usize; 256] {
    let mut hist = [0usize; 256];
    for r in 0..grid.rows() {
        for &v in grid.row(r) {
            hist[v as usize] += 1;
        }
    }
    hist
}
