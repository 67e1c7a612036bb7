use mc_chain::{ChainConfig, boundary_points, count_line_components, intensity_histogram};
use mc_core::GridView;
use mc_trace::{ContourSet, GridScanner, TraceConfig};

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Trace,
    Chain,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurveyConfig {
    pub method: Method,
    pub trace: TraceConfig,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityCount {
    pub intensity: u8,
    pub pixels: usize,
    /// Contours (trace) or line components (chain).
    pub count: usize,
    /// Closed contours; only reported by [`Method::Trace`].
    pub closed: Option<usize>,
}

/// Counts contours for every intensity present in `grid`, sorted by intensity.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(grid, cfg), fields(rows = grid.rows(), cols = grid.cols(), method = ?cfg.method))
)]
pub fn survey(grid: &GridView<'_, u8>, cfg: &SurveyConfig) -> Vec<IntensityCount> {
    let hist = intensity_histogram(grid);
    let present: Vec<u8> = (0..=255u8).filter(|&i| hist[i as usize] > 0).collect();

    #[cfg(feature = "rayon")]
    let out = present
        .par_iter()
        .map_init(GridScanner::new, |scanner, &i| {
            count_one(scanner, grid, i, hist[i as usize], cfg)
        })
        .collect();

    #[cfg(not(feature = "rayon"))]
    let out = {
        let mut scanner = GridScanner::new();
        present
            .iter()
            .map(|&i| count_one(&mut scanner, grid, i, hist[i as usize], cfg))
            .collect()
    };

    out
}

/// Single-intensity variant of [`survey`]. Absent intensities yield a zero count.
pub fn survey_intensity(
    grid: &GridView<'_, u8>,
    intensity: u8,
    cfg: &SurveyConfig,
) -> IntensityCount {
    let pixels = intensity_histogram(grid)[intensity as usize];
    count_one(&mut GridScanner::new(), grid, intensity, pixels, cfg)
}

/// Full contour sets for every intensity present, sorted by intensity.
pub fn trace_all_intensities(grid: &GridView<'_, u8>, cfg: &TraceConfig) -> Vec<ContourSet> {
    let hist = intensity_histogram(grid);
    let present: Vec<u8> = (0..=255u8).filter(|&i| hist[i as usize] > 0).collect();

    #[cfg(feature = "rayon")]
    let out = present
        .par_iter()
        .map_init(GridScanner::new, |scanner, &i| scanner.scan(grid, i, cfg))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let out = {
        let mut scanner = GridScanner::new();
        present.iter().map(|&i| scanner.scan(grid, i, cfg)).collect()
    };

    out
}

/// Dense 256-entry intensity to count table; absent intensities are zero.
pub fn frequency_table(counts: &[IntensityCount]) -> [usize; 256] {
    let mut table = [0usize; 256];
    for c in counts {
        table[c.intensity as usize] = c.count;
    }
    table
}

fn count_one(
    scanner: &mut GridScanner,
    grid: &GridView<'_, u8>,
    intensity: u8,
    pixels: usize,
    cfg: &SurveyConfig,
) -> IntensityCount {
    if pixels == 0 {
        return IntensityCount {
            intensity,
            pixels,
            count: 0,
            closed: match cfg.method {
                Method::Trace => Some(0),
                Method::Chain => None,
            },
        };
    }

    match cfg.method {
        Method::Trace => {
            let set = scanner.scan(grid, intensity, &cfg.trace);
            IntensityCount {
                intensity,
                pixels,
                count: set.count(),
                closed: Some(set.num_closed()),
            }
        }
        Method::Chain => {
            let pts = boundary_points(grid, intensity);
            IntensityCount {
                intensity,
                pixels,
                count: count_line_components(&pts, grid.dims(), &cfg.chain),
                closed: None,
            }
        }
    }
}
