use std::collections::HashSet;

use moore_contours::{
    ChainConfig, Coord, Dims, Error, Grid, Method, SurveyConfig, TraceConfig, boundary_points,
    count_contours, count_line_components, neighbors, survey, survey_intensity, trace,
    trace_all_intensities,
};

/// Deterministic pseudo-random grid with a handful of intensities.
fn noise_grid(rows: usize, cols: usize, levels: u8, mut state: u32) -> Grid<u8> {
    let mut data = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        data.push(((state >> 24) % levels as u32) as u8);
    }
    Grid::from_vec(rows, cols, data).expect("noise grid")
}

#[test]
fn neighbor_counts_at_corner_and_center() {
    let d = Dims::new(5, 5);
    assert_eq!(neighbors(Coord::new(0, 0), d).count(), 3);
    assert_eq!(neighbors(Coord::new(2, 2), d).count(), 8);
}

#[test]
fn filled_rectangle_yields_one_closed_contour() {
    let mut g = Grid::new_fill(12, 16, 9u8);
    g.fill_rect(3, 4, 9, 13, 200);

    let set = count_contours(&g.as_view(), 200, &TraceConfig::default());
    assert_eq!(set.count(), 1);
    let c = &set.contours[0];
    assert!(c.is_closed());
    assert_eq!(c.points.first(), c.points.last());
}

#[test]
fn missing_intensity_yields_nothing() {
    let g = Grid::new_fill(6, 6, 1u8);
    let set = count_contours(&g.as_view(), 2, &TraceConfig::default());
    assert_eq!(set.count(), 0);
    assert!(set.contours.is_empty());
}

#[test]
fn separated_blobs_count_twice() {
    let mut g = Grid::new_fill(10, 10, 0u8);
    g.fill_rect(1, 1, 4, 4, 5);
    g.fill_rect(5, 2, 9, 8, 5);

    let set = count_contours(&g.as_view(), 5, &TraceConfig::default());
    assert_eq!(set.count(), 2);
}

#[test]
fn contours_never_share_pixels_on_noise() {
    let g = noise_grid(40, 37, 3, 7);
    for target in 0..3u8 {
        let set = count_contours(&g.as_view(), target, &TraceConfig::default());

        let mut seen = HashSet::new();
        for c in &set.contours {
            for &p in c.boundary() {
                assert!(seen.insert(p), "{p:?} reused for intensity {target}");
                assert_eq!(g.as_view().at(p), Some(target));
            }
            if c.is_closed() {
                assert_eq!(c.points.first(), c.points.last());
            }
        }

        let matching = g.data().iter().filter(|&&v| v == target).count();
        let claimed: usize = set.contours.iter().map(|c| c.region_size).sum();
        assert_eq!(claimed, matching);
    }
}

#[test]
fn independent_runs_are_identical() {
    let g = noise_grid(25, 31, 4, 99);
    let cfg = TraceConfig::default();
    for target in 0..4u8 {
        let a = count_contours(&g.as_view(), target, &cfg);
        let b = count_contours(&g.as_view(), target, &cfg);
        assert_eq!(a, b);
    }
    assert_eq!(
        trace_all_intensities(&g.as_view(), &cfg),
        trace_all_intensities(&g.as_view(), &cfg)
    );
}

#[test]
fn step_cap_never_loops_forever() {
    let g = noise_grid(30, 30, 2, 3);
    let cfg = TraceConfig { max_steps: Some(5) };
    let set = count_contours(&g.as_view(), 1, &cfg);
    for c in &set.contours {
        // seed plus at most five steps
        assert!(c.points.len() <= 6);
    }
}

#[test]
fn direct_trace_validates_seed() {
    let g = Grid::from_vec(2, 2, vec![1u8, 0, 0, 1]).expect("valid grid");
    let cfg = TraceConfig::default();
    assert!(matches!(
        trace(&g.as_view(), Coord::new(0, 1), 1, &cfg),
        Err(Error::InvalidSeed { found: Some(0), .. })
    ));
    assert!(matches!(
        trace(&g.as_view(), Coord::new(5, 5), 1, &cfg),
        Err(Error::InvalidSeed { found: None, .. })
    ));
    assert!(trace(&g.as_view(), Coord::new(1, 1), 1, &cfg).is_ok());
}

#[test]
fn malformed_buffer_is_rejected_before_tracing() {
    assert_eq!(
        Grid::from_vec(4, 4, vec![0u8; 15]).unwrap_err(),
        Error::InvalidGridShape {
            expected: 16,
            actual: 15
        }
    );
}

#[test]
fn chainer_block_and_diagonal() {
    let cfg = ChainConfig::default();
    let dims = Dims::new(6, 6);
    let block = [
        Coord::new(2, 2),
        Coord::new(2, 3),
        Coord::new(3, 2),
        Coord::new(3, 3),
    ];
    assert_eq!(count_line_components(&block, dims, &cfg), 1);

    let diagonal = [Coord::new(2, 2), Coord::new(3, 3)];
    assert_eq!(count_line_components(&diagonal, dims, &cfg), 2);
}

#[test]
fn chain_survey_sees_frame_outline() {
    let mut g = Grid::new_fill(7, 7, 0u8);
    g.fill_rect(2, 2, 5, 5, 1);

    let pts = boundary_points(&g.as_view(), 0);
    assert!(pts.iter().all(|&p| g.dims().is_on_frame(p) || p.chebyshev(Coord::new(3, 3)) == 2));

    let cfg = SurveyConfig {
        method: Method::Chain,
        ..SurveyConfig::default()
    };
    let out = survey(&g.as_view(), &cfg);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].intensity, 1);
    assert_eq!(out[1].count, 1);
}

#[test]
fn survey_matches_per_intensity_runs() {
    let g = noise_grid(33, 29, 5, 1234);
    for method in [Method::Trace, Method::Chain] {
        let cfg = SurveyConfig {
            method,
            ..SurveyConfig::default()
        };
        let all = survey(&g.as_view(), &cfg);
        let one_by_one: Vec<_> = all
            .iter()
            .map(|c| survey_intensity(&g.as_view(), c.intensity, &cfg))
            .collect();
        assert_eq!(all, one_by_one);
        assert_eq!(all.iter().map(|c| c.pixels).sum::<usize>(), 33 * 29);
    }
}
