//! Example: survey a synthetic multi-intensity grid.
//!
//! Builds a grid with a few rectangles, rings and specks, traces every
//! intensity and prints the per-intensity table for both methods, followed by
//! the boundary of each closed contour of intensity 2.
//!
//! Run from the workspace root:
//!   cargo run -p moore-contours --example survey_blobs

use std::time::Instant;

use moore_contours::{Grid, Method, SurveyConfig, TraceConfig, count_contours, survey};

fn synthetic_grid() -> Grid<u8> {
    let mut g = Grid::new_fill(24, 32, 0u8);

    // two solid blocks
    g.fill_rect(2, 2, 8, 10, 2);
    g.fill_rect(14, 20, 20, 30, 2);

    // a ring with a hole of the background intensity
    g.fill_rect(2, 16, 10, 26, 1);
    g.fill_rect(4, 18, 8, 24, 0);

    // specks
    for (r, c) in [(12, 4), (12, 8), (20, 6)] {
        if let Some(px) = g.get_mut(r, c) {
            *px = 3;
        }
    }

    g
}

fn main() {
    let g = synthetic_grid();
    let view = g.as_view();

    for method in [Method::Trace, Method::Chain] {
        let cfg = SurveyConfig {
            method,
            ..SurveyConfig::default()
        };

        let t0 = Instant::now();
        let counts = survey(&view, &cfg);
        let dt = t0.elapsed();

        println!("{method:?} ({:.3} ms)", dt.as_secs_f64() * 1e3);
        println!("  intensity  pixels  count  closed");
        for c in &counts {
            let closed = c.closed.map_or_else(|| "-".to_string(), |n| n.to_string());
            println!(
                "  {:>9}  {:>6}  {:>5}  {:>6}",
                c.intensity, c.pixels, c.count, closed
            );
        }
    }

    let set = count_contours(&view, 2, &TraceConfig::default());
    for (i, c) in set.iter_closed().enumerate() {
        let pts: Vec<String> = c
            .boundary()
            .iter()
            .map(|p| format!("({},{})", p.row, p.col))
            .collect();
        println!("contour {i}: {} px boundary, {}", pts.len(), pts.join(" "));
    }
}
