//! Moore-Neighbor contour tracing over `u8` intensity grids.
//!
//! A scan walks the grid in row-major order. Every pixel of the target
//! intensity that no earlier contour claimed becomes a seed:
//! - the walker follows the region boundary clockwise (see
//!   [`mc_core::MOORE_OFFSETS`]) until it re-enters the seed;
//! - the scanner then claims the rest of the seed's 8-connected region so its
//!   interior never seeds another contour.
//!
//! Walks that cannot close are kept and tagged with a [`TraceOutcome`]:
//! [`TraceOutcome::DeadEnd`] for isolated pixels, [`TraceOutcome::Revisited`]
//! when the boundary crosses itself before returning to the seed, and
//! [`TraceOutcome::StepLimit`] when [`TraceConfig::max_steps`] runs out.
//!
//! Each scan owns one [`VisitTracker`], either inside a [`GridScanner`] or
//! passed in through [`count_contours_with`]. Scans for different intensities are
//! independent and can share the grid read-only.

mod contour;
mod scanner;
mod visit;
mod walker;

pub use contour::{Contour, ContourSet, TraceOutcome};
pub use scanner::{GridScanner, count_contours, count_contours_with};
pub use visit::VisitTracker;
pub use walker::{TraceConfig, trace, trace_with};
