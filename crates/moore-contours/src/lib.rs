//! Umbrella crate for the `moore-contours` workspace.
//!
//! Re-exports the grid primitives, the Moore-Neighbor tracer and the
//! boundary-point chainer, and adds the per-intensity survey that runs one of
//! them for every intensity present in a grid.
//!
//! # Features
//!
//! - `rayon`: surveys intensities in parallel. Each intensity gets its own
//!   scanner and tracker; results are identical to the sequential path.
//! - `tracing`: `tracing` spans on scans, boundary extraction and chaining.

mod survey;

pub use mc_chain::*;
pub use mc_core::*;
pub use mc_trace::*;
pub use survey::{
    IntensityCount, Method, SurveyConfig, frequency_table, survey, survey_intensity,
    trace_all_intensities,
};
