//! Boundary-edge analysis, the alternative to full contour tracing.
//!
//! Instead of walking region boundaries this crate:
//! - extracts boundary points: pixels of an intensity with at least one
//!   in-bounds 8-neighbor of a different intensity;
//! - chains those points greedily through 4-neighbor links and counts the
//!   resulting runs.
//!
//! Chaining depends on where each run starts. [`SeedPolicy::FrameEdgeFirst`]
//! starts runs on the outer frame when possible, so a loop touching the frame
//! is walked from its frame end.

mod boundary;
mod chain;

pub use boundary::{boundary_points, distinct_intensities, intensity_histogram};
pub use chain::{ChainConfig, SeedPolicy, chain_line_components, count_line_components};
