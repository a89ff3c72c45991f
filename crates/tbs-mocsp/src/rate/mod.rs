//! Ripple-spreading rate selection.
//!
//! All ripples share one simulated clock. The clock is driven by a single
//! scalar edge length taken from the "most uniform" objective dimension (the
//! one with the smallest max/min ratio over all edges), and the spreading
//! speed is that dimension's minimum, so the shortest edge is crossed in
//! exactly one tick.

mod selection;
mod types;


pub use selection::{dimension_ranges, select_rate};
pub use types::{DimensionRange, SpreadingRate};
