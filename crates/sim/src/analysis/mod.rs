//! Aggregation of simulation output.
//!
//! - `FrequencyHistogram`: distribution of final values across many runs.
//! - `LevelGauge`: a single value shown as a filled disk.

pub mod gauge;
pub mod histogram;

pub use gauge::{area_below, find_fill_height, find_fill_height_with, LevelGauge};
pub use histogram::{BucketBounds, FrequencyHistogram, INITIAL_DISPLAY_SCALE};
