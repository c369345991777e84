//! Shared default values for run configuration.
//! These values are used by the `init` and `run` commands (via clap).

use genedrift_sim::simulation::{DEFAULT_RUNS_PER_BATCH, FREQUENCY, GENERATIONS, POPULATION_SIZE};

pub const CONFIG_FILE: &str = "genedrift.json";

pub const INITIAL_FREQUENCY: f64 = FREQUENCY.default;
pub const POPULATION: usize = POPULATION_SIZE.default as usize;
pub const GENERATION_COUNT: usize = GENERATIONS.default as usize;
pub const RUNS: usize = DEFAULT_RUNS_PER_BATCH;

// Pause between ticks; 0 runs as fast as possible
pub const TICK_DELAY_MS: u64 = 0;

// File names written into --svg-dir
pub const FREQUENCY_GRAPH_SVG: &str = "allele_frequency.svg";
pub const HETEROZYGOSITY_GRAPH_SVG: &str = "heterozygosity.svg";
pub const GAUGE_SVG: &str = "gauge.svg";
pub const FREQUENCY_HISTOGRAM_SVG: &str = "final_frequency.svg";
pub const HETEROZYGOSITY_HISTOGRAM_SVG: &str = "final_heterozygosity.svg";
