//! Population model, run parameters and the sessions that drive them.
//!
//! - `PopulationModel`: one Wright-Fisher population advanced generation by
//!   generation.
//! - `RunParameters` / `RangedField`: validated inputs.
//! - `Configuration`: JSON-serializable run setup.
//! - `SingleRunSession` / `MultiRunSession`: tick-driven run control.

pub mod configs;
pub mod engine;
pub mod population;
pub mod validation;

pub use configs::{Configuration, DisplayConfig, ExecutionConfig, PopulationConfig, RunMode};
pub use engine::{
    run_replicate, session_rng, MultiRunSession, SingleRunSession, TickOutcome,
    DEFAULT_RUNS_PER_BATCH,
};
pub use population::{PopulationModel, ResamplingMethod};
pub use validation::{RangedField, RunParameters, FREQUENCY, GENERATIONS, POPULATION_SIZE};
