//! # Genetic Drift Simulation Crate
//!
//! The `genedrift_sim` crate models the random change of an allele's
//! frequency in a finite Wright-Fisher population. It includes modules for
//! advancing populations, binning the outcomes of many runs, recording
//! single-run trajectories, and turning all of these into drawable scenes.

pub mod analysis;
pub mod errors;
pub mod prelude;
pub mod render;
pub mod simulation;
pub mod storage;

pub use simulation::{MultiRunSession, PopulationModel, SingleRunSession};
