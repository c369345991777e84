//! Run configuration.
//!
//! A `Configuration` can be written to and read from JSON so a run (seed
//! included) can be reproduced exactly.

use crate::errors::ValidationError;
use crate::render::Rgba;
use crate::simulation::population::ResamplingMethod;
use crate::simulation::validation::{RunParameters, FREQUENCY, GENERATIONS, POPULATION_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub population: PopulationConfig,
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Population parameters, validated before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Starting allele frequency
    pub initial_frequency: f64,
    /// Number of diploid individuals
    pub population_size: usize,
    /// Generations per run
    pub generations: usize,
    #[serde(default)]
    pub resampling: ResamplingMethod,
}

/// Whether a run follows one trajectory or collects many outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Single,
    Multi,
}

/// How a run is executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    pub mode: RunMode,
    /// Replicates in multi-run mode
    pub runs: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
    /// Worker threads for parallel batches (None uses all cores)
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Appearance of rendered scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub background: Rgba,
    pub gauge_fill: Rgba,
    pub graph_width: u32,
    pub graph_height: u32,
    pub gauge_size: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_frequency: FREQUENCY.default,
            population_size: POPULATION_SIZE.default as usize,
            generations: GENERATIONS.default as usize,
            resampling: ResamplingMethod::default(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Single,
            runs: 100,
            seed: None,
            threads: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(238, 238, 238),
            gauge_fill: Rgba::CYAN,
            graph_width: 600,
            graph_height: 300,
            gauge_size: 210,
        }
    }
}

impl Configuration {
    /// Check the population section and return validated run parameters.
    pub fn validate(&self) -> Result<RunParameters, ValidationError> {
        if self.execution.runs == 0 {
            return Err(ValidationError::Configuration(
                "runs must be at least 1".into(),
            ));
        }
        if self.execution.threads == Some(0) {
            return Err(ValidationError::Configuration(
                "threads must be at least 1".into(),
            ));
        }
        RunParameters::new(
            self.population.initial_frequency,
            self.population.population_size,
            self.population.generations,
        )
    }

    /// Load and decode a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_file(&self, path: &Path) -> Result<(), ValidationError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| {
            ValidationError::Configuration(format!("cannot write {}: {e}", path.display()))
        })
    }
}
