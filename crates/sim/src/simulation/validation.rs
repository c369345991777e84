//! Range validation for run parameters.
//!
//! Numeric inputs arrive as text (command-line flags, configuration files,
//! interactive prompts). A `RangedField` parses and range-checks one value;
//! `RunParameters::parse` validates the full set before a run starts.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// A numeric input accepted only within `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedField {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Allele frequency field, `[0, 1]`.
pub const FREQUENCY: RangedField = RangedField::new("allele frequency", 0.0, 1.0, 0.5);

/// Population size field, `[1, 10000]`.
pub const POPULATION_SIZE: RangedField =
    RangedField::new("population size", 1.0, 10_000.0, 100.0);

/// Generation count field, `[0, 10000]`.
pub const GENERATIONS: RangedField = RangedField::new("generations", 0.0, 10_000.0, 50.0);

impl RangedField {
    pub const fn new(name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name,
            min,
            max,
            default,
        }
    }

    /// Parse `text` as a decimal number and check it against the range.
    pub fn parse(&self, text: &str) -> Result<f64, ValidationError> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| ValidationError::Unparseable {
                field: self.name,
                input: text.to_string(),
            })?;
        self.check(value)
    }

    /// Check an already-parsed value against the range.
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::Unparseable {
                field: self.name,
                input: value.to_string(),
            });
        }
        if value < self.min {
            return Err(ValidationError::BelowMinimum {
                field: self.name,
                value,
                min: self.min,
            });
        }
        if value > self.max {
            return Err(ValidationError::AboveMaximum {
                field: self.name,
                value,
                max: self.max,
            });
        }
        Ok(value)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }
}

/// Validated inputs for one simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Starting allele frequency in `[0, 1]`
    pub initial_frequency: f64,
    /// Number of diploid individuals in `[1, 10000]`
    pub population_size: usize,
    /// Generations to simulate in `[0, 10000]`
    pub generations: usize,
}

impl RunParameters {
    /// Validate already-typed values.
    pub fn new(
        initial_frequency: f64,
        population_size: usize,
        generations: usize,
    ) -> Result<Self, ValidationError> {
        FREQUENCY.check(initial_frequency)?;
        POPULATION_SIZE.check(population_size as f64)?;
        GENERATIONS.check(generations as f64)?;
        Ok(Self {
            initial_frequency,
            population_size,
            generations,
        })
    }

    /// Validate textual inputs.
    ///
    /// Population size and generation count are parsed as decimals, range
    /// checked, and then truncated to whole numbers.
    pub fn parse(
        frequency: &str,
        population_size: &str,
        generations: &str,
    ) -> Result<Self, ValidationError> {
        let initial_frequency = FREQUENCY.parse(frequency)?;
        let population_size = POPULATION_SIZE.parse(population_size)?.trunc() as usize;
        let generations = GENERATIONS.parse(generations)?.trunc() as usize;
        Ok(Self {
            initial_frequency,
            population_size,
            generations,
        })
    }
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            initial_frequency: FREQUENCY.default,
            population_size: POPULATION_SIZE.default as usize,
            generations: GENERATIONS.default as usize,
        }
    }
}
