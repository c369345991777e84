//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use genedrift_sim::prelude::*;
//!
//! let params = RunParameters::parse("0.5", "100", "50").unwrap();
//! let mut session = SingleRunSession::new(Some(42), ResamplingMethod::Bernoulli);
//! session.start(&params);
//! while session.tick() == TickOutcome::Advanced {}
//! assert!(session.frequency_series().len() >= 1);
//! ```

pub use crate::analysis::{FrequencyHistogram, LevelGauge};
pub use crate::errors::{PersistenceError, ValidationError};
pub use crate::render::{GraphSpec, PlotMode, Renderer, Rgba, Scene, SvgRenderer};
pub use crate::simulation::{
    Configuration, MultiRunSession, PopulationModel, ResamplingMethod, RunMode, RunParameters,
    SingleRunSession, TickOutcome,
};
pub use crate::storage::{Category, CategoryFilter, CsvExport, SeriesStore, Window};
