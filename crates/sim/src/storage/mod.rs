//! Recorded simulation data and its persistence.
//!
//! Single-run trajectories are kept in memory as `SeriesStore`s and can be
//! exported to CSV files.

pub mod persist;
pub mod series;

pub use persist::{save_export, with_csv_extension, write_export, CsvExport};
pub use series::{Category, CategoryFilter, CategorySeries, DataPoint, SeriesStore, Window};
