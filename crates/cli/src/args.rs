use clap::{Args, ValueEnum};
use genedrift_sim::simulation::{
    ResamplingMethod, RunMode, FREQUENCY, GENERATIONS, POPULATION_SIZE,
};
use std::path::PathBuf;

use crate::defaults;

/// Run mode as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Follow one population generation by generation
    Single,
    /// Collect the final state of many independent populations
    Multi,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => RunMode::Single,
            ModeArg::Multi => RunMode::Multi,
        }
    }
}

/// Resampling method as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResamplingArg {
    /// One uniform draw per allele copy
    Bernoulli,
    /// One binomial draw per generation
    Binomial,
}

impl From<ResamplingArg> for ResamplingMethod {
    fn from(method: ResamplingArg) -> Self {
        match method {
            ResamplingArg::Bernoulli => ResamplingMethod::Bernoulli,
            ResamplingArg::Binomial => ResamplingMethod::Binomial,
        }
    }
}

pub fn parse_frequency(s: &str) -> Result<f64, String> {
    FREQUENCY.parse(s).map_err(|e| e.to_string())
}

/// Decimal input is range checked, then truncated.
pub fn parse_population_size(s: &str) -> Result<usize, String> {
    POPULATION_SIZE
        .parse(s)
        .map(|v| v.trunc() as usize)
        .map_err(|e| e.to_string())
}

/// Decimal input is range checked, then truncated.
pub fn parse_generations(s: &str) -> Result<usize, String> {
    GENERATIONS
        .parse(s)
        .map(|v| v.trunc() as usize)
        .map_err(|e| e.to_string())
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Initial allele frequency (0-1)
    #[arg(
        short = 'f',
        long,
        default_value_t = defaults::INITIAL_FREQUENCY,
        value_parser = parse_frequency,
    )]
    pub frequency: f64,

    /// Population size (1-10000)
    #[arg(
        short = 'n',
        long,
        default_value_t = defaults::POPULATION,
        value_parser = parse_population_size,
    )]
    pub population_size: usize,

    /// Number of generations (0-10000)
    #[arg(
        short = 'g',
        long,
        default_value_t = defaults::GENERATION_COUNT,
        value_parser = parse_generations,
    )]
    pub generations: usize,

    /// Run mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Single)]
    pub mode: ModeArg,

    /// Replicates per multi-run batch
    #[arg(short, long, default_value_t = defaults::RUNS)]
    pub runs: usize,

    /// How allele copies are drawn each generation
    #[arg(long, value_enum, default_value_t = ResamplingArg::Bernoulli)]
    pub resampling: ResamplingArg,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,

    /// Print the configuration as JSON instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (flags below override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial allele frequency (0-1)
    #[arg(short = 'f', long, value_parser = parse_frequency)]
    pub frequency: Option<f64>,

    /// Population size (1-10000)
    #[arg(short = 'n', long, value_parser = parse_population_size)]
    pub population_size: Option<usize>,

    /// Number of generations (0-10000)
    #[arg(short = 'g', long, value_parser = parse_generations)]
    pub generations: Option<usize>,

    /// Run mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Replicates per multi-run batch
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// How allele copies are drawn each generation
    #[arg(long, value_enum)]
    pub resampling: Option<ResamplingArg>,

    /// Override random seed (default: use configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run multi-mode replicates on all worker threads
    #[arg(long)]
    pub parallel: bool,

    /// Export the allele frequency series to CSV (single mode)
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Export the heterozygosity series to CSV (single mode)
    #[arg(long)]
    pub export_heterozygosity: Option<PathBuf>,

    /// Overwrite existing export files without asking
    #[arg(long)]
    pub force: bool,

    /// Write SVG renderings of the graphs, histograms and gauge to this directory
    #[arg(long)]
    pub svg_dir: Option<PathBuf>,

    /// Pause between ticks, in milliseconds
    #[arg(long, default_value_t = defaults::TICK_DELAY_MS)]
    pub delay_ms: u64,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
