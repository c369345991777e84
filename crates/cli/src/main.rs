mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{InitArgs, RunArgs};
use commands::{init, run, validate};

/// genedrift: A Genetic Drift Explorer
///
/// This tool simulates how the frequency of an allele changes at random in a
/// finite population (the Wright-Fisher model), either following one
/// population over time or collecting the outcomes of many.
#[derive(Parser, Debug)]
#[command(name = "genedrift")]
#[command(author, version, about = "Simulates genetic drift in finite populations", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// Without this flag the RUST_LOG environment variable is honoured.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new run configuration.
    ///
    /// Writes the parameters (frequency, population size, generations, mode)
    /// to a JSON file but does not run anything yet.
    Init(Box<InitArgs>),

    /// Run a simulation in single or multi mode.
    ///
    /// Single mode follows one population generation by generation; multi
    /// mode runs many populations to completion and bins their outcomes.
    Run(Box<RunArgs>),

    /// Validate a configuration file.
    Validate {
        /// Configuration path
        #[arg(short, long, default_value = defaults::CONFIG_FILE)]
        config: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_config(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Validate { config } => {
            validate::validate_config(&config)?;
        }
    }

    Ok(())
}
