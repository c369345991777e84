use anyhow::{Context, Result};
use genedrift_sim::simulation::{Configuration, ExecutionConfig, PopulationConfig};
use tracing::debug;

use crate::args::InitArgs;
use crate::printing::print_parameters;

/// Build a configuration from `args`.
pub fn build_config(args: &InitArgs) -> Configuration {
    Configuration {
        population: PopulationConfig {
            initial_frequency: args.frequency,
            population_size: args.population_size,
            generations: args.generations,
            resampling: args.resampling.into(),
        },
        execution: ExecutionConfig {
            mode: args.mode.into(),
            runs: args.runs,
            seed: args.seed,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    let config = build_config(args);
    config.validate().context("Invalid parameters")?;

    if args.stdout {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to encode configuration")?;
        println!("{json}");
        return Ok(());
    }

    println!("🧬 genedrift - Genetic Drift Simulator");
    println!("============================================\n");

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    print_parameters(&config);

    debug!("Writing configuration to {}", args.output.display());
    config
        .to_file(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("\n✓ Configuration written to {}", args.output.display());
    println!("  Run it with: genedrift run --config {}", args.output.display());
    Ok(())
}
