use anyhow::{Context, Result};
use genedrift_sim::simulation::Configuration;
use std::path::Path;

use crate::printing::print_parameters;

pub fn validate_config(path: &Path) -> Result<()> {
    println!("🔍 Validating configuration: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Configuration file does not exist");
    }

    let config = Configuration::from_file(path).context("Failed to load configuration")?;
    println!("✓ Format: OK");

    match config.validate() {
        Ok(_) => {
            println!("✓ Parameters: OK");
            print_parameters(&config);
            Ok(())
        }
        Err(e) => {
            println!("✗ Parameters: FAILED - {e}");
            anyhow::bail!("Configuration is invalid")
        }
    }
}
