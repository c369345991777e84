use genedrift_sim::analysis::FrequencyHistogram;
use genedrift_sim::simulation::{Configuration, PopulationModel, RunMode};

/// Width of the text bars in histogram tables.
const BAR_WIDTH: usize = 40;

pub fn print_parameters(config: &Configuration) {
    let population = &config.population;
    let execution = &config.execution;

    println!("\n📋 Run Configuration");
    let mode = match execution.mode {
        RunMode::Single => "single",
        RunMode::Multi => "multi",
    };
    println!("  • Mode: {mode} [-m, --mode]");
    println!(
        "  • Initial Frequency: {} [-f, --frequency]",
        population.initial_frequency
    );
    println!(
        "  • Population Size: {} [-n, --population-size]",
        population.population_size
    );
    println!("  • Generations: {} [-g, --generations]", population.generations);
    println!("  • Resampling: {:?} [--resampling]", population.resampling);
    if execution.mode == RunMode::Multi {
        println!("  • Runs per Batch: {} [-r, --runs]", execution.runs);
    }
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
}

pub fn print_single_summary(population: &PopulationModel, category: u8) {
    println!("\n📈 Single Run Summary (category {category})");
    println!("  • Generations: {}", population.generation());
    println!("  • Initial Frequency: {}", population.initial_frequency());
    println!("  • Final Frequency: {:.4}", population.frequency());
    println!("  • Heterozygosity: {:.4}", population.heterozygosity());
    let status = if population.is_fixed() {
        "fixed"
    } else if population.is_lost() {
        "lost"
    } else {
        "segregating"
    };
    println!("  • Allele Status: {status}");
}

pub fn print_histogram(title: &str, hist: &FrequencyHistogram) {
    println!("\n📊 {title} ({} runs)", hist.sample_count());
    for i in 0..hist.bucket_count() {
        let filled = (hist.display_fraction(i).min(1.0) * BAR_WIDTH as f64).round() as usize;
        let percent = hist
            .percentage(i)
            .map(|p| format!("({p:.1}%)"))
            .unwrap_or_default();
        println!(
            "  {:>9} │{:<width$}│ {:>6} {}",
            hist.bucket_label(i),
            "█".repeat(filled),
            hist.bins()[i],
            percent,
            width = BAR_WIDTH
        );
    }
    println!("  {:>9}  scale: 0-{}", "", hist.display_scale());
}
