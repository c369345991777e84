use anyhow::{Context, Result};
use genedrift_sim::render::{bubble_scene, histogram_scene, GraphSpec, Renderer, SvgRenderer};
use genedrift_sim::simulation::{
    Configuration, MultiRunSession, RunMode, RunParameters, SingleRunSession, TickOutcome,
};
use genedrift_sim::storage::{save_export, CsvExport};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::args::RunArgs;
use crate::defaults;
use crate::printing::{print_histogram, print_parameters, print_single_summary};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🧬 genedrift - Running Simulation");
    println!("============================================\n");

    let config = load_config(args)?;
    let params = config.validate().context("Invalid parameters")?;

    if let Some(threads) = config.execution.threads {
        // A --threads flag has already configured the global pool
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            debug!("Keeping existing thread pool: {e}");
        }
    }

    print_parameters(&config);

    match config.execution.mode {
        RunMode::Single => run_single(args, &config, &params),
        RunMode::Multi => run_multi(args, &config, &params),
    }
}

/// Start from the configuration file (or defaults) and apply flag overrides.
fn load_config(args: &RunArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => Configuration::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Configuration::default(),
    };

    if let Some(frequency) = args.frequency {
        config.population.initial_frequency = frequency;
    }
    if let Some(size) = args.population_size {
        config.population.population_size = size;
    }
    if let Some(generations) = args.generations {
        config.population.generations = generations;
    }
    if let Some(resampling) = args.resampling {
        config.population.resampling = resampling.into();
    }
    if let Some(mode) = args.mode {
        config.execution.mode = mode.into();
    }
    if let Some(runs) = args.runs {
        config.execution.runs = runs;
    }
    if let Some(seed) = args.seed {
        config.execution.seed = Some(seed);
    }
    Ok(config)
}

fn progress_bar(len: u64, show: bool) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
        )
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    Some(pb)
}

fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}

fn run_single(args: &RunArgs, config: &Configuration, params: &RunParameters) -> Result<()> {
    let mut session = SingleRunSession::new(config.execution.seed, config.population.resampling);
    let category = session.start(params);

    println!("\nRunning up to {} generations...", params.generations);
    let pb = progress_bar(params.generations as u64, !args.no_progress);
    while session.tick() == TickOutcome::Advanced {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
        pause(args.delay_ms);
    }
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    if let Some(population) = session.population() {
        print_single_summary(population, category.index());
    }

    let mut failures = 0;
    let exports = [
        (args.export.as_ref(), session.frequency_series()),
        (
            args.export_heterozygosity.as_ref(),
            session.heterozygosity_series(),
        ),
    ];
    for (path, series) in exports {
        if let Some(path) = path {
            if !export(series, path, args.force) {
                failures += 1;
            }
        }
    }

    if let Some(dir) = &args.svg_dir {
        let display = &config.display;
        let mut renderer = SvgRenderer::new();
        let graphs = [
            (
                defaults::FREQUENCY_GRAPH_SVG,
                GraphSpec::allele_frequency(params.generations),
                session.frequency_series(),
            ),
            (
                defaults::HETEROZYGOSITY_GRAPH_SVG,
                GraphSpec::heterozygosity(params.generations),
                session.heterozygosity_series(),
            ),
        ];
        for (name, spec, series) in graphs {
            let scene = spec.scene(
                series,
                display.graph_width,
                display.graph_height,
                display.background,
            );
            write_svg(dir, name, &renderer.render(&scene))?;
        }
        let scene = bubble_scene(
            session.gauge(),
            display.gauge_size,
            display.background,
            display.gauge_fill,
        );
        write_svg(dir, defaults::GAUGE_SVG, &renderer.render(&scene))?;
    }

    if failures > 0 {
        anyhow::bail!("{failures} export(s) failed");
    }
    println!("\n✓ Simulation complete!");
    Ok(())
}

fn run_multi(args: &RunArgs, config: &Configuration, params: &RunParameters) -> Result<()> {
    if args.export.is_some() || args.export_heterozygosity.is_some() {
        println!("⚠️  Warning: CSV export applies to single-run mode only; ignoring --export.");
    }

    let runs = config.execution.runs;
    let mut session = MultiRunSession::new(config.execution.seed, config.population.resampling)
        .with_runs_per_batch(runs);

    if args.parallel {
        println!(
            "\nRunning {runs} replicates on {} threads...",
            rayon::current_num_threads()
        );
        session.run_parallel(params, runs);
    } else {
        println!("\nRunning {runs} replicates...");
        session.start(params);
        let pb = progress_bar(runs as u64, !args.no_progress);
        loop {
            let outcome = session.tick();
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            if outcome == TickOutcome::Finished {
                break;
            }
            pause(args.delay_ms);
        }
        if let Some(pb) = pb {
            pb.finish_with_message("Done");
        }
    }

    print_histogram("Final Allele Frequency", session.frequency_histogram());
    print_histogram("Final Heterozygosity", session.heterozygosity_histogram());

    if let Some(dir) = &args.svg_dir {
        let display = &config.display;
        let mut renderer = SvgRenderer::new();
        let histograms = [
            (
                defaults::FREQUENCY_HISTOGRAM_SVG,
                "Final Allele Frequency",
                session.frequency_histogram(),
            ),
            (
                defaults::HETEROZYGOSITY_HISTOGRAM_SVG,
                "Final Heterozygosity",
                session.heterozygosity_histogram(),
            ),
        ];
        for (name, title, hist) in histograms {
            let scene = histogram_scene(
                hist,
                title,
                display.graph_width,
                display.graph_height,
                display.background,
            );
            write_svg(dir, name, &renderer.render(&scene))?;
        }
    }

    println!("\n✓ Simulation complete!");
    println!("  Total replicates: {}", session.total_runs());
    Ok(())
}

/// Write one export; failures are reported, not propagated.
fn export(series: &dyn CsvExport, path: &Path, force: bool) -> bool {
    let result = if force {
        save_export(series, path, |_| true)
    } else {
        save_export(series, path, confirm_overwrite)
    };
    match result {
        Ok(written) => {
            println!(
                "✓ Exported {} to {}",
                series.export_name(),
                written.display()
            );
            true
        }
        Err(e) => {
            warn!("Export of {} failed: {e}", series.export_name());
            eprintln!("✗ Failed to export {}: {e}", series.export_name());
            false
        }
    }
}

fn confirm_overwrite(path: &Path) -> bool {
    print!("⚠️  {} already exists. Overwrite? [y/N]: ", path.display());
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

fn write_svg(dir: &Path, name: &str, svg: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Wrote {}", path.display());
    Ok(path)
}
