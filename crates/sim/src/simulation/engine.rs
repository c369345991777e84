//! Tick-driven run sessions.
//!
//! Neither session owns a clock. The caller invokes `tick()` at whatever
//! pace it likes (a timer, a loop, a progress bar) and stops when a tick
//! reports [`TickOutcome::Finished`]. Cancelling is simply not ticking again.
//!
//! - `SingleRunSession` follows one population generation by generation and
//!   records its trajectory.
//! - `MultiRunSession` runs independent replicates to completion and bins
//!   their final state.

use crate::analysis::{FrequencyHistogram, LevelGauge, INITIAL_DISPLAY_SCALE};
use crate::simulation::population::{PopulationModel, ResamplingMethod};
use crate::simulation::validation::RunParameters;
use crate::storage::{Category, CategoryFilter, SeriesStore};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use tracing::{debug, info};

/// Replicates per multi-run batch.
pub const DEFAULT_RUNS_PER_BATCH: usize = 100;

/// Data categories single runs rotate through.
const CATEGORY_ROTATION: u8 = 5;

/// Result of a single `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Work was done and more remains.
    Advanced,
    /// The run is complete; further ticks do nothing.
    Finished,
}

/// Create the session generator: seeded if requested, otherwise from the OS.
pub fn session_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}

/// Run one population for the full generation count.
pub fn run_replicate<R: Rng + ?Sized>(
    params: &RunParameters,
    method: ResamplingMethod,
    rng: &mut R,
) -> PopulationModel {
    let mut population =
        PopulationModel::with_method(params.initial_frequency, params.population_size, method);
    population.advance(params.generations, rng);
    population
}

/// Values recorded for one generation.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    generation: usize,
    frequency: f64,
    heterozygosity: f64,
}

impl Snapshot {
    fn of(population: &PopulationModel) -> Self {
        Self {
            generation: population.generation(),
            frequency: population.frequency(),
            heterozygosity: population.heterozygosity(),
        }
    }
}

/// One population followed over time.
#[derive(Debug)]
pub struct SingleRunSession {
    rng: Xoshiro256PlusPlus,
    method: ResamplingMethod,
    population: Option<PopulationModel>,
    target_generation: usize,
    running: bool,
    frequency: SeriesStore,
    heterozygosity: SeriesStore,
    gauge: LevelGauge,
    /// Index of the most recently used category
    category: u8,
}

impl SingleRunSession {
    pub fn new(seed: Option<u64>, method: ResamplingMethod) -> Self {
        Self {
            rng: session_rng(seed),
            method,
            population: None,
            target_generation: 0,
            running: false,
            frequency: SeriesStore::new("Allele Frequency"),
            heterozygosity: SeriesStore::new("Heterozygosity"),
            gauge: LevelGauge::new("Allele Frequency"),
            category: CATEGORY_ROTATION - 1,
        }
    }

    /// Begin a new trajectory in the next data category.
    ///
    /// Earlier trajectories in other categories stay on the graphs, so up to
    /// five runs can be compared before the oldest is overwritten.
    pub fn start(&mut self, params: &RunParameters) -> Category {
        self.category = (self.category + 1) % CATEGORY_ROTATION;
        let category = self.current_category();

        self.frequency.clear(CategoryFilter::Only(category));
        self.heterozygosity.clear(CategoryFilter::Only(category));

        let population = PopulationModel::with_method(
            params.initial_frequency,
            params.population_size,
            self.method,
        );
        debug!(
            "Starting single run in category {}: N={}, f0={}, generations={}",
            category.index(),
            population.size(),
            population.initial_frequency(),
            params.generations
        );
        self.record(&Snapshot::of(&population), category);
        self.population = Some(population);
        self.target_generation = params.generations;
        self.running = true;
        category
    }

    /// Advance one generation and record it.
    ///
    /// Finishes without advancing once the target generation is reached or
    /// the allele is fixed or lost.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Finished;
        }
        let category = self.current_category();
        let Some(population) = self.population.as_mut() else {
            self.running = false;
            return TickOutcome::Finished;
        };

        if population.generation() >= self.target_generation || population.is_absorbed() {
            self.running = false;
            info!(
                "Single run finished at generation {} with frequency {}",
                population.generation(),
                population.frequency()
            );
            return TickOutcome::Finished;
        }

        population.advance(1, &mut self.rng);
        let snapshot = Snapshot::of(population);
        self.record(&snapshot, category);
        TickOutcome::Advanced
    }

    /// Tick until finished. Returns the number of generations advanced.
    pub fn run_to_completion(&mut self) -> usize {
        let mut advanced = 0;
        while self.tick() == TickOutcome::Advanced {
            advanced += 1;
        }
        advanced
    }

    /// Drop every recorded point and show `level` on the gauge.
    pub fn reset(&mut self, level: f64) {
        self.frequency.clear(CategoryFilter::All);
        self.heterozygosity.clear(CategoryFilter::All);
        self.gauge.set_level(level);
        self.category = CATEGORY_ROTATION - 1;
        self.population = None;
        self.running = false;
    }

    fn record(&mut self, snapshot: &Snapshot, category: Category) {
        let generation = snapshot.generation as f64;
        self.frequency
            .append(generation, snapshot.frequency, category);
        self.heterozygosity
            .append(generation, snapshot.heterozygosity, category);
        self.gauge.set_level(snapshot.frequency);
    }

    /// Category of the current (or most recent) trajectory.
    pub fn current_category(&self) -> Category {
        Category::wrapping(self.category)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn population(&self) -> Option<&PopulationModel> {
        self.population.as_ref()
    }

    pub fn target_generation(&self) -> usize {
        self.target_generation
    }

    pub fn frequency_series(&self) -> &SeriesStore {
        &self.frequency
    }

    pub fn heterozygosity_series(&self) -> &SeriesStore {
        &self.heterozygosity
    }

    pub fn gauge(&self) -> &LevelGauge {
        &self.gauge
    }
}

/// Many independent replicates binned by outcome.
#[derive(Debug)]
pub struct MultiRunSession {
    rng: Xoshiro256PlusPlus,
    method: ResamplingMethod,
    params: Option<RunParameters>,
    runs_per_batch: usize,
    completed_in_batch: usize,
    running: bool,
    /// Replicates run since the last reset, across batches
    total_runs: u64,
    frequency: FrequencyHistogram,
    heterozygosity: FrequencyHistogram,
}

impl MultiRunSession {
    pub fn new(seed: Option<u64>, method: ResamplingMethod) -> Self {
        Self {
            rng: session_rng(seed),
            method,
            params: None,
            runs_per_batch: DEFAULT_RUNS_PER_BATCH,
            completed_in_batch: 0,
            running: false,
            total_runs: 0,
            frequency: FrequencyHistogram::allele_frequency(),
            heterozygosity: FrequencyHistogram::heterozygosity(),
        }
    }

    /// Set the batch length. Values below 1 are raised to 1.
    pub fn with_runs_per_batch(mut self, runs: usize) -> Self {
        self.runs_per_batch = runs.max(1);
        self
    }

    /// Begin a batch. Histograms keep accumulating across batches.
    pub fn start(&mut self, params: &RunParameters) {
        debug!(
            "Starting batch of {} replicates: N={}, f0={}, generations={}",
            self.runs_per_batch,
            params.population_size,
            params.initial_frequency,
            params.generations
        );
        self.params = Some(*params);
        self.completed_in_batch = 0;
        self.running = true;
    }

    /// Run one replicate to completion and bin its outcome.
    ///
    /// The tick that completes the batch still runs its replicate.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Finished;
        }
        let Some(params) = self.params else {
            self.running = false;
            return TickOutcome::Finished;
        };

        self.completed_in_batch += 1;
        let batch_done = self.completed_in_batch >= self.runs_per_batch;

        let population = run_replicate(&params, self.method, &mut self.rng);
        self.add_outcome(population.frequency(), population.heterozygosity());

        if batch_done {
            self.running = false;
            info!(
                "Batch complete: {} replicates this batch, {} total",
                self.completed_in_batch, self.total_runs
            );
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    /// Tick until the batch is finished. Returns the replicates run.
    pub fn run_batch(&mut self) -> usize {
        let before = self.total_runs;
        while self.tick() == TickOutcome::Advanced {}
        (self.total_runs - before) as usize
    }

    /// Run `runs` replicates on the rayon pool.
    ///
    /// Each replicate gets a generator seeded from the session generator.
    /// Outcomes are merged in seed order, so a seeded session produces the
    /// same histograms regardless of thread count.
    pub fn run_parallel(&mut self, params: &RunParameters, runs: usize) -> usize {
        let seeds: Vec<u64> = (0..runs).map(|_| self.rng.random()).collect();
        let method = self.method;

        let outcomes: Vec<(f64, f64)> = seeds
            .par_iter()
            .map(|&seed| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let population = run_replicate(params, method, &mut local_rng);
                (population.frequency(), population.heterozygosity())
            })
            .collect();

        for (frequency, heterozygosity) in outcomes {
            self.add_outcome(frequency, heterozygosity);
        }
        info!(
            "Parallel batch complete: {} replicates, {} total",
            runs, self.total_runs
        );
        runs
    }

    /// Clear both histograms, restore their initial scale, zero the total.
    pub fn reset(&mut self) {
        for hist in [&mut self.frequency, &mut self.heterozygosity] {
            hist.clear();
            hist.set_display_scale(INITIAL_DISPLAY_SCALE);
        }
        self.total_runs = 0;
        self.completed_in_batch = 0;
        self.running = false;
    }

    fn add_outcome(&mut self, frequency: f64, heterozygosity: f64) {
        self.total_runs += 1;
        self.frequency.add_data(frequency);
        self.heterozygosity.add_data(heterozygosity);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn runs_per_batch(&self) -> usize {
        self.runs_per_batch
    }

    pub fn completed_in_batch(&self) -> usize {
        self.completed_in_batch
    }

    pub fn total_runs(&self) -> u64 {
        self.total_runs
    }

    pub fn frequency_histogram(&self) -> &FrequencyHistogram {
        &self.frequency
    }

    pub fn heterozygosity_histogram(&self) -> &FrequencyHistogram {
        &self.heterozygosity
    }
}
