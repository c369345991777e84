//! Wright-Fisher population model.
//!
//! A `PopulationModel` tracks a single biallelic locus in a population of
//! `N` diploid individuals. Each generation the `2N` allele copies are
//! resampled from the previous generation's frequency, so the trajectory is
//! a Markov chain with absorbing states at loss (0) and fixation (1).

use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::{Deserialize, Serialize};

/// How the `2N` allele copies of a generation are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    /// One uniform draw per allele copy, compared against the frequency.
    #[default]
    Bernoulli,
    /// A single draw from `Binomial(2N, frequency)`.
    Binomial,
}

/// Stochastic state of one simulated population.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationModel {
    /// Starting frequency, snapped to a multiple of `1/N`
    initial_frequency: f64,
    /// Number of generations advanced so far
    generation: usize,
    /// Current allele frequency, always within [0, 1]
    frequency: f64,
    /// Number of diploid individuals
    size: usize,
    method: ResamplingMethod,
}

impl PopulationModel {
    /// Create a population of `size` individuals at `initial_frequency`.
    ///
    /// The frequency is snapped down to a multiple of `1/size`. Callers
    /// validate `initial_frequency ∈ [0, 1]` and `size > 0` beforehand.
    pub fn new(initial_frequency: f64, size: usize) -> Self {
        Self::with_method(initial_frequency, size, ResamplingMethod::default())
    }

    /// Create a population that resamples with the given method.
    pub fn with_method(initial_frequency: f64, size: usize, method: ResamplingMethod) -> Self {
        let n = size as f64;
        let snapped = (initial_frequency * n).floor() / n;
        Self {
            initial_frequency: snapped,
            generation: 0,
            frequency: snapped,
            size,
            method,
        }
    }

    /// Advance the population by `steps` generations.
    pub fn advance<R: Rng + ?Sized>(&mut self, steps: usize, rng: &mut R) {
        let copies = 2 * self.size;
        for _ in 0..steps {
            let positives = match self.method {
                ResamplingMethod::Bernoulli => bernoulli_positives(copies, self.frequency, rng),
                ResamplingMethod::Binomial => match Binomial::new(copies as u64, self.frequency) {
                    Ok(dist) => dist.sample(rng) as usize,
                    Err(_) => bernoulli_positives(copies, self.frequency, rng),
                },
            };
            self.frequency = positives as f64 / copies as f64;
            self.generation += 1;
        }
    }

    /// Frequency the population started from (after snapping).
    pub fn initial_frequency(&self) -> f64 {
        self.initial_frequency
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current allele frequency.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Number of diploid individuals.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn method(&self) -> ResamplingMethod {
        self.method
    }

    /// Expected heterozygosity under Hardy-Weinberg equilibrium, `2f(1-f)`.
    pub fn heterozygosity(&self) -> f64 {
        2.0 * self.frequency * (1.0 - self.frequency)
    }

    /// The allele has reached frequency 1.
    pub fn is_fixed(&self) -> bool {
        self.frequency == 1.0
    }

    /// The allele has been lost.
    pub fn is_lost(&self) -> bool {
        self.frequency == 0.0
    }

    /// The population sits in one of the two absorbing states.
    pub fn is_absorbed(&self) -> bool {
        self.is_fixed() || self.is_lost()
    }
}

/// Count successes among `trials` uniform draws below `p`.
///
/// `random::<f64>()` lies in `[0, 1)`, so `p == 0` never succeeds and
/// `p == 1` always does.
fn bernoulli_positives<R: Rng + ?Sized>(trials: usize, p: f64, rng: &mut R) -> usize {
    (0..trials).filter(|_| rng.random::<f64>() < p).count()
}
