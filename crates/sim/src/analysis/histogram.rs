//! Adaptive histogram of scalar samples.
//!
//! Samples are binned into a fixed number of buckets over `[lower, upper]`.
//! Either bound may be given a bucket of its own, which is how the
//! multi-run view separates lost/fixed outcomes from everything in between.
//! The display scale doubles as bins fill up so bars never overflow.

use serde::{Deserialize, Serialize};

/// Fraction of the display scale a bin may reach before the scale doubles.
const SCALE_HEADROOM: f64 = 0.9;

/// Display scale of the preset histograms.
pub const INITIAL_DISPLAY_SCALE: u64 = 100;

/// Range of values a single bucket represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketBounds {
    /// A bound with a bucket of its own
    Exact(f64),
    /// A shared sub-interval `(lo, hi]` (the first one also includes `lo`)
    Range { lo: f64, hi: f64 },
}

/// Histogram with optional dedicated buckets for its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyHistogram {
    lower_bound: f64,
    upper_bound: f64,
    bins: Vec<u64>,
    /// Every sample offered, binned or not
    sample_count: u64,
    /// Denominator for bar lengths
    display_scale: u64,
    lower_bound_is_own_bucket: bool,
    upper_bound_is_own_bucket: bool,
}

impl FrequencyHistogram {
    /// Create an empty histogram. `bucket_count` must be positive.
    pub fn new(
        lower_bound: f64,
        upper_bound: f64,
        bucket_count: usize,
        initial_display_scale: u64,
        lower_bound_is_own_bucket: bool,
        upper_bound_is_own_bucket: bool,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            bins: vec![0; bucket_count],
            sample_count: 0,
            display_scale: initial_display_scale,
            lower_bound_is_own_bucket,
            upper_bound_is_own_bucket,
        }
    }

    /// Final allele frequencies: `[0, 1]` in 7 buckets, loss and fixation
    /// counted separately.
    pub fn allele_frequency() -> Self {
        Self::new(0.0, 1.0, 7, INITIAL_DISPLAY_SCALE, true, true)
    }

    /// Final heterozygosities: `[0, 0.5]` in 6 buckets, zero counted
    /// separately.
    pub fn heterozygosity() -> Self {
        Self::new(0.0, 0.5, 6, INITIAL_DISPLAY_SCALE, true, false)
    }

    /// Record one sample.
    pub fn add_data(&mut self, x: f64) {
        self.sample_count += 1;

        let threshold = (SCALE_HEADROOM * self.display_scale as f64) as u64;
        if self.bins.iter().any(|&count| count > threshold) {
            self.display_scale *= 2;
        }

        if x < self.lower_bound || x > self.upper_bound {
            return;
        }
        if x == self.lower_bound && self.lower_bound_is_own_bucket {
            self.bins[0] += 1;
            return;
        }
        if x == self.upper_bound && self.upper_bound_is_own_bucket {
            let last = self.bins.len() - 1;
            self.bins[last] += 1;
            return;
        }

        let offset = usize::from(self.lower_bound_is_own_bucket);
        let shared = self.shared_buckets();
        let span = self.upper_bound - self.lower_bound;
        for i in 0..shared {
            let edge = self.lower_bound + span * ((i + 1) as f64 / shared as f64);
            if x <= edge {
                self.bins[i + offset] += 1;
                return;
            }
        }
    }

    /// Empty every bin and forget the sample count. The display scale is kept.
    pub fn clear(&mut self) {
        self.bins.iter_mut().for_each(|count| *count = 0);
        self.sample_count = 0;
    }

    pub fn set_display_scale(&mut self, scale: u64) {
        self.display_scale = scale;
    }

    /// Number of buckets that partition the open interior of the range.
    ///
    /// Zero when the bound buckets take up every bin, in which case interior
    /// samples are counted but not binned.
    pub fn shared_buckets(&self) -> usize {
        self.bins
            .len()
            .saturating_sub(usize::from(self.lower_bound_is_own_bucket))
            .saturating_sub(usize::from(self.upper_bound_is_own_bucket))
    }

    /// Bar length of bucket `i` relative to the display scale.
    pub fn display_fraction(&self, i: usize) -> f64 {
        self.bins[i] as f64 / self.display_scale as f64
    }

    /// Share of all samples that landed in bucket `i`, in percent.
    ///
    /// `None` until the first sample arrives.
    pub fn percentage(&self, i: usize) -> Option<f64> {
        if self.sample_count == 0 {
            return None;
        }
        Some(self.bins[i] as f64 / self.sample_count as f64 * 100.0)
    }

    /// Range of values bucket `i` stands for.
    pub fn bucket_bounds(&self, i: usize) -> BucketBounds {
        if i == 0 && self.lower_bound_is_own_bucket {
            return BucketBounds::Exact(self.lower_bound);
        }
        if i == self.bins.len() - 1 && self.upper_bound_is_own_bucket {
            return BucketBounds::Exact(self.upper_bound);
        }
        let shared = self.shared_buckets().max(1) as f64;
        let k = i as f64 - if self.lower_bound_is_own_bucket { 1.0 } else { 0.0 };
        let span = self.upper_bound - self.lower_bound;
        BucketBounds::Range {
            lo: self.lower_bound + span * (k / shared),
            hi: self.lower_bound + span * ((k + 1.0) / shared),
        }
    }

    /// Axis label for bucket `i`, e.g. `"0.1-0.3"` or `"1.0"`.
    pub fn bucket_label(&self, i: usize) -> String {
        match self.bucket_bounds(i) {
            BucketBounds::Exact(bound) => format!("{bound:?}"),
            BucketBounds::Range { lo, hi } => format!("{lo:.1}-{hi:.1}"),
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn bucket_count(&self) -> usize {
        self.bins.len()
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Number of samples that fell inside a bucket.
    pub fn binned_count(&self) -> u64 {
        self.bins.iter().sum()
    }

    pub fn display_scale(&self) -> u64 {
        self.display_scale
    }

    pub fn lower_bound_is_own_bucket(&self) -> bool {
        self.lower_bound_is_own_bucket
    }

    pub fn upper_bound_is_own_bucket(&self) -> bool {
        self.upper_bound_is_own_bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_upper_bound_lands_in_last_bucket() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 7, 100, false, false);
        for _ in 0..50 {
            hist.add_data(0.999);
        }

        assert_eq!(hist.bins()[6], 50);
        assert_eq!(hist.binned_count(), 50);
        assert_eq!(hist.display_scale(), 100);
    }

    #[test]
    fn test_lower_bound_own_bucket() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 7, 100, true, true);
        hist.add_data(0.0);

        assert_eq!(hist.bins(), &[1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_upper_bound_own_bucket() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 7, 100, true, true);
        hist.add_data(1.0);

        assert_eq!(hist.bins(), &[0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_interior_routing_with_own_buckets() {
        // 5 shared buckets of width 0.2, shifted by one
        let mut hist = FrequencyHistogram::allele_frequency();
        hist.add_data(0.1);
        hist.add_data(0.5);
        hist.add_data(0.99);

        assert_eq!(hist.bins(), &[0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_edge_ties_go_to_lower_bucket() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 4, 100, false, false);
        hist.add_data(0.25);
        hist.add_data(0.5);

        assert_eq!(hist.bins(), &[1, 1, 0, 0]);
    }

    #[test]
    fn test_lower_bound_without_own_bucket_goes_to_first() {
        let mut hist = FrequencyHistogram::heterozygosity();
        // Upper bound is not its own bucket here
        hist.add_data(0.5);
        assert_eq!(hist.bins()[5], 1);

        let mut hist = FrequencyHistogram::new(0.0, 1.0, 3, 100, false, false);
        hist.add_data(0.0);
        assert_eq!(hist.bins(), &[1, 0, 0]);
    }

    #[test]
    fn test_out_of_range_counted_not_binned() {
        let mut hist = FrequencyHistogram::new(0.0, 0.5, 6, 100, true, false);
        hist.add_data(0.7);
        hist.add_data(-0.1);

        assert_eq!(hist.sample_count(), 2);
        assert_eq!(hist.binned_count(), 0);
        assert_eq!(hist.percentage(0), Some(0.0));
    }

    #[test]
    fn test_display_scale_doubles() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 2, 10, false, false);
        // threshold = 9; doubling happens on the add after a bin exceeds it
        for _ in 0..10 {
            hist.add_data(0.1);
        }
        assert_eq!(hist.display_scale(), 10);

        hist.add_data(0.1);
        assert_eq!(hist.display_scale(), 20);
        assert_eq!(hist.bins()[0], 11);
    }

    #[test]
    fn test_display_scale_doubles_once_per_sample() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 2, 100, false, false);
        for _ in 0..10 {
            hist.add_data(0.1);
            hist.add_data(0.9);
        }
        assert_eq!(hist.display_scale(), 100);

        // Both bins over threshold, but only one doubling per add
        hist.set_display_scale(5);
        hist.add_data(0.1);
        assert_eq!(hist.display_scale(), 10);
    }

    #[test]
    fn test_clear_keeps_display_scale() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 1, 2, false, false);
        for _ in 0..5 {
            hist.add_data(0.5);
        }
        let scale = hist.display_scale();
        assert!(scale > 2);

        hist.clear();
        assert_eq!(hist.sample_count(), 0);
        assert_eq!(hist.binned_count(), 0);
        assert_eq!(hist.display_scale(), scale);
        assert_eq!(hist.percentage(0), None);

        hist.set_display_scale(100);
        assert_eq!(hist.display_scale(), 100);
    }

    #[test]
    fn test_fraction_and_percentage() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 2, 100, false, false);
        hist.add_data(0.2);
        hist.add_data(0.2);
        hist.add_data(0.8);
        hist.add_data(2.0);

        assert_eq!(hist.display_fraction(0), 0.02);
        assert_eq!(hist.percentage(0), Some(50.0));
        assert_eq!(hist.percentage(1), Some(25.0));
    }

    #[test]
    fn test_bucket_labels() {
        let hist = FrequencyHistogram::allele_frequency();
        assert_eq!(hist.bucket_label(0), "0.0");
        assert_eq!(hist.bucket_label(1), "0.0-0.2");
        assert_eq!(hist.bucket_label(5), "0.8-1.0");
        assert_eq!(hist.bucket_label(6), "1.0");

        let hist = FrequencyHistogram::heterozygosity();
        assert_eq!(
            hist.bucket_bounds(5),
            BucketBounds::Range { lo: 0.4, hi: 0.5 }
        );
    }

    #[test]
    fn test_no_shared_buckets() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 2, 100, true, true);
        assert_eq!(hist.shared_buckets(), 0);
        hist.add_data(0.5);
        hist.add_data(1.0);

        assert_eq!(hist.bins(), &[0, 1]);
        assert_eq!(hist.sample_count(), 2);
    }

    #[test]
    fn test_single_bucket_owned_by_both_bounds() {
        let mut hist = FrequencyHistogram::new(0.0, 1.0, 1, 100, true, true);
        assert_eq!(hist.shared_buckets(), 0);

        hist.add_data(0.5);
        assert_eq!(hist.sample_count(), 1);
        assert_eq!(hist.binned_count(), 0);

        hist.add_data(0.0);
        hist.add_data(1.0);
        assert_eq!(hist.bins(), &[2]);
        assert_eq!(hist.bucket_label(0), "0.0");
    }
}
