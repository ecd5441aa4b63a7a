//! Luminance histogram
//!
//! Fixed 256-bin histogram of luminance values. Values are binned by
//! truncation (`floor` for non-negative input), so `255.0` lands in bin
//! 255 and `127.999` in bin 127. Out-of-range input, which the grayscale
//! projector never produces, is clamped into the first or last bin so that
//! the bin counts always sum to the number of values.

/// Number of histogram bins
pub const BINS: usize = 256;

/// 256-bin histogram of luminance values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BINS],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; BINS],
            total: 0,
        }
    }
}

impl Histogram {
    /// Build a histogram by floor-binning each value.
    pub fn from_values(values: &[f64]) -> Self {
        let mut hist = Self::default();
        for &v in values {
            hist.add(v);
        }
        hist
    }

    /// Build a histogram directly from bin counts.
    pub fn from_counts(counts: [u64; BINS]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Add one value.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.counts[Self::bin(value)] += 1;
        self.total += 1;
    }

    /// Bin index for a value.
    ///
    /// `f64 as usize` truncates toward zero and saturates, mapping
    /// negatives and NaN to 0.
    #[inline]
    pub fn bin(value: f64) -> usize {
        (value as usize).min(BINS - 1)
    }

    /// Count in bin `index` (0 if the index is past the last bin).
    #[inline]
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// All bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64; BINS] {
        &self.counts
    }

    /// Total number of binned values.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Intensity sum `Σ t * count(t)`.
    pub fn weighted_sum(&self) -> f64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(t, &c)| t as f64 * c as f64)
            .sum()
    }

    /// Number of non-empty bins.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_truncates() {
        assert_eq!(Histogram::bin(0.0), 0);
        assert_eq!(Histogram::bin(0.999), 0);
        assert_eq!(Histogram::bin(127.999_999), 127);
        assert_eq!(Histogram::bin(255.0), 255);
    }

    #[test]
    fn test_bin_clamps_out_of_range() {
        assert_eq!(Histogram::bin(-3.0), 0);
        assert_eq!(Histogram::bin(f64::NAN), 0);
        assert_eq!(Histogram::bin(300.0), 255);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let values: Vec<f64> = (0..1000).map(|i| (i % 256) as f64 + 0.5).collect();
        let hist = Histogram::from_values(&values);
        assert_eq!(hist.total(), 1000);
        assert_eq!(hist.counts().iter().sum::<u64>(), 1000);
        assert_eq!(hist.occupied_bins(), 256);
    }

    #[test]
    fn test_weighted_sum() {
        let hist = Histogram::from_values(&[0.0, 0.0, 10.0, 255.0]);
        assert_eq!(hist.weighted_sum(), 265.0);
        assert_eq!(hist.count(10), 1);
        assert_eq!(hist.count(999), 0);
    }

    #[test]
    fn test_from_counts() {
        let mut counts = [0u64; BINS];
        counts[3] = 5;
        counts[200] = 2;
        let hist = Histogram::from_counts(counts);
        assert_eq!(hist.total(), 7);
        assert_eq!(hist.weighted_sum(), 415.0);
    }
}
