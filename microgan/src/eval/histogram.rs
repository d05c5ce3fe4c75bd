//! Equal-width histogram of a sample, rendered as text bars by the binary.

use std::fmt;

use crate::error::{ensure_positive, Result};

const BAR_WIDTH: usize = 50;

/// Counts of `values` in `bins` equal-width buckets spanning `[min, max]`.
///
/// The last bucket is closed on the right so `max` is counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    min: f64,
    max: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Buckets the finite entries of `values`; NaN and infinities are skipped.
    ///
    /// When every finite value is equal the range is widened by 0.5 on each side.
    /// With no finite values the histogram spans `[0, 1]` and every count is zero.
    ///
    /// # Errors
    ///
    /// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `bins` is zero.
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self> {
        ensure_positive("bins", bins)?;
        let finite = || values.iter().copied().filter(|x| x.is_finite());
        let (mut min, mut max) = finite()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        if min > max {
            (min, max) = (0.0, 1.0);
        } else if min == max {
            min -= 0.5;
            max += 0.5;
        }
        let width = (max - min) / bins as f64;
        let mut counts = vec![0; bins];
        for x in finite() {
            let idx = (((x - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Histogram { min, max, counts })
    }

    /// Count per bucket, lowest bucket first.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// `bins + 1` bucket edges from `min` to `max`.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        let bins = self.counts.len();
        let width = (self.max - self.min) / bins as f64;
        (0..=bins).map(|i| self.min + width * i as f64).collect()
    }

    /// Number of values counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let edges = self.edges();
        for (i, &count) in self.counts.iter().enumerate() {
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            writeln!(
                f,
                "[{:>8.3}, {:>8.3}) {:>6} {}",
                edges[i],
                edges[i + 1],
                count,
                bar
            )?;
        }
        Ok(())
    }
}
