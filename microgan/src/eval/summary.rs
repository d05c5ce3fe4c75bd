//! Moments and range of a sample.

use std::fmt;

/// Count, mean, population standard deviation, and range of a set of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Number of values, NaN included.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divides by `count`).
    pub std: f64,
    /// Smallest non-NaN value.
    pub min: f64,
    /// Largest non-NaN value.
    pub max: f64,
}

impl Summary {
    /// Summarizes `values`. Returns `None` for an empty slice.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Some(Summary {
            count: values.len(),
            mean,
            std: var.sqrt(),
            min,
            max,
        })
    }

    /// `|mean| + |std - 1|`: zero for a sample matching N(0, 1) in its first two moments.
    #[must_use]
    pub fn normal_gap(&self) -> f64 {
        self.mean.abs() + (self.std - 1.0).abs()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.4} std={:.4} min={:.4} max={:.4}",
            self.count, self.mean, self.std, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_has_no_summary() {
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn moments_of_small_sample() {
        let s = Summary::of(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 2.5);
        assert_relative_eq!(s.std, 1.25_f64.sqrt());
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn normal_gap_is_zero_for_matching_moments() {
        // mean 0, population std 1
        let s = Summary::of(&[-1.0, 1.0]).unwrap();
        assert_relative_eq!(s.normal_gap(), 0.0);
        let t = Summary::of(&[3.0, 3.0]).unwrap();
        assert_relative_eq!(t.normal_gap(), 4.0);
    }

    #[test]
    fn display_lists_fields() {
        let s = Summary::of(&[0.0, 2.0]).unwrap().to_string();
        assert!(s.contains("n=2"));
        assert!(s.contains("mean=1.0000"));
    }
}
