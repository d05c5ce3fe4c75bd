//! Per-iteration loss history.

/// Discriminator and generator losses, one entry each per training iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LossTrace {
    discriminator: Vec<f64>,
    generator: Vec<f64>,
}

impl LossTrace {
    /// An empty trace with room for `iterations` entries.
    #[must_use]
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            discriminator: Vec::with_capacity(iterations),
            generator: Vec::with_capacity(iterations),
        }
    }

    /// Records one iteration.
    pub fn push(&mut self, discriminator_loss: f64, generator_loss: f64) {
        self.discriminator.push(discriminator_loss);
        self.generator.push(generator_loss);
    }

    /// Discriminator losses in iteration order.
    #[must_use]
    pub fn discriminator(&self) -> &[f64] {
        &self.discriminator
    }

    /// Generator losses in iteration order.
    #[must_use]
    pub fn generator(&self) -> &[f64] {
        &self.generator
    }

    /// Number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.discriminator.len()
    }

    /// `true` before the first iteration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discriminator.is_empty()
    }

    /// `(discriminator, generator)` loss of the latest iteration.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.discriminator.last()?, *self.generator.last()?))
    }

    /// Mean of the last `window` entries of each sequence (fewer if the trace is shorter).
    #[must_use]
    pub fn moving_average(&self, window: usize) -> Option<(f64, f64)> {
        Some((
            moving_average(&self.discriminator, window)?,
            moving_average(&self.generator, window)?,
        ))
    }
}

fn moving_average(values: &[f64], window: usize) -> Option<f64> {
    if values.is_empty() || window == 0 {
        return None;
    }
    let tail = &values[values.len().saturating_sub(window)..];
    Some(tail.iter().sum::<f64>() / tail.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut t = LossTrace::with_capacity(2);
        assert!(t.is_empty());
        assert_eq!(t.last(), None);
        t.push(0.7, 0.6);
        t.push(0.5, 0.9);
        assert_eq!(t.len(), 2);
        assert_eq!(t.discriminator(), &[0.7, 0.5]);
        assert_eq!(t.generator(), &[0.6, 0.9]);
        assert_eq!(t.last(), Some((0.5, 0.9)));
    }

    #[test]
    fn moving_average_uses_tail() {
        let mut t = LossTrace::default();
        for i in 0..5 {
            t.push(i as f64, 10.0 * i as f64);
        }
        assert_eq!(t.moving_average(2), Some((3.5, 35.0)));
        assert_eq!(t.moving_average(100), Some((2.0, 20.0)));
        assert_eq!(t.moving_average(0), None);
        assert_eq!(LossTrace::default().moving_average(3), None);
    }
}
