//! Binary cross-entropy and label construction.

use crate::autograd::{Log, ValueRef, VectorValue};
use crate::error::{ensure_extent, ensure_positive, Result};

/// Label for samples drawn from the real distribution.
pub const REAL_LABEL: f64 = 1.0;
/// Label for samples produced by the generator.
pub const FAKE_LABEL: f64 = 0.0;

/// Labels for a `[real; fake]` stack: `n_real` ones followed by `n_fake` zeros.
#[must_use]
pub fn stacked_labels(n_real: usize, n_fake: usize) -> Vec<f64> {
    let mut labels = vec![REAL_LABEL; n_real];
    labels.resize(n_real + n_fake, FAKE_LABEL);
    labels
}

/// Mean binary cross-entropy `-(y ln p + (1 - y) ln(1 - p))` over all rows.
///
/// Terms whose weight is exactly zero are left out of the graph, so hard labels
/// cost one log per row.
///
/// # Errors
///
/// - [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `predictions` is empty.
/// - [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `targets.len() != predictions.len()`.
pub fn binary_cross_entropy(predictions: &VectorValue, targets: &[f64]) -> Result<ValueRef> {
    ensure_positive("predictions", predictions.len())?;
    ensure_extent("binary_cross_entropy", predictions.len(), targets.len())?;
    let one = ValueRef::new(1.0);
    let terms: Vec<ValueRef> = predictions
        .nodes()
        .iter()
        .zip(targets)
        .map(|(p, &y)| {
            let mut parts = Vec::with_capacity(2);
            if y != 0.0 {
                parts.push(&p.log() * y);
            }
            if y != 1.0 {
                parts.push(&(&one - p).log() * (1.0 - y));
            }
            ValueRef::sum(&parts)
        })
        .collect();
    Ok(-&VectorValue::from_nodes(terms).mean())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::autograd::ScalarNode;

    fn probs(values: &[f64]) -> VectorValue {
        VectorValue::from_nodes(values.iter().copied().map(ValueRef::new).collect())
    }

    #[test]
    fn stacked_labels_put_real_first() {
        assert_eq!(stacked_labels(2, 3), vec![1.0, 1.0, 0.0, 0.0, 0.0]);
        assert!(stacked_labels(0, 0).is_empty());
    }

    #[test]
    fn bce_matches_closed_form() {
        let p = probs(&[0.8, 0.3]);
        let loss = binary_cross_entropy(&p, &[1.0, 0.0]).unwrap();
        let expected = -(0.8f64.ln() + 0.7f64.ln()) / 2.0;
        assert_relative_eq!(loss.data(), expected, epsilon = 1e-12);
    }

    #[test]
    fn bce_soft_label_uses_both_terms() {
        let p = probs(&[0.6]);
        let loss = binary_cross_entropy(&p, &[0.9]).unwrap();
        let expected = -(0.9 * 0.6f64.ln() + 0.1 * 0.4f64.ln());
        assert_relative_eq!(loss.data(), expected, epsilon = 1e-12);
    }

    #[test]
    fn bce_gradient_matches_analytic() {
        // dL/dp = -(y/p - (1-y)/(1-p)) / n
        let p = probs(&[0.25, 0.5]);
        let loss = binary_cross_entropy(&p, &[1.0, 0.0]).unwrap();
        loss.backward();
        let g = p.grad();
        assert_relative_eq!(g[0], -(1.0 / 0.25) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(g[1], (1.0 / 0.5) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn bce_is_non_negative_and_small_for_confident_correct() {
        let p = probs(&[0.999, 0.001]);
        let loss = binary_cross_entropy(&p, &[1.0, 0.0]).unwrap().data();
        assert!(loss >= 0.0);
        assert!(loss < 0.01);
    }

    #[test]
    fn bce_rejects_mismatched_or_empty_inputs() {
        let p = probs(&[0.5, 0.5]);
        assert!(binary_cross_entropy(&p, &[1.0]).is_err());
        assert!(binary_cross_entropy(&probs(&[]), &[]).is_err());
    }
}
