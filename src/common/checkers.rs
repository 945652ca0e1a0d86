//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
//!
//! Every checker panics with a message on failure.
//! A violated pre-condition is a bug of the caller,
//! so there is nothing to recover from.

use crate::Sample;
use crate::constants::SIMPLEX_TOLERANCE;


/// Check whether the sample is valid or not.
#[inline(always)]
pub fn sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();

    assert!(n_sample > 0, "the sample has no instance");

    // `data` must have a feature.
    assert!(n_feature > 0, "the sample has no feature");

    n_class(sample.n_class());
}


/// Check whether every instance in the sample has a label.
/// Boosting needs the true labels to compute the weighted error.
#[inline(always)]
pub fn labeled(sample: &Sample) {
    let unlabeled = sample.iter()
        .position(|instance| instance.label.is_none());
    if let Some(row) = unlabeled {
        panic!("instance at row {row} has no label");
    }
}


/// Check the number of classes.
/// The multiclass importance factor contains `ln(K - 1)`,
/// so that at least two classes are required.
#[inline(always)]
pub fn n_class(n_class: usize) {
    assert!(
        n_class >= 2,
        "at least two classes are required. got {n_class}."
    );
}


/// Check the weighted error rate.
#[inline(always)]
pub fn error_rate(error: f64) {
    assert!(
        (0f64..=1f64).contains(&error),
        "error rate must be in [0, 1]. got {error}."
    );
}


/// Check whether the given slice is a probability vector.
#[inline(always)]
pub fn simplex_condition(slice: &[f64]) {
    let sum = slice.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(weights[..]) = {sum}"
    );

    assert!(
        slice.iter().all(|w| *w >= 0f64),
        "weights must be non-negative. weights = {slice:?}"
    );
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_n_class_success_01() {
        n_class(2);
    }

    #[test]
    fn test_n_class_success_02() {
        n_class(8);
    }

    #[test]
    #[should_panic]
    fn test_n_class_failure_01() {
        n_class(1);
    }

    #[test]
    fn test_error_rate_success_01() {
        error_rate(0f64);
    }

    #[test]
    fn test_error_rate_success_02() {
        error_rate(1f64);
    }

    #[test]
    #[should_panic]
    fn test_error_rate_failure_01() {
        error_rate(-0.0001);
    }

    #[test]
    #[should_panic]
    fn test_error_rate_failure_02() {
        error_rate(1.0001);
    }

    #[test]
    fn test_simplex_success_01() {
        simplex_condition(&[0.25, 0.25, 0.5]);
    }

    #[test]
    #[should_panic]
    fn test_simplex_failure_01() {
        simplex_condition(&[0.25, 0.25, 0.25]);
    }

    #[test]
    #[should_panic]
    fn test_simplex_failure_02() {
        simplex_condition(&[1.5, -0.5]);
    }
}
