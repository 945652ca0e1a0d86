use crate::Sample;
use crate::common::checkers;


/// Returns the weighted error of `predictions` on `sample`,
/// i.e., the sum of the weights of the misclassified instances.
#[inline(always)]
pub fn weighted_error(sample: &Sample, predictions: &[usize]) -> f64 {
    sample.weighted_error(predictions)
}


/// Returns `1 - weighted_error(sample, predictions)`.
#[inline(always)]
pub fn weighted_accuracy(sample: &Sample, predictions: &[usize]) -> f64 {
    1f64 - weighted_error(sample, predictions)
}


/// Returns the fraction of the instances predicted correctly.
/// Every instance must have a label.
pub fn accuracy(sample: &Sample, predictions: &[usize]) -> f64 {
    let n_sample = sample.shape().0;
    assert_eq!(
        predictions.len(), n_sample,
        "the number of predictions does not match the number of instances"
    );
    assert!(n_sample > 0, "cannot score an empty sample");

    checkers::labeled(sample);

    let correct = sample.iter()
        .zip(predictions)
        .filter(|(instance, &p)| instance.label == Some(p))
        .count();

    correct as f64 / n_sample as f64
}


/// Returns the score
/// ```txt
/// 100 * (C - W) / N,
/// ```
/// where `C` is the number of predictions within one grade of the truth,
/// `W = N - C`, and `N` is the number of predictions.
pub fn grade_score(predictions: &[usize], labels: &[usize]) -> f64 {
    let n = predictions.len();
    assert_eq!(
        n, labels.len(),
        "the number of predictions does not match the number of labels"
    );
    assert!(n > 0, "cannot score an empty prediction");

    let close = predictions.iter()
        .zip(labels)
        .filter(|(&p, &y)| p.abs_diff(y) <= 1)
        .count() as f64;
    let wrong = n as f64 - close;

    100f64 * (close - wrong) / n as f64
}
