use rand::Rng;
use rayon::prelude::*;

use std::ops::Index;
use std::slice;

use super::instance::Instance;
use crate::common::{checkers, utils};
use crate::constants::{ERROR_PERTURBATION, MISSING};


/// A batch of weighted instances with categorical features.
///
/// Every feature value lies in `[-1, n_class - 1]`
/// and every known label lies in `[0, n_class - 1]`.
/// After [`Sample::initialize_weights`] or [`Sample::reweight`],
/// the weights sum to `1`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) instances: Vec<Instance>,
    pub(super) n_feature: usize,
    pub(super) n_class: usize,
}


impl Sample {
    /// Construct a new sample from the given instances.
    /// The number of features is taken from the first instance.
    ///
    /// Panics if the instances have different lengths,
    /// or if a value or a label is out of range.
    pub fn from_instances(instances: Vec<Instance>, n_class: usize) -> Self {
        checkers::n_class(n_class);
        let n_feature = instances.first()
            .map(|instance| instance.features.len())
            .unwrap_or(0);

        let max_value = n_class as i32 - 1;
        for (row, instance) in instances.iter().enumerate() {
            assert_eq!(
                instance.features.len(), n_feature,
                "instance at row {row} has {} features, expected {n_feature}",
                instance.features.len(),
            );
            assert!(
                instance.features.iter()
                    .all(|v| (MISSING..=max_value).contains(v)),
                "instance at row {row} has a value out of [{MISSING}, {max_value}]. \
                features = {:?}",
                instance.features,
            );
            if let Some(y) = instance.label {
                assert!(
                    y < n_class,
                    "instance at row {row} has label {y} >= {n_class}"
                );
            }
        }

        Self { instances, n_feature, n_class, }
    }


    /// Returns the pair of the number of instances and features.
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.n_feature)
    }


    /// Returns the number of classes.
    pub fn n_class(&self) -> usize {
        self.n_class
    }


    /// Returns `true` if `self` has no instance.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }


    /// Returns an iterator over the instances.
    pub fn iter(&self) -> slice::Iter<'_, Instance> {
        self.instances.iter()
    }


    /// Returns the slice of instances.
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns the weights of the instances.
    pub fn weights(&self) -> Vec<f64> {
        self.instances.iter()
            .map(|instance| instance.weight)
            .collect()
    }


    /// Returns the labels of the instances.
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.instances.iter()
            .map(|instance| instance.label)
            .collect()
    }


    /// Attach the given labels to the instances.
    /// This method is used to evaluate a test sample
    /// whose labels are stored in another file.
    pub fn set_labels(&mut self, labels: &[usize]) {
        assert_eq!(
            labels.len(), self.instances.len(),
            "the number of labels does not match the number of instances"
        );
        let n_class = self.n_class;
        self.instances.iter_mut()
            .zip(labels)
            .for_each(|(instance, &y)| {
                assert!(y < n_class, "label {y} is out of [0, {n_class})");
                instance.label = Some(y);
            });
    }


    /// Set the weight of every instance to `1 / n`,
    /// where `n` is the number of instances.
    pub fn initialize_weights(&mut self) {
        let n_sample = self.instances.len();
        assert!(n_sample > 0, "cannot initialize the weights of an empty sample");

        let uni = 1f64 / n_sample as f64;
        self.instances.par_iter_mut()
            .for_each(|instance| { instance.weight = uni; });
    }


    /// Returns the sum of the weights of the instances
    /// whose prediction differs from its label.
    pub fn weighted_error(&self, predictions: &[usize]) -> f64 {
        self.check_predictions(predictions);

        self.instances.iter()
            .zip(predictions)
            .filter(|(instance, &p)| instance.label != Some(p))
            .map(|(instance, _)| instance.weight)
            .sum::<f64>()
    }


    /// Updates the weights for the given predictions
    /// whose weighted error is `error`
    /// and returns the importance factor `alpha`.
    ///
    /// - If `error == 1`, it is perturbed to `1 - 1e-5`.
    /// - If `error == 0`, the weights are not updated
    ///   and this method returns `None`.
    ///
    /// Otherwise, the weight of each misclassified instance is
    /// multiplied by `exp(alpha)`, where
    /// ```txt
    /// alpha = ln( (1 - error) / error ) + ln( n_class - 1 ),
    /// ```
    /// and the weights are normalized to sum to `1`.
    pub fn reweight(&mut self, predictions: &[usize], error: f64)
        -> Option<f64>
    {
        checkers::error_rate(error);
        self.check_predictions(predictions);

        let error = if error == 1f64 {
            1f64 - ERROR_PERTURBATION
        } else if error == 0f64 {
            return None;
        } else {
            error
        };


        let alpha = utils::importance_factor(error, self.n_class);
        let scale = alpha.exp();

        let mut weights = self.instances.par_iter()
            .zip(predictions)
            .map(|(instance, &p)| {
                if instance.label == Some(p) {
                    instance.weight
                } else {
                    instance.weight * scale
                }
            })
            .collect::<Vec<f64>>();
        utils::normalize(&mut weights[..]);

        self.instances.iter_mut()
            .zip(weights)
            .for_each(|(instance, w)| { instance.weight = w; });

        Some(alpha)
    }


    /// Draws at most `n` distinct rows with probability
    /// proportional to their weights.
    /// Rows are drawn one at a time, without replacement.
    /// Fewer rows are returned only if
    /// the remaining rows have no weight.
    pub fn weighted_subsample<R>(&self, n: usize, rng: &mut R) -> Vec<usize>
        where R: Rng + ?Sized,
    {
        let n_sample = self.instances.len();
        assert!(
            n <= n_sample,
            "cannot draw {n} rows from a sample of size {n_sample}"
        );

        let mut taken = vec![false; n_sample];
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            let total = self.instances.iter()
                .zip(&taken)
                .filter(|(_, &t)| !t)
                .map(|(instance, _)| instance.weight)
                .sum::<f64>();
            if total <= 0f64 { break; }

            let threshold = rng.gen::<f64>() * total;
            let mut running = 0f64;
            let mut last = None;
            for (i, instance) in self.instances.iter().enumerate() {
                if taken[i] || instance.weight <= 0f64 { continue; }
                running += instance.weight;
                last = Some(i);
                if running > threshold { break; }
            }

            // `last` is the chosen row, or the last candidate
            // when rounding leaves `running` just below `threshold`.
            if let Some(i) = last {
                taken[i] = true;
                rows.push(i);
            }
        }
        rows
    }


    #[inline(always)]
    fn check_predictions(&self, predictions: &[usize]) {
        assert_eq!(
            predictions.len(), self.instances.len(),
            "the number of predictions does not match \
            the number of instances"
        );
        checkers::labeled(self);
    }
}


impl Index<usize> for Sample {
    type Output = Instance;
    fn index(&self, row: usize) -> &Self::Output {
        &self.instances[row]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn sample_with_labels(labels: &[usize]) -> Sample {
        let instances = labels.iter()
            .enumerate()
            .map(|(i, &y)| Instance::new(vec![(i % 2) as i32]).with_label(y))
            .collect::<Vec<_>>();
        Sample::from_instances(instances, 2)
    }

    fn random_sample<R: Rng>(rng: &mut R, n_sample: usize, n_class: usize)
        -> Sample
    {
        let instances = (0..n_sample)
            .map(|_| {
                let features = (0..3)
                    .map(|_| rng.gen_range(MISSING..n_class as i32))
                    .collect();
                Instance::new(features).with_label(rng.gen_range(0..n_class))
            })
            .collect::<Vec<_>>();
        Sample::from_instances(instances, n_class)
    }

    #[test]
    fn test_initialize_weights_random_sizes() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let n_sample = rng.gen_range(1..200);
            let n_class = rng.gen_range(2..=8);
            let mut sample = random_sample(&mut rng, n_sample, n_class);
            sample.initialize_weights();

            let weights = sample.weights();
            let uni = 1.0 / n_sample as f64;
            assert!(weights.iter().all(|&w| w == uni), "{weights:?}");
            checkers::simplex_condition(&weights[..]);
        }
    }

    #[test]
    fn test_reweight_keeps_simplex() {
        let mut rng = StdRng::seed_from_u64(0xface);
        for _ in 0..500 {
            let n_sample = rng.gen_range(2..60);
            let n_class = rng.gen_range(2..=8);
            let mut sample = random_sample(&mut rng, n_sample, n_class);
            sample.initialize_weights();

            for _ in 0..5 {
                let predictions = (0..n_sample)
                    .map(|_| rng.gen_range(0..n_class))
                    .collect::<Vec<_>>();
                let error = sample.weighted_error(&predictions[..])
                    .clamp(0.0, 1.0);
                let alpha = sample.reweight(&predictions[..], error);

                if error > 0.0 {
                    assert!(matches!(alpha, Some(a) if a.is_finite()), "{alpha:?}");
                }
                checkers::simplex_condition(&sample.weights()[..]);
            }
        }
    }

    #[test]
    fn test_initialize_weights() {
        let mut sample = sample_with_labels(&[0, 1, 1]);
        sample.initialize_weights();
        let weights = sample.weights();
        assert!(weights.iter().all(|&w| w == weights[0]));
        checkers::simplex_condition(&weights[..]);
    }

    #[test]
    #[should_panic]
    fn test_initialize_weights_empty() {
        let mut sample = Sample::from_instances(Vec::new(), 2);
        sample.initialize_weights();
    }

    #[test]
    fn test_weighted_error() {
        let mut sample = sample_with_labels(&[0, 0, 1, 0]);
        sample.initialize_weights();
        let error = sample.weighted_error(&[0, 0, 0, 0]);
        assert_eq!(error, 0.25);
    }

    #[test]
    fn test_reweight_perfect_is_noop() {
        let mut sample = sample_with_labels(&[0, 0, 1, 1]);
        sample.initialize_weights();
        let alpha = sample.reweight(&[0, 0, 1, 1], 0.0);
        assert!(alpha.is_none());
        assert_eq!(sample.weights(), vec![0.25; 4]);
    }

    #[test]
    fn test_reweight_all_wrong_is_finite() {
        let mut sample = sample_with_labels(&[0, 0, 1, 1]);
        sample.initialize_weights();
        let alpha = sample.reweight(&[1, 1, 0, 0], 1.0).unwrap();
        assert!(alpha.is_finite());
        assert!(alpha < 0.0);
        checkers::simplex_condition(&sample.weights()[..]);
    }

    #[test]
    #[should_panic]
    fn test_reweight_length_mismatch() {
        let mut sample = sample_with_labels(&[0, 1]);
        sample.initialize_weights();
        sample.reweight(&[0], 0.5);
    }

    #[test]
    #[should_panic]
    fn test_reweight_unlabeled() {
        let instances = vec![Instance::new(vec![0]), Instance::new(vec![1])];
        let mut sample = Sample::from_instances(instances, 2);
        sample.initialize_weights();
        sample.reweight(&[0, 1], 0.5);
    }

    #[test]
    #[should_panic]
    fn test_value_out_of_range() {
        let instances = vec![Instance::new(vec![2]).with_label(0)];
        Sample::from_instances(instances, 2);
    }

    #[test]
    fn test_set_labels() {
        let instances = vec![Instance::new(vec![0]), Instance::new(vec![-1])];
        let mut sample = Sample::from_instances(instances, 2);
        sample.set_labels(&[1, 0]);
        assert_eq!(sample.labels(), vec![Some(1), Some(0)]);
    }

    #[test]
    fn test_weighted_subsample_distinct() {
        let mut sample = sample_with_labels(&[0, 1, 0, 1, 0, 1]);
        sample.initialize_weights();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut rows = sample.weighted_subsample(6, &mut rng);
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_weighted_subsample_skips_zero_weight() {
        let mut sample = sample_with_labels(&[0, 1, 0]);
        sample.initialize_weights();
        sample.instances[1].weight = 0.0;
        let mut rng = StdRng::seed_from_u64(7);
        let rows = sample.weighted_subsample(3, &mut rng);
        assert_eq!(rows.len(), 2);
        assert!(!rows.contains(&1));
    }
}
