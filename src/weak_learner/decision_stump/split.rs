//! Defines the weighted contingency table of a categorical split.
use crate::Sample;
use crate::common::utils;


/// Weighted class counts of each branch of a split on a single feature.
///
/// `counts[v][k]` is the total weight of the instances
/// whose feature value occupies slot `v`
/// (the missing value is slot `0`) and whose label is `k`.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Split {
    counts: Vec<Vec<f64>>,
}


impl Split {
    /// Builds the contingency table of the `feature`th feature.
    /// Unlabeled instances are not counted.
    pub(super) fn of(sample: &Sample, feature: usize) -> Self {
        let n_class = sample.n_class();
        let mut counts = vec![vec![0f64; n_class]; n_class + 1];

        for instance in sample.iter() {
            if let Some(y) = instance.label {
                counts[instance.slot_at(feature)][y] += instance.weight;
            }
        }

        Self { counts }
    }


    /// Returns the sum of `N_v * H_v` over the branches,
    /// where `N_v` is the mass of branch `v`
    /// and `H_v` is the entropy of its class distribution.
    /// Empty branches contribute nothing.
    ///
    /// This value is not divided by the total mass;
    /// the total mass is the same for every feature in a round.
    pub(super) fn entropy(&self) -> f64 {
        self.counts.iter()
            .map(|branch| utils::mass_weighted_entropy(&branch[..]))
            .sum::<f64>()
    }


    /// Returns the weighted-majority label of each branch.
    /// Ties are broken by the smallest label.
    /// A branch without mass gets `default`.
    pub(super) fn majority_labels(&self, default: usize) -> Vec<usize> {
        self.counts.iter()
            .map(|branch| {
                let mass = branch.iter().sum::<f64>();
                if mass > 0f64 {
                    utils::argmax(&branch[..])
                } else {
                    default
                }
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Instance;

    fn sample(values: &[i32], labels: &[usize], n_class: usize) -> Sample {
        let instances = values.iter()
            .zip(labels)
            .map(|(&v, &y)| Instance::new(vec![v]).with_label(y))
            .collect();
        let mut sample = Sample::from_instances(instances, n_class);
        sample.initialize_weights();
        sample
    }

    #[test]
    fn test_counts_include_missing_slot() {
        let sample = sample(&[-1, 0, 1, 1], &[1, 0, 1, 0], 2);
        let split = Split::of(&sample, 0);
        assert_eq!(
            split.counts,
            vec![vec![0.0, 0.25], vec![0.25, 0.0], vec![0.25, 0.25]]
        );
    }

    #[test]
    fn test_perfect_split_has_zero_entropy() {
        let sample = sample(&[0, 0, 1, 1], &[0, 0, 1, 1], 2);
        let split = Split::of(&sample, 0);
        assert_eq!(split.entropy(), 0.0);
    }

    #[test]
    fn test_entropy_is_mass_weighted() {
        let sample = sample(&[0, 0, 1, 1], &[0, 0, 1, 0], 2);
        let split = Split::of(&sample, 0);
        let expected = 0.5 * 2f64.ln();
        let entropy = split.entropy();
        assert!(
            (entropy - expected).abs() < 1e-12,
            "expected {expected}, got {entropy}"
        );
    }

    #[test]
    fn test_majority_labels() {
        let sample = sample(&[0, 0, 1, 1, 2], &[2, 2, 1, 0, 2], 3);
        let split = Split::of(&sample, 0);
        // slot 0 (missing) is empty, slot 2 is a tie between 0 and 1.
        assert_eq!(split.majority_labels(1), vec![1, 2, 0, 2]);
    }
}
