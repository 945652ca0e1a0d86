//! Provides the classifier produced by `DecisionStump`.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, Instance};


/// The struct `DecisionStumpClassifier` defines the decision stump class.
/// Given an instance, it predicts the label assigned
/// to the branch of its `root`th feature value.
///
/// `labels[0]` is the prediction for a missing value
/// and `labels[v + 1]` is the prediction for value `v`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionStumpClassifier {
    /// The index of the feature used in prediction.
    pub root: usize,

    /// The predicted label of each branch.
    pub labels: Vec<usize>,
}


impl DecisionStumpClassifier {
    /// Construct a new classifier.
    pub fn new(root: usize, labels: Vec<usize>) -> Self {
        Self { root, labels, }
    }
}


impl Classifier for DecisionStumpClassifier {
    #[inline]
    fn predict(&self, instance: &Instance) -> usize {
        let slot = instance.slot_at(self.root);
        match self.labels.get(slot) {
            Some(&label) => label,
            None => panic!(
                "feature {} has value {}, but this stump knows values up to {}",
                self.root,
                instance.value_at(self.root),
                self.labels.len() as i32 - 2,
            ),
        }
    }
}


impl fmt::Display for DecisionStumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels.iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "feature {} -> [{labels}]", self.root)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_slot_zero() {
        let h = DecisionStumpClassifier::new(1, vec![2, 0, 1]);
        assert_eq!(h.predict(&Instance::new(vec![0, -1])), 2);
        assert_eq!(h.predict(&Instance::new(vec![-1, 0])), 0);
        assert_eq!(h.predict(&Instance::new(vec![-1, 1])), 1);
    }

    #[test]
    #[should_panic(expected = "below the missing value")]
    fn test_value_below_missing() {
        let h = DecisionStumpClassifier::new(0, vec![0, 1, 1]);
        h.predict(&Instance::new(vec![-2]));
    }

    #[test]
    #[should_panic(expected = "knows values up to 1")]
    fn test_value_out_of_range() {
        let h = DecisionStumpClassifier::new(0, vec![0, 1, 1]);
        h.predict(&Instance::new(vec![2]));
    }

    #[test]
    fn test_display() {
        let h = DecisionStumpClassifier::new(3, vec![1, 0, 1]);
        assert_eq!(h.to_string(), "feature 3 -> [1 0 1]");
    }
}
