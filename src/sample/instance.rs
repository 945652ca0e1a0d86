//! Defines a single weighted example.
use serde::{Serialize, Deserialize};

use crate::constants::MISSING;


/// A categorical feature vector with a label and a weight.
///
/// Each feature value is a category index in `[-1, K - 1]`,
/// where `-1` ([`MISSING`]) means the value is not recorded.
/// The label is `None` until it is known (e.g., a test instance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Feature values.
    pub features: Vec<i32>,
    /// Class label, if known.
    pub label: Option<usize>,
    /// Non-negative weight used by boosting.
    pub weight: f64,
}


impl Instance {
    /// Construct an unlabeled instance with zero weight.
    pub fn new(features: Vec<i32>) -> Self {
        Self { features, label: None, weight: 0f64, }
    }


    /// Set the label of `self`.
    pub fn with_label(mut self, label: usize) -> Self {
        self.label = Some(label);
        self
    }


    /// Returns the value of the `j`th feature.
    #[inline(always)]
    pub fn value_at(&self, j: usize) -> i32 {
        self.features[j]
    }


    /// Returns the branch slot of the `j`th feature.
    /// The missing value occupies slot `0`.
    ///
    /// Panics if the value is below [`MISSING`].
    #[inline(always)]
    pub fn slot_at(&self, j: usize) -> usize {
        let value = self.features[j];
        assert!(
            value >= MISSING,
            "feature {j} has value {value}, below the missing value {MISSING}"
        );
        (value - MISSING) as usize
    }


    /// Returns `true` if the `j`th feature is missing.
    #[inline(always)]
    pub fn is_missing(&self, j: usize) -> bool {
        self.features[j] == MISSING
    }
}
