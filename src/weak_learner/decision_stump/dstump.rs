//! Provides the decision stump class.
use rayon::prelude::*;

use crate::{Sample, WeakLearner};
use crate::common::{checkers, utils};
use super::{
    split::Split,
    dstump_classifier::DecisionStumpClassifier,
};


/// The Decision Stump algorithm.
/// Given a weighted sample with categorical features,
/// [`DecisionStump`] outputs a [`DecisionStumpClassifier`]
/// that splits on the single feature
/// minimizing the weighted entropy of the class distribution.
/// Each branch predicts its weighted-majority class.
///
/// Ties are broken deterministically:
/// the smallest feature index wins among features with the same entropy,
/// and the smallest class wins among classes with the same mass.
///
/// # Example
/// ```no_run
/// use gradeboost::prelude::*;
///
/// let mut sample = SampleReader::default()
///     .file("training.json")
///     .read()
///     .unwrap();
/// sample.initialize_weights();
///
/// let stump = DecisionStump::init(&sample);
/// let h = stump.produce(&sample);
///
/// let predictions = h.predict_all(&sample);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionStump {
    n_feature: usize,
    n_class: usize,
}


impl DecisionStump {
    /// Initializes [`DecisionStump`] for the shape of `sample`.
    pub fn init(sample: &Sample) -> Self {
        checkers::sample(sample);
        let (_, n_feature) = sample.shape();
        let n_class = sample.n_class();

        Self { n_feature, n_class, }
    }


    /// The label of a branch that receives no instance.
    /// This is the middle class.
    #[inline(always)]
    pub fn default_label(&self) -> usize {
        self.n_class / 2
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = DecisionStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of features", format!("{}", self.n_feature)),
            ("# of classes", format!("{}", self.n_class)),
            ("Split by", "Entropy".to_string()),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample) -> Self::Hypothesis {
        checkers::sample(sample);
        checkers::labeled(sample);
        assert_eq!(
            sample.shape().1, self.n_feature,
            "the sample has a different number of features"
        );
        assert_eq!(
            sample.n_class(), self.n_class,
            "the sample has a different number of classes"
        );


        // Each split is independent of the others.
        // `collect` keeps the feature order
        // so that ties go to the smallest index.
        let splits = (0..self.n_feature).into_par_iter()
            .map(|feature| {
                let split = Split::of(sample, feature);
                let entropy = split.entropy();
                (entropy, split)
            })
            .collect::<Vec<_>>();

        let entropies = splits.iter()
            .map(|(entropy, _)| *entropy)
            .collect::<Vec<_>>();
        let root = utils::argmin(&entropies[..]);

        let labels = splits[root].1
            .majority_labels(self.default_label());

        DecisionStumpClassifier::new(root, labels)
    }
}
