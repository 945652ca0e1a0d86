use serde::{Serialize, Deserialize};
use crate::{
    common::utils,
    Classifier,
    Instance,
    Sample,
};


/// A struct that the boosting algorithms in this library return.
/// You can read/write this struct by `Serde` trait.
///
/// Each hypothesis votes for its prediction with its weight
/// and the label with the most votes wins.
/// The pairs are kept in the order they were added.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightedMajority<H> {
    /// The number of classes.
    pub n_class: usize,
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority` for `n_class` classes.
    #[inline]
    pub fn new(n_class: usize) -> Self {
        Self { n_class, weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Construct a new `WeightedMajority` from given vectors.
    #[inline]
    pub fn from_parts(
        n_class: usize,
        weights: Vec<f64>,
        hypotheses: Vec<H>,
    ) -> Self
    {
        assert_eq!(
            weights.len(), hypotheses.len(),
            "each hypothesis needs exactly one weight"
        );
        Self { n_class, weights, hypotheses, }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if `self` has no hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns an iterator over the pairs `(weight, hypothesis)`.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> WeightedMajority<H>
    where H: Classifier,
{
    /// Returns the votes for each class.
    /// `votes[k]` is the sum of the weights
    /// of the hypotheses predicting `k` for `instance`.
    pub fn votes(&self, instance: &Instance) -> Vec<f64> {
        let mut votes = vec![0f64; self.n_class];
        self.iter()
            .for_each(|(w, h)| { votes[h.predict(instance)] += w; });
        votes
    }


    /// Predicts the labels of a test sample.
    ///
    /// The weights of the test instances are reset to uniform,
    /// so that `sample.weighted_error(..)` can score the predictions.
    pub fn test(&self, sample: &mut Sample) -> Vec<usize> {
        sample.initialize_weights();
        self.predict_all(sample)
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    /// Ties are broken by the smallest label.
    fn predict(&self, instance: &Instance) -> usize {
        let votes = self.votes(instance);
        utils::argmax(&votes[..])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// A hypothesis that always predicts the same label.
    #[derive(Clone)]
    struct Constant(usize);

    impl Classifier for Constant {
        fn predict(&self, _instance: &Instance) -> usize {
            self.0
        }
    }

    #[test]
    fn test_heavier_vote_wins() {
        let mut f = WeightedMajority::new(2);
        f.push(2.0, Constant(0));
        f.push(1.0, Constant(1));

        let instance = Instance::new(vec![0]);
        assert_eq!(f.votes(&instance), vec![2.0, 1.0]);
        assert_eq!(f.predict(&instance), 0);
    }

    #[test]
    fn test_tie_goes_to_smaller_label() {
        let f = WeightedMajority::from_parts(
            3, vec![1.0, 1.0], vec![Constant(2), Constant(1)],
        );
        assert_eq!(f.predict(&Instance::new(vec![0])), 1);
    }

    #[test]
    fn test_weights_are_not_normalized() {
        let f = WeightedMajority::from_parts(
            2, vec![3.0, -1.0], vec![Constant(1), Constant(0)],
        );
        let (weights, _) = f.decompose();
        assert_eq!(weights, vec![3.0, -1.0]);
    }
}
