//! Provides `WeakLearner` trait.
use crate::Sample;


/// An interface for weak learners.
///
/// Given a weighted sample,
/// a weak learner returns a hypothesis
/// that is slightly better than the random guessing
/// with respect to the weights on the instances.
pub trait WeakLearner {
    /// The hypothesis produced by `self`.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample`,
    /// using the current weights of its instances.
    fn produce(&self, sample: &Sample) -> Self::Hypothesis;
}
