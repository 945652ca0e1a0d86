use crate::{Instance, Sample};


/// A trait that defines the behavor of multiclass classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of the given instance.
    ///
    /// # Panics
    /// Every feature value of `instance` must lie in
    /// `[-1, n_class - 1]`, as [`Sample::from_instances`] checks.
    /// An instance built by hand with a value out of this range
    /// makes the prediction panic.
    fn predict(&self, instance: &Instance) -> usize;


    /// Predicts the labels of all instances in `sample`.
    /// The `i`th prediction corresponds to the `i`th instance.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        sample.iter()
            .map(|instance| self.predict(instance))
            .collect::<Vec<_>>()
    }
}
