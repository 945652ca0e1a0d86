/// Defines the decision stump weak learner.
pub mod dstump;
/// Defines the classifier produced by `DecisionStump`.
pub mod dstump_classifier;

mod split;


pub use dstump::DecisionStump;
pub use dstump_classifier::DecisionStumpClassifier;
