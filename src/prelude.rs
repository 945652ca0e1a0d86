//! Exports the standard boosting algorithms and traits.
//! 
pub use crate::booster::{
    // Booster trait
    Booster,

    // Multiclass boosting
    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DecisionStump,
    DecisionStumpClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Instance,
    Sample,
    SampleReader,
    read_grades,
};


pub use crate::research::{
    Logger,
    CurrentHypothesis,
    weighted_error,
    weighted_accuracy,
    grade_score,
};
