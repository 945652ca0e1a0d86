//! This directory provides some features for research  
//! Measure the followings of boosting algorithm per iteration
//! - Weight on the new hypothesis
//! - Weighted error of the new hypothesis
//! - Test accuracy
//! - Running time

/// Provides an algorithm that runs a boosting algorithm with logging.
pub mod logger;

/// Defines the metrics used to score predictions.
pub mod metrics;


pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use metrics::{
    weighted_error,
    weighted_accuracy,
    accuracy,
    grade_score,
};
