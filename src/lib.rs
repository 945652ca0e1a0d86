#![warn(missing_docs)]

//! 
//! A crate that predicts a missing grade from the other grades
//! of a student by multiclass boosting.
//! 
//! The ensemble is built by [`AdaBoost`], the multiclass variant
//! known as **SAMME** (Stagewise Additive Modeling
//! using a Multi-class Exponential loss).
//! In each round, [`DecisionStump`] picks the single categorical feature
//! whose split minimizes the weighted entropy of the class distribution
//! and labels every branch with its weighted-majority class.
//! 
//! - Weighted sample
//!     [`Sample`] holds categorical feature vectors,
//!     their labels and their weights.
//!     The weights are updated in place by the booster.
//! 
//! - Weak learner
//!     [`DecisionStump`] produces [`DecisionStumpClassifier`].
//! 
//! - Booster
//!     [`AdaBoost`] produces [`WeightedMajority`],
//!     a weighted vote over the stumps.
//! 
//! # Example
//! ```no_run
//! use gradeboost::prelude::*;
//! 
//! let mut sample = SampleReader::default()
//!     .file("training.json")
//!     .read()
//!     .unwrap();
//! 
//! let stump = DecisionStump::init(&sample);
//! let f = AdaBoost::init(&mut sample)
//!     .rounds(50)
//!     .run(&stump);
//! 
//! let predictions = f.predict_all(&sample);
//! ```

pub mod constants;
pub mod common;
pub mod sample;
pub mod weak_learner;
pub mod hypothesis;
pub mod booster;
pub mod research;
pub mod prelude;


pub use sample::{
    Instance,
    Sample,
    SampleReader,
    read_grades,
};

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    DecisionStumpClassifier,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use booster::{
    Booster,
    AdaBoost,
};

pub use research::{
    Logger,
    CurrentHypothesis,
};
