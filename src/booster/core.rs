//! Provides `Booster` trait.

use crate::WeakLearner;
use std::ops::ControlFlow;


/// A boosting algorithm plays a game of rounds against a weak learner.
///
/// In round `t = 1, 2, ...`,
/// the booster puts weights on the training instances,
/// and the weak learner answers with a hypothesis
/// that does well on the weighted sample.
/// When the booster stops, it combines the hypotheses into one.
///
/// Implementors fill in the three stages
/// [`Booster::preprocess`], [`Booster::boost`] and [`Booster::postprocess`].
/// [`Booster::run`] wires them together.
/// `Logger` drives the same stages one by one
/// to measure each round.
pub trait Booster<H> {
    /// The combined hypothesis.
    type Output;


    /// Returns the name shown by `Logger`.
    fn name(&self) -> &str;


    /// Returns `(key, value)` pairs describing the current settings.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Runs every round and returns the combined hypothesis.
    fn run<W>(&mut self, weak_learner: &W) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess();

        let _ = (1..).try_for_each(|round| {
            self.boost(weak_learner, round)
        });

        self.postprocess()
    }


    /// Resets the state before the first round.
    fn preprocess(&mut self);


    /// Plays the `iteration`th round (1-based).
    /// Returns `ControlFlow::Break(n)` once `n` rounds are done.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;


    /// Builds the combined hypothesis after the last round.
    fn postprocess(&mut self) -> Self::Output;
}
