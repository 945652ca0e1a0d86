//! Provides the multiclass [`AdaBoost`] (SAMME)
//! by Zhu, Zou, Rosset, and Hastie, 2009.
use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    common::{checkers, utils},
    constants::{DEFAULT_ROUNDS, ERROR_PERTURBATION},
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines the multiclass `AdaBoost`, a.k.a. SAMME.
/// This struct is based on the paper:
/// [Multi-class AdaBoost](https://www.intlpress.com/site/pub/pages/journals/items/sii/content/vols/0002/0003/a008/)
/// by Ji Zhu, Hui Zou, Saharon Rosset, and Trevor Hastie.
///
/// In each round, a hypothesis with weighted error `e` gets the weight
/// ```txt
/// alpha = ln( (1 - e) / e ) + ln( K - 1 ),
/// ```
/// where `K` is the number of classes.
/// A hypothesis must beat the random guessing `1 - 1/K`,
/// not `1/2`, to get a positive weight.
/// The weights of the misclassified instances are multiplied by
/// `exp(alpha)` and then normalized.
///
/// [`AdaBoost`] runs exactly the number of rounds
/// given by [`AdaBoost::rounds`].
/// A round whose hypothesis is perfect (`e == 0`) does not
/// update the weights and its hypothesis gets the weight
/// `ln( (1 - 1e-5) / 1e-5 ) + ln( K - 1 )`.
///
/// # Example
/// ```no_run
/// use gradeboost::prelude::*;
///
/// let mut sample = SampleReader::default()
///     .file("training.json")
///     .read()
///     .unwrap();
///
/// let stump = DecisionStump::init(&sample);
/// let f = AdaBoost::init(&mut sample)
///     .rounds(50)
///     .run(&stump);
///
/// let error = sample.weighted_error(&f.predict_all(&sample));
/// println!("Training error (last weighting): {error}");
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample. The weights live in its instances.
    sample: &'a mut Sample,

    // The number of rounds.
    n_round: usize,

    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,

    // Weighted error of each hypothesis at its round.
    errors: Vec<f64>,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(sample: &'a mut Sample) -> Self {
        checkers::sample(sample);
        checkers::labeled(sample);

        AdaBoost {
            sample,
            n_round: DEFAULT_ROUNDS,

            weights: Vec::new(),
            hypotheses: Vec::new(),
            errors: Vec::new(),
        }
    }


    /// Set the number of rounds.
    /// Default value is `100`.
    pub fn rounds(mut self, n_round: usize) -> Self {
        self.n_round = n_round;
        self
    }


    /// Returns the weighted error of the hypothesis
    /// obtained at each round.
    pub fn errors(&self) -> &[f64] {
        &self.errors[..]
    }


    /// Returns the weight on a hypothesis with no weighted error.
    #[inline(always)]
    pub fn perfect_weight(&self) -> f64 {
        utils::importance_factor(ERROR_PERTURBATION, self.sample.n_class())
    }
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost (SAMME)"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of classes", format!("{}", self.sample.n_class())),
            ("# of rounds", format!("{}", self.n_round)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        self.sample.initialize_weights();

        self.weights = Vec::with_capacity(self.n_round);
        self.hypotheses = Vec::with_capacity(self.n_round);
        self.errors = Vec::with_capacity(self.n_round);
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_round < iteration {
            return ControlFlow::Break(self.n_round);
        }


        // Get a new hypothesis
        let h = weak_learner.produce(&*self.sample);


        let predictions = h.predict_all(&*self.sample);
        let error = self.sample.weighted_error(&predictions[..])
            .clamp(0f64, 1f64);


        // A perfect hypothesis leaves the weights as they are.
        let weight = self.sample.reweight(&predictions[..], error)
            .unwrap_or_else(|| self.perfect_weight());

        self.weights.push(weight);
        self.hypotheses.push(h);
        self.errors.push(error);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        self.current_hypothesis()
    }
}


impl<H> CurrentHypothesis for AdaBoost<'_, H>
    where H: Clone,
{
    type Output = WeightedMajority<H>;
    type Hypothesis = H;


    fn current_hypothesis(&self) -> Self::Output {
        WeightedMajority::from_parts(
            self.sample.n_class(),
            self.weights.clone(),
            self.hypotheses.clone(),
        )
    }


    fn last_hypothesis(&self) -> Option<(f64, &H)> {
        self.weights.last()
            .copied()
            .zip(self.hypotheses.last())
    }


    fn last_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}
