use colored::Colorize;

use crate::{
    Sample,
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    constants::DEFAULT_PRINT_EVERY,
};
use super::metrics;

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::ops::ControlFlow;

const COL: usize = 9;
const PREC: usize = 5;
const RULE: usize = 64;
const KEY: usize = 24;
const CSV_HEADER: &str = "Round,Alpha,Error,Hypothesis,TestAccuracy,Time";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The combined hypothesis type.
    type Output;

    /// The hypothesis type added each round.
    type Hypothesis;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;

    /// Returns the latest pair `(weight, hypothesis)` without cloning.
    fn last_hypothesis(&self) -> Option<(f64, &Self::Hypothesis)>;

    /// Returns the weighted error of the latest hypothesis
    /// with respect to the weighting it was trained on.
    fn last_error(&self) -> Option<f64>;
}


/// Struct `Logger` runs a boosting algorithm and
/// prints, for each round, the weight on the new hypothesis,
/// the new hypothesis itself (chosen feature and label table),
/// its weighted error, the test accuracy, and the running time.
///
/// # Example
/// ```no_run
/// use gradeboost::prelude::*;
///
/// let mut train = SampleReader::default()
///     .file("training.json")
///     .read()
///     .unwrap();
/// let stump = DecisionStump::init(&train);
/// let booster = AdaBoost::init(&mut train).rounds(20);
///
/// let f = Logger::new(booster, stump)
///     .print_every(5)
///     .output("adaboost.csv")
///     .run()
///     .unwrap();
/// ```
pub struct Logger<'a, B, W> {
    booster: B,
    weak_learner: W,
    test: Option<&'a Sample>,
    round: usize,
    output: Option<PathBuf>,
}


/// Values measured in one round.
struct Row<'h, H> {
    round: usize,
    alpha: f64,
    error: f64,
    hypothesis: &'h H,
    test: f64,
    millis: u128,
}


impl<H: fmt::Display> Row<'_, H> {
    fn csv(&self) -> String {
        format!(
            "{},{},{},\"{}\",{},{}\n",
            self.round, self.alpha, self.error,
            self.hypothesis, self.test, self.millis,
        )
    }


    fn print(&self) {
        println!(
            "{} {}  {}  {}  {}  {}  {}",
            "[LOG]".bold().magenta(),
            format!("{:>COL$}", self.round).red(),
            format!("{:>COL$.PREC$}", self.alpha).blue(),
            format!("{:>COL$.PREC$}", self.error).green(),
            format!("{:>COL$.PREC$}", self.test).yellow(),
            elapsed(self.millis).cyan(),
            self.hypothesis,
        );
    }
}


impl<'a, B, W> Logger<'a, B, W> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self {
            booster,
            weak_learner,
            test: None,
            round: DEFAULT_PRINT_EVERY,
            output: None,
        }
    }


    /// Set the labeled test sample.
    /// The accuracy on this sample is logged every round.
    pub fn test_sample(mut self, test: &'a Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Print the status every `round` rounds.
    /// `usize::MAX` turns the terminal output off.
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "the interval must be positive");
        self.round = round;
        self
    }


    /// Write the log of every round to `file` as CSV.
    pub fn output<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.output = Some(file.as_ref().to_path_buf());
        self
    }
}


impl<H, B, W> Logger<'_, B, W>
    where B: Booster<H, Output = WeightedMajority<H>>
            + CurrentHypothesis<Output = WeightedMajority<H>, Hypothesis = H>,
          W: WeakLearner<Hypothesis = H>,
          H: Classifier + fmt::Display,
{
    fn print_stats(&self) {
        println!("\n{}", "=".repeat(RULE));
        println!("{:^RULE$}", "STATS".bold());
        println!("{}", "-".repeat(RULE));
        print_component("Booster", self.booster.name(), self.booster.info());
        print_component(
            "Weak Learner",
            self.weak_learner.name(),
            self.weak_learner.info(),
        );
        println!("{}\n", "=".repeat(RULE));

        println!(
            "      {:>COL$}  {:>COL$}  {:>COL$}  {:>COL$}  {:>COL$}  {}",
            "ROUND".bold().red(),
            "ALPHA".bold().blue(),
            "ERROR".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
            "HYPOTHESIS".bold(),
        );
    }


    /// Runs the booster like `Booster::run`
    /// while measuring every round.
    pub fn run(&mut self) -> io::Result<WeightedMajority<H>> {
        let mut file = match self.output.as_ref() {
            Some(path) => {
                let mut file = File::create(path)?;
                writeln!(file, "{CSV_HEADER}")?;
                Some(file)
            },
            None => None,
        };

        self.booster.preprocess();
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
        }


        let mut millis = 0;
        let mut written = Ok(());
        let _ = (1..).try_for_each(|round| {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, round);
            millis += now.elapsed().as_millis();

            // The combined hypothesis is cloned only to score the test sample.
            let test = self.test
                .map(|test| {
                    test_accuracy(test, &self.booster.current_hypothesis())
                })
                .unwrap_or(f64::NAN);

            if let ControlFlow::Break(done) = flow {
                if verbose {
                    println!(
                        "{} {}  {}  {}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{done:>COL$} rounds").red(),
                        format!("test {test:.PREC$}").bold().yellow(),
                        elapsed(millis).bold().cyan(),
                    );
                }
                return flow;
            }

            let Some((alpha, hypothesis)) = self.booster.last_hypothesis() else {
                return flow;
            };
            let row = Row {
                round,
                alpha,
                error: self.booster.last_error().unwrap_or(f64::NAN),
                hypothesis,
                test,
                millis,
            };

            if let Some(file) = file.as_mut() {
                if let Err(e) = file.write_all(row.csv().as_bytes()) {
                    written = Err(e);
                    return ControlFlow::Break(round);
                }
            }
            if verbose && round % self.round == 0 {
                row.print();
            }
            flow
        });
        written?;

        Ok(self.booster.postprocess())
    }
}


fn print_component(kind: &str, name: &str, info: Option<Vec<(&str, String)>>) {
    println!("+ {:<KEY$}{:>KEY$}", kind.bold(), name.bold().green());
    info.into_iter()
        .flatten()
        .for_each(|(key, value)| {
            println!("    + {:<KEY$}{:>w$}", key, value.yellow(), w = KEY - 4);
        });
}


/// Test accuracy, or `NaN` if some test instance has no label.
fn test_accuracy<H>(test: &Sample, f: &WeightedMajority<H>) -> f64
    where H: Classifier,
{
    if test.is_empty() || test.iter().any(|ins| ins.label.is_none()) {
        return f64::NAN;
    }
    let predictions = f.predict_all(test);
    metrics::accuracy(test, &predictions[..])
}


/// Formats milliseconds as `s.mmm`, `MmSSs` or `HhMMm`.
fn elapsed(millis: u128) -> String {
    let secs = millis / 1_000;
    match secs {
        0..=59 => format!("{:>6}.{:03}s", secs, millis % 1_000),
        60..=3_599 => format!("{:>5}m{:02}s", secs / 60, secs % 60),
        _ => format!("{:>5}h{:02}m", secs / 3_600, (secs / 60) % 60),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed() {
        assert_eq!(elapsed(42), "     0.042s");
        assert_eq!(elapsed(61_500), "    1m01s");
        assert_eq!(elapsed(7_260_000), "    2h01m");
    }
}
