use colored::Colorize;

use gradeboost::prelude::*;
use gradeboost::sample::SUBJECTS;

use std::env;
use std::io;
use std::path::Path;
use std::process;


const USAGE: &str = "[USAGE] predict-grades <ROUNDS> [TRAIN] [TEST] [GOLD]";
const DEFAULT_TRAIN: &str = "training.json";
const DEFAULT_TEST: &str = "sample-test.in.json";
const DEFAULT_GOLD: &str = "sample-test.out.json";


fn main() {
    let mut args = env::args().skip(1);

    let n_round = match args.next().and_then(|arg| arg.parse::<usize>().ok()) {
        Some(n_round) => n_round,
        None => {
            eprintln!("{}", USAGE.bold().red());
            process::exit(1);
        },
    };

    let train = args.next().unwrap_or_else(|| DEFAULT_TRAIN.to_string());
    let test = args.next().unwrap_or_else(|| DEFAULT_TEST.to_string());
    let gold = args.next().unwrap_or_else(|| DEFAULT_GOLD.to_string());

    if let Err(e) = run(n_round, &train, &test, &gold) {
        eprintln!("{} {e}", "[ERR]".bold().bright_red());
        process::exit(1);
    }
}


fn run(n_round: usize, train: &str, test: &str, gold: &str)
    -> io::Result<()>
{
    let mut train = SampleReader::default()
        .file(train)
        .read()?;
    let mut test = SampleReader::default()
        .file(test)
        .read()?;

    if train.is_empty() || test.is_empty() {
        return Err(invalid_data("both the training and test files need records"));
    }

    let gold = if Path::new(gold).exists() {
        let labels = read_grades(gold)?;
        if labels.len() != test.shape().0 {
            return Err(invalid_data(format!(
                "{} test records but {} gold grades",
                test.shape().0, labels.len(),
            )));
        }
        test.set_labels(&labels[..]);
        Some(labels)
    } else {
        None
    };

    let stump = DecisionStump::init(&train);
    let f: WeightedMajority<DecisionStumpClassifier> = {
        let booster = AdaBoost::init(&mut train)
            .rounds(n_round);
        let mut logger = Logger::new(booster, stump);
        if gold.is_some() {
            logger = logger.test_sample(&test);
        }
        logger.run()?
    };

    println!("{}", "Stumps (subject -> grade per branch)".bold());
    for (alpha, h) in f.iter() {
        let grades = h.labels.iter()
            .map(|y| (y + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {alpha:>10.5}  {:<18} [{grades}]", SUBJECTS[h.root]);
    }


    let predictions = f.test(&mut test);
    match gold {
        Some(labels) => {
            let accuracy = weighted_accuracy(&test, &predictions[..]);
            let score = grade_score(&predictions[..], &labels[..]);
            println!("{} {accuracy:.5}", "Weighted accuracy:".bold().green());
            println!("{} {score:.5}", "Score:".bold().green());
        },
        None => {
            predictions.into_iter()
                .for_each(|y| println!("{}", y + 1));
        },
    }
    Ok(())
}


fn invalid_data<E: Into<String>>(message: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}
