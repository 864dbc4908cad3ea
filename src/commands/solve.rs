//! Root word solving
//!
//! Finds every check-list word that is a valid answer for a root word.

use crate::core::Round;
use crate::engine::{Judge, SpellChecker};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Every valid answer found for one root word
pub struct SolveReport {
    pub root: String,
    pub answers: Vec<String>,
    pub scanned: usize,
    pub duration: Duration,
}

/// Evaluate every word in `dictionary` against a fresh round for `root`
///
/// Judging runs through the same pipeline interactive play uses, so the
/// length and root-identity rules apply here too. Answers come back longest
/// first, alphabetical within a length.
///
/// # Panics
///
/// Panics if the progress bar template fails to parse (it is a constant).
pub fn run_solve<S: SpellChecker>(
    judge: &Judge<'_, S>,
    root: &str,
    dictionary: &[String],
) -> SolveReport {
    let round = Round::new(root);
    let start = Instant::now();

    let pb = ProgressBar::new(dictionary.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut answers: Vec<String> = Vec::new();
    for word in dictionary {
        if judge.evaluate(&round, word).is_accepted() {
            answers.push(word.clone());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    answers.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    answers.dedup();

    SolveReport {
        root: root.to_string(),
        answers,
        scanned: dictionary.len(),
        duration: start.elapsed(),
    }
}
