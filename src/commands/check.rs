//! One-shot submission check
//!
//! Classifies a single candidate against a root word and an optional
//! already-played history.

use crate::core::{Round, Verdict};
use crate::engine::{Judge, SpellChecker};

/// Result of checking one candidate
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    pub used: Vec<String>,
    pub verdict: Verdict,
}

/// Judge `candidate` against `root`, with `used` already played this round
pub fn run_check<S: SpellChecker>(
    judge: &Judge<'_, S>,
    root: &str,
    used: &[String],
    candidate: &str,
) -> CheckResult {
    let mut round = Round::new(root);
    for word in used {
        round.record(word.clone());
    }

    let verdict = judge.evaluate(&round, candidate);

    CheckResult {
        root: root.to_string(),
        candidate: candidate.to_string(),
        used: round.used().to_vec(),
        verdict,
    }
}
