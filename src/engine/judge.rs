//! Submission judging
//!
//! The `Judge` classifies one candidate against the current round, in a
//! fixed priority order, reporting exactly one verdict.

use super::checker::SpellChecker;
use crate::core::{LetterPool, Round, Verdict};

/// Game rules the judge enforces beyond letter arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Minimum answer length, in characters
    pub min_length: usize,
    /// Reject the root word itself as an answer
    pub reject_root: bool,
}

impl Rules {
    /// Create rules with the given minimum length and root handling
    #[must_use]
    pub const fn new(min_length: usize, reject_root: bool) -> Self {
        Self {
            min_length,
            reject_root,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(3, true)
    }
}

/// Classifies candidate submissions
///
/// Pure: holds the checker, rules and locale but no round state, so the same
/// (round, candidate) pair always yields the same verdict. Recording an
/// accepted answer is the caller's job, via [`Round::record`].
pub struct Judge<'a, S: SpellChecker> {
    checker: &'a S,
    rules: Rules,
    locale: String,
}

impl<'a, S: SpellChecker> Judge<'a, S> {
    /// Create a judge over the given checker
    pub fn new(checker: &'a S, rules: Rules, locale: impl Into<String>) -> Self {
        Self {
            checker,
            rules,
            locale: locale.into(),
        }
    }

    /// The rules this judge enforces
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Classify `candidate` against `round`
    ///
    /// Checks run in a fixed order and the first failure wins: letter
    /// arithmetic, originality, root identity, length, then the dictionary.
    /// The structural checks all precede the external dictionary call, so an
    /// empty or one-letter submission is reported as too short rather than
    /// as unknown.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Round, Verdict};
    /// use word_scramble::engine::{Judge, Rules, WordListChecker};
    ///
    /// let checker = WordListChecker::from_words(["silk", "works"], "en");
    /// let judge = Judge::new(&checker, Rules::default(), "en");
    /// let mut round = Round::new("silkworm");
    ///
    /// assert_eq!(judge.evaluate(&round, "works"), Verdict::Accepted);
    ///
    /// round.record("works");
    /// assert_eq!(judge.evaluate(&round, "WORKS"), Verdict::AlreadyUsed);
    /// ```
    #[must_use]
    pub fn evaluate(&self, round: &Round, candidate: &str) -> Verdict {
        let lowered = candidate.to_lowercase();

        if !LetterPool::of(round.root()).covers(&lowered) {
            return Verdict::NotConstructible;
        }

        if round.contains(&lowered) {
            return Verdict::AlreadyUsed;
        }

        if self.rules.reject_root && round.is_root(&lowered) {
            return Verdict::IsRootWord;
        }

        if lowered.chars().count() < self.rules.min_length {
            return Verdict::TooShort;
        }

        if !self.checker.is_known_word(&lowered, &self.locale) {
            return Verdict::NotARealWord;
        }

        Verdict::Accepted
    }
}
