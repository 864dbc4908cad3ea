//! The round-start vocabulary
//!
//! Owns the candidate root words and draws one uniformly per round.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

use super::FALLBACK_WORD;

/// Error type for vocabulary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The supplied word list had no entries
    EmptyVocabulary,
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => write!(f, "vocabulary must contain at least one word"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// The vocabulary a round's root word is drawn from
///
/// Never empty once constructed. The word list is fixed for the lifetime of
/// the source; nothing is removed between rounds, so the same root may recur.
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Build a source from a word list
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::EmptyVocabulary`] if `words` is empty, so
    /// that a round can never start without a root word to draw.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::{VocabularyError, WordSource};
    ///
    /// let source = WordSource::new(vec!["silkworm".to_string()]).unwrap();
    /// assert_eq!(source.len(), 1);
    ///
    /// let err = WordSource::new(Vec::new()).unwrap_err();
    /// assert_eq!(err, VocabularyError::EmptyVocabulary);
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::EmptyVocabulary);
        }
        Ok(Self { words })
    }

    /// The built-in single-word vocabulary, for when no list is available
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: vec![FALLBACK_WORD.to_string()],
        }
    }

    /// Number of candidate root words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty vocabularies are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a root word uniformly at random
    ///
    /// A direct uniform index draw over the vocabulary; the list itself is
    /// never shuffled or mutated.
    #[must_use]
    pub fn pick_root(&self) -> &str {
        self.pick_root_with(&mut rand::rng())
    }

    /// Draw a root word uniformly using the supplied generator
    pub fn pick_root_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        match self.words.choose(rng) {
            Some(word) => word,
            // Unreachable: the constructor rejects empty vocabularies
            None => FALLBACK_WORD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary(words: &[&str]) -> WordSource {
        WordSource::new(words.iter().map(ToString::to_string).collect()).unwrap()
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let result = WordSource::new(Vec::new());
        assert_eq!(result.unwrap_err(), VocabularyError::EmptyVocabulary);
    }

    #[test]
    fn fallback_has_one_word() {
        let source = WordSource::fallback();
        assert_eq!(source.len(), 1);
        assert_eq!(source.pick_root(), FALLBACK_WORD);
    }

    #[test]
    fn single_word_is_always_drawn() {
        let source = vocabulary(&["silkworm"]);
        for _ in 0..10 {
            assert_eq!(source.pick_root(), "silkworm");
        }
    }

    #[test]
    fn pick_returns_a_vocabulary_member() {
        let source = vocabulary(&["silkworm", "notebook", "keyboard"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let root = source.pick_root_with(&mut rng);
            assert!(["silkworm", "notebook", "keyboard"].contains(&root));
        }
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let source = vocabulary(&["silkworm", "notebook", "keyboard", "database"]);

        let mut first_rng = StdRng::seed_from_u64(7);
        let first: Vec<&str> = (0..20).map(|_| source.pick_root_with(&mut first_rng)).collect();

        let mut second_rng = StdRng::seed_from_u64(7);
        let second: Vec<&str> = (0..20).map(|_| source.pick_root_with(&mut second_rng)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn every_word_is_reachable() {
        let source = vocabulary(&["silkworm", "notebook", "keyboard"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(source.pick_root_with(&mut rng).to_string());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn vocabulary_is_not_mutated_by_draws() {
        let source = vocabulary(&["silkworm", "notebook"]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let _ = source.pick_root_with(&mut rng);
        }
        assert_eq!(source.len(), 2);
    }
}
