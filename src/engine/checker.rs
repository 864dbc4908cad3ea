//! Spell-check capability
//!
//! Defines the `SpellChecker` trait and the bundled word-list implementation.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An external dictionary oracle
///
/// Implementations answer whether a word is known under a given locale.
/// Lookups are synchronous and side-effect-free. A locale the implementation
/// does not support reads as "word not known", never as an error.
pub trait SpellChecker {
    /// Whether `word` is a known word under `locale`
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

/// Word-list backed spell checker
///
/// Holds a lowercase word set tagged with the locale it covers. Matching is
/// on the primary language subtag, so `en`, `en-US` and `en_GB` all hit an
/// `en` word list.
#[derive(Debug, Clone)]
pub struct WordListChecker {
    words: FxHashSet<String>,
    locale: String,
}

impl WordListChecker {
    /// Build a checker from any word iterator
    ///
    /// Words are trimmed and lowercased; empty entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::engine::{SpellChecker, WordListChecker};
    ///
    /// let checker = WordListChecker::from_words(["Silk", "worm"], "en");
    /// assert!(checker.is_known_word("silk", "en"));
    /// assert!(checker.is_known_word("WORM", "en-US"));
    /// assert!(!checker.is_known_word("silk", "fr"));
    /// ```
    pub fn from_words<I, W>(words: I, locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self {
            words,
            locale: locale.into(),
        }
    }

    /// Load a checker from a newline-delimited word-list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use word_scramble::engine::WordListChecker;
    ///
    /// let checker = WordListChecker::from_file("data/english.txt", "en").unwrap();
    /// println!("Checker knows {} words", checker.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, locale: impl Into<String>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines(), locale))
    }

    /// Number of words the checker knows
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the checker knows no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn supports(&self, locale: &str) -> bool {
        primary_subtag(&self.locale).eq_ignore_ascii_case(primary_subtag(locale))
    }
}

impl SpellChecker for WordListChecker {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        self.supports(locale) && self.words.contains(&word.to_lowercase())
    }
}

/// The language part of a locale tag (`en` from `en_US` or `en-GB`)
fn primary_subtag(locale: &str) -> &str {
    match locale.find(['-', '_']) {
        Some(split) => &locale[..split],
        None => locale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes() {
        let checker = WordListChecker::from_words(["  Silk ", "WORM", ""], "en");
        assert_eq!(checker.len(), 2);
        assert!(checker.is_known_word("silk", "en"));
        assert!(checker.is_known_word("worm", "en"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let checker = WordListChecker::from_words(["silk"], "en");
        assert!(checker.is_known_word("SILK", "en"));
        assert!(checker.is_known_word("Silk", "en"));
    }

    #[test]
    fn unknown_word_reads_false() {
        let checker = WordListChecker::from_words(["silk"], "en");
        assert!(!checker.is_known_word("slik", "en"));
    }

    #[test]
    fn locale_matches_on_primary_subtag() {
        let checker = WordListChecker::from_words(["silk"], "en");
        assert!(checker.is_known_word("silk", "en-US"));
        assert!(checker.is_known_word("silk", "en_GB"));
        assert!(checker.is_known_word("silk", "EN"));
    }

    #[test]
    fn unsupported_locale_degrades_to_unknown() {
        let checker = WordListChecker::from_words(["silk"], "en");
        assert!(!checker.is_known_word("silk", "fr"));
        assert!(!checker.is_known_word("silk", "fr-FR"));
    }

    #[test]
    fn empty_checker_knows_nothing() {
        let checker = WordListChecker::from_words(Vec::<String>::new(), "en");
        assert!(checker.is_empty());
        assert!(!checker.is_known_word("silk", "en"));
    }
}
