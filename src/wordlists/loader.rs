//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Lines are trimmed and lowercased; blank lines and lines containing
/// non-alphabetic characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert an embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START;
///
/// let words = words_from_slice(START);
/// assert_eq!(words.len(), START.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases() {
        let input = &["Silkworm", "NOTEBOOK", "keyboard"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm", "notebook", "keyboard"]);
    }

    #[test]
    fn words_from_slice_skips_blank_lines() {
        let input = &["silkworm", "", "   ", "notebook"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm", "notebook"]);
    }

    #[test]
    fn words_from_slice_skips_non_alphabetic() {
        let input = &["silkworm", "cr4ne", "two words", "note-book"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm"]);
    }

    #[test]
    fn words_from_slice_trims_whitespace() {
        let input = &["  silkworm  "];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_embedded_start() {
        use crate::wordlists::START;

        let words = words_from_slice(START);
        assert_eq!(words.len(), START.len());
    }
}
