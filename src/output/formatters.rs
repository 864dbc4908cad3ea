//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::engine::Rules;

/// Alert title for a verdict
///
/// The short, dialog-style headline shown with every classification.
#[must_use]
pub const fn verdict_title(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Accepted => "Word accepted",
        Verdict::NotConstructible => "Word not possible",
        Verdict::AlreadyUsed => "Word used already",
        Verdict::NotARealWord => "Word not recognised",
        Verdict::TooShort => "Word too short",
        Verdict::IsRootWord => "That's the root word",
    }
}

/// Alert message for a verdict
///
/// `root` is the current round's root word; the not-possible message quotes
/// it, and the too-short message names the configured minimum.
#[must_use]
pub fn verdict_message(verdict: Verdict, root: &str, rules: &Rules) -> String {
    match verdict {
        Verdict::Accepted => "Nice one!".to_string(),
        Verdict::NotConstructible => format!("You can't spell that word from '{root}'!"),
        Verdict::AlreadyUsed => "Be more original!".to_string(),
        Verdict::NotARealWord => "You can't just make them up, you know!".to_string(),
        Verdict::TooShort => format!("Answers need at least {} letters.", rules.min_length),
        Verdict::IsRootWord => "Using the root word itself would be too easy!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_distinct() {
        let verdicts = [
            Verdict::Accepted,
            Verdict::NotConstructible,
            Verdict::AlreadyUsed,
            Verdict::NotARealWord,
            Verdict::TooShort,
            Verdict::IsRootWord,
        ];

        let titles: std::collections::HashSet<_> =
            verdicts.iter().map(|&v| verdict_title(v)).collect();
        assert_eq!(titles.len(), verdicts.len());
    }

    #[test]
    fn not_possible_message_quotes_the_root() {
        let message = verdict_message(Verdict::NotConstructible, "silkworm", &Rules::default());
        assert!(message.contains("'silkworm'"));
    }

    #[test]
    fn too_short_message_names_the_minimum() {
        let rules = Rules::new(4, true);
        let message = verdict_message(Verdict::TooShort, "silkworm", &rules);
        assert!(message.contains('4'));
    }
}
