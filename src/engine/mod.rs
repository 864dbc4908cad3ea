//! Submission validation engine
//!
//! Classifies candidate answers against the current round: letter
//! arithmetic against the root word, originality against the round history,
//! the game's length and root-identity rules, and a dictionary lookup
//! through the injectable [`SpellChecker`] capability.

mod checker;
mod judge;

pub use checker::{SpellChecker, WordListChecker};
pub use judge::{Judge, Rules};
