//! Word lists and the round-start vocabulary
//!
//! Provides the embedded word lists compiled into the binary, file-loading
//! utilities, and the vocabulary that each round's root word is drawn from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{ENGLISH, ENGLISH_COUNT, START, START_COUNT};
pub use source::{VocabularyError, WordSource};

/// The built-in fallback root word, used when no vocabulary can be loaded
pub const FALLBACK_WORD: &str = "silkworm";
