//! Word Scramble - CLI
//!
//! Anagram word game with TUI and CLI modes: spell shorter words from the
//! letters of a randomly chosen root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{run_check, run_simple, run_solve},
    engine::{Judge, Rules, SpellChecker, WordListChecker},
    output::{print_check_result, print_solve_report},
    wordlists::{
        ENGLISH, START, WordSource,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Anagram word game: build shorter words from a root word's letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root-word vocabulary: 'builtin' or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Check list for spell checking: 'builtin' or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Locale passed to the spell checker
    #[arg(short = 'l', long, global = true, default_value = "en")]
    locale: String,

    /// Minimum answer length
    #[arg(short = 'm', long, global = true, default_value = "3")]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode reading answers from stdin
    Simple,

    /// Classify a single candidate against a root word
    Check {
        /// The round's root word
        root: String,

        /// The candidate answer to judge
        candidate: String,

        /// Words already played this round
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every check-list word that is a valid answer for a root
    Solve {
        /// The root word to solve
        root: String,
    },
}

/// Load the root-word vocabulary based on the -w flag
///
/// An explicit file that loads but contains no usable words is an error: a
/// round must never start without a root to draw. Only the built-in list
/// falls back to the single-word vocabulary.
fn load_vocabulary(mode: &str) -> Result<WordSource> {
    match mode {
        "builtin" => {
            Ok(WordSource::new(words_from_slice(START)).unwrap_or_else(|_| WordSource::fallback()))
        }
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            WordSource::new(words).with_context(|| format!("word list '{path}' has no usable words"))
        }
    }
}

/// Load the spell-check word list based on the -d flag
fn load_check_words(mode: &str) -> Result<Vec<String>> {
    match mode {
        "builtin" => Ok(words_from_slice(ENGLISH)),
        path => load_from_file(path).with_context(|| format!("failed to read check list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = load_vocabulary(&cli.wordlist)?;
    let check_words = load_check_words(&cli.dictionary)?;
    let checker = WordListChecker::from_words(check_words.iter(), cli.locale.as_str());

    let rules = Rules::new(cli.min_length, true);
    let judge = Judge::new(&checker, rules, cli.locale.as_str());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source, judge),
        Commands::Simple => {
            run_simple(&source, &judge, std::io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check {
            root,
            candidate,
            used,
        } => {
            let result = run_check(&judge, &root, &used, &candidate);
            print_check_result(&result, &rules);
            Ok(())
        }
        Commands::Solve { root } => {
            let report = run_solve(&judge, &root, &check_words);
            print_solve_report(&report);
            Ok(())
        }
    }
}

fn run_play_command<S: SpellChecker>(source: &WordSource, judge: Judge<'_, S>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(source, judge);
    run_tui(app)
}
