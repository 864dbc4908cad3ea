//! Plain CLI game mode
//!
//! Line-oriented play without the TUI. Submissions are read from any
//! `BufRead`, which keeps the whole loop testable with an in-memory cursor.

use crate::core::Round;
use crate::engine::{Judge, SpellChecker};
use crate::output::formatters::{verdict_message, verdict_title};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::BufRead;

/// Run the line-oriented game loop
///
/// Commands: `new` starts a fresh round, `list` reprints the found words,
/// `quit` (or end of input) exits.
///
/// # Errors
///
/// Returns an error if reading a line from `reader` fails.
pub fn run_simple<S: SpellChecker, R: BufRead>(
    source: &WordSource,
    judge: &Judge<'_, S>,
    mut reader: R,
) -> Result<(), String> {
    println!("\n{}", "WORD SCRAMBLE".bold());
    println!("Spell shorter words from the letters of the root word.");
    println!("Commands: 'new' for a new round, 'list' for found words, 'quit' to exit.\n");

    let mut round = start_round(source);

    loop {
        let Some(line) = read_line(&mut reader)? else {
            break;
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "new" | "next" | "n" => {
                round = start_round(source);
                continue;
            }
            "list" | "l" => {
                print_found(&round);
                continue;
            }
            _ => {}
        }

        let verdict = judge.evaluate(&round, input);
        if verdict.is_accepted() {
            round.record(input);
            println!(
                "{} {} ({} found)",
                "✓".green().bold(),
                input.bold(),
                round.used().len()
            );
        } else {
            println!(
                "{} {}: {}",
                "✗".red().bold(),
                verdict_title(verdict).red().bold(),
                verdict_message(verdict, round.root(), &judge.rules())
            );
        }
    }

    print_found(&round);
    println!("Thanks for playing!");
    Ok(())
}

fn start_round(source: &WordSource) -> Round {
    let root = source.pick_root();
    println!(
        "{} {}",
        "Root word:".bold(),
        root.to_uppercase().yellow().bold()
    );
    Round::new(root)
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

fn print_found(round: &Round) {
    if round.used().is_empty() {
        println!("No words found yet for '{}'.", round.root());
    } else {
        println!("Found {} for '{}':", round.used().len(), round.root());
        for word in round.used() {
            println!("  {word}");
        }
    }
}
