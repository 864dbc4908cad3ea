//! TUI application state and logic

use crate::core::Round;
use crate::engine::{Judge, SpellChecker};
use crate::output::formatters::{verdict_message, verdict_title};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: SpellChecker> {
    pub source: &'a WordSource,
    pub judge: Judge<'a, S>,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_round: usize,
}

impl<'a, S: SpellChecker> App<'a, S> {
    #[must_use]
    pub fn new(source: &'a WordSource, judge: Judge<'a, S>) -> Self {
        let round = Round::new(source.pick_root());

        let mut app = Self {
            source,
            judge,
            round,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };

        app.add_message(
            "Spell shorter words from the root word's letters.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter submits, Ctrl+N starts a new round, Esc quits.",
            MessageStyle::Info,
        );
        app
    }

    /// Start a new round: fresh root word, cleared history
    pub fn new_round(&mut self) {
        self.round = Round::new(self.source.pick_root());
        self.input_buffer.clear();
        self.stats.rounds_played += 1;

        let banner = format!("New round: {}", self.round.root().to_uppercase());
        self.add_message(&banner, MessageStyle::Info);
    }

    /// Judge the current input buffer and record it if accepted
    pub fn submit_input(&mut self) {
        let candidate = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        if candidate.is_empty() {
            return;
        }

        let verdict = self.judge.evaluate(&self.round, &candidate);
        if verdict.is_accepted() {
            self.round.record(candidate.clone());
            self.stats.words_found += 1;
            self.stats.best_round = self.stats.best_round.max(self.round.used().len());

            let banner = format!("Accepted: {candidate}");
            self.add_message(&banner, MessageStyle::Success);
        } else {
            let banner = format!(
                "{}: {}",
                verdict_title(verdict),
                verdict_message(verdict, self.round.root(), &self.judge.rules())
            );
            self.add_message(&banner, MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SpellChecker>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SpellChecker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if c.is_alphabetic() {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Rules, WordListChecker};

    fn fixture() -> (WordSource, WordListChecker) {
        let source = WordSource::new(vec!["silkworm".to_string()]).unwrap();
        let checker = WordListChecker::from_words(["silk", "worm", "works"], "en");
        (source, checker)
    }

    #[test]
    fn new_app_starts_a_round() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let app = App::new(&source, judge);

        assert_eq!(app.round.root(), "silkworm");
        assert!(app.round.used().is_empty());
        assert_eq!(app.stats.rounds_played, 1);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn submit_records_accepted_word() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let mut app = App::new(&source, judge);

        app.input_buffer = "silk".to_string();
        app.submit_input();

        assert_eq!(app.round.used(), ["silk"]);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.best_round, 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn submit_keeps_rejected_word_out_of_history() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let mut app = App::new(&source, judge);

        app.input_buffer = "zzz".to_string();
        app.submit_input();

        assert!(app.round.used().is_empty());
        assert_eq!(app.stats.words_found, 0);
    }

    #[test]
    fn submit_ignores_empty_input() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let mut app = App::new(&source, judge);
        let messages_before = app.messages.len();

        app.input_buffer = "   ".to_string();
        app.submit_input();

        assert_eq!(app.messages.len(), messages_before);
    }

    #[test]
    fn new_round_clears_history() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let mut app = App::new(&source, judge);

        app.input_buffer = "silk".to_string();
        app.submit_input();
        app.new_round();

        assert!(app.round.used().is_empty());
        assert_eq!(app.stats.rounds_played, 2);
        // Totals survive the reset
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.best_round, 1);
    }

    #[test]
    fn messages_are_capped() {
        let (source, checker) = fixture();
        let judge = Judge::new(&checker, Rules::default(), "en");
        let mut app = App::new(&source, judge);

        for _ in 0..10 {
            app.add_message("note", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
