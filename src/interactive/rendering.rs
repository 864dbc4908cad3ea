//! TUI rendering with ratatui
//!
//! The game screen: root word as the title, found words as a
//! most-recent-first list, messages where the original showed alert dialogs.

use super::app::{App, MessageStyle};
use crate::engine::SpellChecker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: the root word
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Stats + messages
        ])
        .split(chunks[1]);

    render_found_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw("Root word: "),
        Span::styled(
            app.round.root().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_found_words<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let total = app.round.used().len();
    let items: Vec<ListItem> = app
        .round
        .used()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            // Most recent first; numbering reflects the order found
            let rank = total - i;
            ListItem::new(format!("{rank:>3}. {word}"))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found Words ({total}) "))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_info_panel<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Statistics
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let content = vec![
        Line::from(format!("Rounds played: {}", app.stats.rounds_played)),
        Line::from(format!("Words found:   {}", app.stats.words_found)),
        Line::from(format!("Best round:    {}", app.stats.best_round)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Your Answer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status<S: SpellChecker>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = format!("Round {}", app.stats.rounds_played);
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let found_text = format!("Found: {}", app.round.used().len());
    let found = Paragraph::new(found_text).alignment(Alignment::Center);
    f.render_widget(found, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Round | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
