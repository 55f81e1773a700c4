//! TUI rendering with ratatui
//!
//! Board, chances and messages for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GuessRecord, Hint};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Previous season: {}", app.view().previous_season),
            Style::default().fg(Color::DarkGray),
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

const fn hint_style(hint: Hint) -> Style {
    let bg = match hint {
        Hint::Correct => Color::Green,
        Hint::Present => Color::Yellow,
        Hint::Absent => Color::Red,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::with_capacity(record.letters().len() * 2);
    for stat in record.letters() {
        spans.push(Span::styled(format!(" {} ", stat.symbol), hint_style(stat.hint())));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line(length: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(length * 2);
    for _ in 0..length {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let length = app.session.game().secret_word_length();

    let mut lines = vec![Line::from("")];
    if let Some(stats) = &view.stats {
        for record in &stats.guess_history {
            lines.push(guess_line(record));
            lines.push(Line::from(""));
        }
        for _ in 0..stats.remaining_chances() {
            lines.push(empty_line(length));
            lines.push(Line::from(""));
        }
    }

    if let Some(result) = &view.result {
        let color = if app.session.game().has_guessed_correctly() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            result.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(word) = &view.correct_word {
        lines.push(Line::from(vec![
            Span::raw("correct word: "),
            Span::styled(
                word.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if let Some(score) = view.score {
        lines.push(Line::from(format!("Score: {score}")));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Your Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Chances gauge
            Constraint::Length(5), // Session stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_chances(f, app, chunks[0]);
    render_session_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_chances(f: &mut Frame, app: &App, area: Rect) {
    let (chances, remaining) = app
        .view()
        .stats
        .as_ref()
        .map_or((0, 0), |s| (s.chances, s.remaining_chances()));
    let percent = chance_percent(remaining, chances);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Chances ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("Remaining: {remaining} / {chances}"));

    f.render_widget(gauge, area);
}

fn chance_percent(remaining: u32, chances: u32) -> u16 {
    if chances == 0 {
        return 0;
    }
    (u64::from(remaining.min(chances)) * 100 / u64::from(chances)) as u16
}

fn render_session_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let content = vec![
        Line::from(format!("Games:     {}", stats.total_games)),
        Line::from(format!("Win rate:  {win_rate:.0}%")),
        Line::from(format!("Total:     {} points", stats.total_score)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" This Session ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .view()
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess | Enter to submit ",
            app.view().input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc/Ctrl-C: Quit | Backspace: Delete | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
