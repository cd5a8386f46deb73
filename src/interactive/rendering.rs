//! TUI rendering with ratatui
//!
//! Pure functions of [`App`] state; nothing here mutates the game.

use super::app::{App, Screen};
use crate::core::{Difficulty, MAX_LEVEL};
use crate::game::MessageKind;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    match app.screen {
        Screen::Loading => render_loading(f, app),
        Screen::DifficultySelect => render_menu(f, app),
        Screen::Playing => render_game(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect, subtitle: &str) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "🔤 WORD UNSCRAMBLE",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(header, area);
}

fn render_loading<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(4), // Title
            Constraint::Length(3), // Gauge
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[1], "Loading words...");

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Loading "))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(app.loading_percent());
    f.render_widget(gauge, chunks[2]);
}

fn render_menu<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(5),    // Tiers
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0], "Select a difficulty level to start the game");

    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| {
            let marker = if i == app.selected { "▶" } else { " " };
            let mut style = Style::default().fg(tier_color(difficulty));
            if i == app.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            ListItem::new(format!(
                " {marker} {:<7} {:<18} x{} points",
                difficulty.label(),
                difficulty.category(),
                difficulty.multiplier()
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Difficulty ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, chunks[1]);

    let help = Paragraph::new("↑/↓: Select | Enter: Start | e/m/h: Quick start | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_game<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Status
            Constraint::Length(5), // Letter tiles
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(3), // Hint
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Banner
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0], "Unscramble the Word");
    render_status(f, app, chunks[1]);
    render_tiles(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_message(f, app, chunks[4]);
    render_hint(f, app, chunks[5]);
    render_progress(f, app, chunks[6]);
    render_banner(f, app, chunks[7]);

    let help = Paragraph::new("Enter: Submit | Tab: Use Hint | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[8]);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let session = app.engine.session();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let level = Paragraph::new(format!("Level {}", session.level()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(level, chunks[0]);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            session.score().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, chunks[1]);

    let hints_color = if session.hints() > 0 {
        Color::Blue
    } else {
        Color::DarkGray
    };
    let hints = Paragraph::new(format!("? Hints: {}", session.hints()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(hints_color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[2]);

    if let Some(difficulty) = session.difficulty() {
        let tier = Paragraph::new(difficulty.label())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(tier_color(difficulty))
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(tier, chunks[3]);
    }
}

fn render_tiles<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let tile_style = Style::default()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (i, letter) in app.engine.session().scrambled_word().chars().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", letter.to_uppercase()), tile_style));
    }

    let tiles = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(tiles, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = if app.input_buffer.is_empty() {
        Span::styled("Type your answer...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app.input_buffer.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" Your Answer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);
}

fn render_message<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (text, style) = match app.engine.session().message() {
        Some(message) => {
            let color = match message.kind {
                MessageKind::Success => Color::Green,
                MessageKind::Error => Color::Red,
                MessageKind::Info => Color::Blue,
            };
            (
                message.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_hint<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let text = app
        .engine
        .session()
        .active_hint_text()
        .map_or_else(|| "No hint used this round".to_string(), |t| format!("✨ {t}"));

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Hint ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_progress<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let session = app.engine.session();
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(session.progress_percent())
        .label(format!("{}/{MAX_LEVEL}", session.level()));
    f.render_widget(gauge, area);
}

fn render_banner<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    if !app.engine.session().is_complete() || area.height == 0 {
        return;
    }

    let banner = Paragraph::new("🏆 Congratulations! You've completed all levels!")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(banner, area);
}

const fn tier_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}
