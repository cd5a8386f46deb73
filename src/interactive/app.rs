//! TUI application state and logic

use crate::core::Difficulty;
use crate::game::{Fired, GameEngine, GuessOutcome};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// How long the loading screen stays up
pub const LOADING_DELAY: Duration = Duration::from_millis(2500);

/// How often the event loop wakes up to advance timers
const FRAME: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    DifficultySelect,
    Playing,
}

/// Application state
pub struct App<R = StdRng> {
    pub engine: GameEngine<R>,
    pub screen: Screen,
    pub input_buffer: String,
    /// Highlighted entry on the difficulty menu
    pub selected: usize,
    pub loading_remaining: Duration,
    /// Tier to start with once loading is done, skipping the menu
    pub preset: Option<Difficulty>,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>, preset: Option<Difficulty>) -> Self {
        Self {
            engine,
            screen: Screen::Loading,
            input_buffer: String::new(),
            selected: 0,
            loading_remaining: LOADING_DELAY,
            preset,
            should_quit: false,
        }
    }

    /// Fraction of the loading delay already elapsed, in percent
    #[must_use]
    pub fn loading_percent(&self) -> u16 {
        let done = LOADING_DELAY.saturating_sub(self.loading_remaining);
        (done.as_millis() * 100 / LOADING_DELAY.as_millis()) as u16
    }

    /// Advance the loading screen and the engine's timers
    pub fn tick(&mut self, elapsed: Duration) {
        if self.screen == Screen::Loading {
            self.loading_remaining = self.loading_remaining.saturating_sub(elapsed);
            if self.loading_remaining.is_zero() {
                match self.preset {
                    Some(difficulty) => self.start(difficulty),
                    None => self.screen = Screen::DifficultySelect,
                }
            }
            return;
        }

        if self.engine.tick(elapsed) == Some(Fired::RoundAdvanced) {
            self.input_buffer.clear();
        }
    }

    /// Begin a session on `difficulty`
    pub fn start(&mut self, difficulty: Difficulty) {
        self.engine.select_difficulty(difficulty);
        self.input_buffer.clear();
        self.screen = Screen::Playing;
    }

    pub fn submit(&mut self) {
        let outcome = self.engine.submit_guess(&self.input_buffer);
        debug!(?outcome, "tui guess");

        if matches!(outcome, GuessOutcome::Correct { .. }) {
            self.input_buffer.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Loading => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
            Screen::DifficultySelect => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(Difficulty::ALL.len() - 1);
                }
                KeyCode::Enter => self.start(Difficulty::ALL[self.selected]),
                KeyCode::Char(c) => {
                    if let Ok(difficulty) = c.to_string().parse() {
                        self.start(difficulty);
                    }
                }
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => {
                    self.input_buffer.clear();
                    self.screen = Screen::DifficultySelect;
                }
                KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Tab => {
                    self.engine.request_hint();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
