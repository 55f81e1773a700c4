//! TUI application state and logic

use crate::config::{GameConfig, SeasonStore};
use crate::core::{GameStats, Outcome, Word};
use crate::session::{Rejection, Renderer, Session, Submission};
use crate::storage::SeasonLog;
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

/// Running totals across the games of one TUI session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_score: u32,
}

/// What the screen currently shows; filled in through [`Renderer`]
#[derive(Debug, Default, Clone)]
pub struct TuiView {
    pub previous_season: SeasonLog,
    pub stats: Option<GameStats>,
    pub result: Option<String>,
    pub correct_word: Option<String>,
    pub score: Option<u32>,
    pub messages: Vec<Message>,
    pub input_buffer: String,
}

impl TuiView {
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

impl Renderer for TuiView {
    fn render_previous_season(&mut self, season: &SeasonLog) -> io::Result<()> {
        self.previous_season = season.clone();
        self.result = None;
        self.correct_word = None;
        self.score = None;
        Ok(())
    }

    fn render_game_state(&mut self, stats: &GameStats) -> io::Result<()> {
        self.stats = Some(stats.clone());
        Ok(())
    }

    fn display_win_message(&mut self) -> io::Result<()> {
        self.result = Some("You Won !!!".to_string());
        self.add_message("🎉 You guessed it!", MessageStyle::Success);
        Ok(())
    }

    fn display_lost_message(&mut self) -> io::Result<()> {
        self.result = Some("You Lost !!!".to_string());
        self.add_message("Out of chances.", MessageStyle::Error);
        Ok(())
    }

    fn render_correct_word(&mut self, word: &str) -> io::Result<()> {
        self.correct_word = Some(word.to_string());
        Ok(())
    }

    fn render_score(&mut self, stats: &GameStats) -> io::Result<()> {
        self.score = Some(stats.score);
        Ok(())
    }

    fn reset_guess_input(&mut self) -> io::Result<()> {
        self.input_buffer.clear();
        Ok(())
    }

    fn display_rejection(&mut self, rejection: &Rejection) -> io::Result<()> {
        let text = match rejection {
            Rejection::WrongLength { expected, .. } => {
                format!("Guess must be exactly {expected} letters!")
            }
            Rejection::GameOver => "Game is over. Press 'n' for a new game.".to_string(),
            Rejection::NotAWord(e) => e.to_string(),
        };
        self.add_message(&text, MessageStyle::Error);
        Ok(())
    }
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub words: Vec<Word>,
    pub session: Session<TuiView, SeasonStore>,
    pub input_mode: InputMode,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    /// Load words and the season file and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the word list or season file cannot be loaded.
    pub fn new(config: GameConfig) -> Result<Self> {
        let words = config.load_words()?;
        let storage = config.open_storage()?;
        let game = config.new_game(&words)?;

        let mut session = Session::new(game, TuiView::default(), storage);
        session.start()?;

        let mut app = Self {
            config,
            words,
            session,
            input_mode: InputMode::Guessing,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.announce_new_game();
        Ok(app)
    }

    #[must_use]
    pub const fn view(&self) -> &TuiView {
        self.session.renderer()
    }

    fn view_mut(&mut self) -> &mut TuiView {
        self.session.renderer_mut()
    }

    fn announce_new_game(&mut self) {
        let length = self.session.game().secret_word_length();
        self.view_mut().add_message(
            &format!("New game! Guess the {length}-letter word."),
            MessageStyle::Info,
        );
    }

    pub fn push_char(&mut self, c: char) {
        let limit = self.session.game().secret_word_length();
        let view = self.view_mut();
        if c.is_alphabetic() && view.input_buffer.chars().count() < limit {
            view.input_buffer.extend(c.to_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.view_mut().input_buffer.pop();
    }

    /// Submit the typed guess
    ///
    /// # Errors
    ///
    /// Returns an error if the season cannot be saved.
    pub fn submit_guess(&mut self) -> Result<()> {
        let guess = self.view().input_buffer.clone();

        match self.session.submit(&guess)? {
            Submission::Finished(outcome) => {
                self.stats.total_games += 1;
                if outcome == Outcome::Won {
                    self.stats.games_won += 1;
                }
                self.stats.total_score += self.session.game().stats().score;
                self.input_mode = InputMode::GameOver;
                self.view_mut()
                    .add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Submission::Continue => {
                let remaining = self.session.game().remaining_chances();
                self.view_mut()
                    .add_message(&format!("{remaining} chances left"), MessageStyle::Info);
            }
            Submission::Rejected(_) => {}
        }
        Ok(())
    }

    /// Start a fresh game; the finished one is already recorded
    ///
    /// # Errors
    ///
    /// Returns an error if no game can be created.
    pub fn new_game(&mut self) -> Result<()> {
        let game = self.config.new_game(&self.words)?;
        self.session.new_game(game)?;
        self.view_mut().input_buffer.clear();
        self.view_mut().messages.clear();
        self.input_mode = InputMode::Guessing;
        self.announce_new_game();
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if submitting or starting a game fails.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game()?,
                _ => {
                    // Game is finished, ignore other keys
                }
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => self.submit_guess()?,
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
