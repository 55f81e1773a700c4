//! Wordle Season - CLI
//!
//! Wordle game with TUI and CLI modes. The score and secret word of the last
//! finished game are kept as the "previous season".

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_season::{
    commands::{run_simple, show_season},
    config::{DEFAULT_CHANCES, DEFAULT_SEASON_FILE, GameConfig, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_season",
    about = "Wordle game that remembers the previous season's word and score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_CHANCES)]
    chances: u32,

    /// Play with this secret word instead of a random one
    #[arg(long, global = true, conflicts_with = "wordlist")]
    word: Option<String>,

    /// Path to a word list file (one word per line) to draw secrets from
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File holding the previous season
    #[arg(long, global = true, default_value = DEFAULT_SEASON_FILE)]
    season_file: PathBuf,

    /// Keep the season in memory only
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the previous season
    Season {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let words = match (&self.word, &self.wordlist) {
            (Some(word), _) => WordSource::Fixed(word.clone()),
            (None, Some(path)) => WordSource::File(path.clone()),
            (None, None) => WordSource::Embedded,
        };

        GameConfig {
            chances: self.chances,
            words,
            season_file: (!self.no_save).then(|| self.season_file.clone()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config();
    config.validate()?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Season { json } => {
            let storage = config.open_storage()?;
            show_season(&storage, json, &mut std::io::stdout())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_season::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
