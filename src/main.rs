//! Vocabulary Quiz - CLI
//!
//! German vocabulary trainer with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vocab_quiz::{
    commands::{run_simple, summarize},
    config::{Config, LogConfig, LogTarget, WordsLocation, parse_commit, parse_exercise_kinds},
    controller::Controller,
    game::{GameConfig, WordsGame},
    logging,
    output::{print_session_summary, print_vocabulary_summary},
};

#[derive(Parser)]
#[command(
    name = "vocab_quiz",
    about = "German vocabulary quiz with adaptive word selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: 'embedded' (default, built-in table) or path to a TSV file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Exercise kinds: 'all' or a comma list of select-de, translate-ru-de, select-ru,
    /// guess-noun-article, verb-form
    #[arg(short, long, global = true, default_value = "all")]
    exercises: String,

    /// What Enter in the answer field does: 'submit' (default) or 'start' (abandon and restart)
    #[arg(long, global = true, default_value = "submit")]
    commit: String,

    /// Seed for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write diagnostics to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Diagnostic level or filter directive (RUST_LOG wins when set)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based quiz without TUI)
    Simple,

    /// Summarise the words a source provides
    Vocabulary,
}

impl Cli {
    fn config(&self, command: Commands) -> Result<Config> {
        // The TUI owns the terminal, so logs only go somewhere when asked for
        let target = match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Play) => LogTarget::Discard,
            (None, _) => LogTarget::Stderr,
        };

        Ok(Config {
            words: WordsLocation::from_arg(&self.words),
            game: GameConfig {
                kinds: parse_exercise_kinds(&self.exercises)?,
                seed: self.seed,
            },
            commit: parse_commit(&self.commit)?,
            log: LogConfig {
                level: self.log_level.clone(),
                target,
            },
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let config = cli.config(command)?;
    logging::init(&config.log)?;

    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Vocabulary => run_vocabulary_command(&config),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use vocab_quiz::interactive::{App, run_tui};

    let controller = Controller::new(WordsGame::create(&config.game), config.commit);
    let app = App::new(controller, config.words.source());
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut controller = Controller::new(WordsGame::create(&config.game), config.commit);
    let answered = run_simple(&mut controller, &config.words.source())?;
    print_session_summary(answered, controller.session().results());
    Ok(())
}

fn run_vocabulary_command(config: &Config) -> Result<()> {
    let source = config.words.source();
    let summary = summarize(source.as_ref())?;
    print_vocabulary_summary(&summary);
    Ok(())
}
