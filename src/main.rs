//! Chord Family - browse the diatonic chord family of every major key
//!
//! Without a subcommand this opens the terminal chord screen; subcommands
//! print the same tables for scripting.

use anyhow::Result;
use chordfamily::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use chordfamily::cli::{ChordsArgs, CliResult, ConfigArgs, KeysArgs};
use chordfamily::config::Config;
use chordfamily::logging::{self, LogTarget};
use chordfamily::music::Key;
use chordfamily::tui;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Key to start the chord screen on [default: C]
    #[arg(short, long, value_name = "KEY")]
    key: Option<Key>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chord family and key facts for one key
    Chords(ChordsArgs),
    /// List all keys
    Keys(KeysArgs),
    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(_) if cli.key.is_some() => Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--key only applies to the chord screen, not to subcommands",
            )
            .exit(),
        Some(command) => {
            logging::init(&LogTarget::Stderr, cli.verbose)?;
            if let Err(err) = run_command(command) {
                eprintln!("{err}");
                std::process::exit(err.exit_code.code());
            }
            Ok(())
        }
        None => run_chord_screen(cli.key.unwrap_or(Key::C), cli.verbose),
    }
}

fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Chords(args) => args.execute(),
        Command::Keys(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn run_chord_screen(start: Key, verbose: bool) -> Result<()> {
    logging::init(&LogTarget::default_file()?, verbose)?;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {e:#}");
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Run `{APP_BINARY_NAME} config show` to inspect it.");
            Config::default()
        }
    };

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config, start);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
