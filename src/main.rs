//! Wordle - CLI
//!
//! Word-guessing game with a TUI, a line-based mode, and saved sessions per profile.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordle_session::{
    commands::{run_simple, score_words},
    output::{print_score_result, print_statistics},
    session::GameSession,
    store::{FileStore, NAME_LENGTH, ProfileDir, SessionStore, StoreError},
    wordlists::{Dictionary, loader::load_from_file},
};

const DEFAULT_PROFILE: &str = "default";

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries, with saved games and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding profile files
    #[arg(short, long, global = true, default_value = ".wordle")]
    data_dir: PathBuf,

    /// Profile whose statistics and saved game are used [default: current profile, else 'default']
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show the profile's statistics
    Stats,

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Turn saving of unfinished games on or off
    Autosave {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// List, add, delete or select profiles
    Profiles {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List profiles, marking the current one (default)
    List,

    /// Create an empty profile
    Add { name: String },

    /// Delete a profile with its statistics and saved game
    Delete { name: String },

    /// Make a profile the default for later runs
    Use { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let words = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::from_words(
            load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
        ),
    };

    if words.is_empty() {
        anyhow::bail!("word list '{wordlist}' contains no valid words");
    }
    log::info!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

/// The -p profile, else the remembered current one, else `default`
fn resolve_profile(cli: &Cli) -> Result<String> {
    ProfileDir::new(&cli.data_dir)
        .resolve(cli.profile.as_deref(), DEFAULT_PROFILE)
        .context("failed to read the current profile")
}

fn open_store(cli: &Cli, profile: &str) -> Result<FileStore> {
    FileStore::open(&cli.data_dir, profile)
        .with_context(|| format!("failed to open profile '{profile}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Stats) => {
            let profile = resolve_profile(&cli)?;
            let store = open_store(&cli, &profile)?;
            print_statistics(&profile, &store.statistics());
            Ok(())
        }
        Some(Commands::Score { secret, guess }) => {
            let result = score_words(secret, guess)?;
            print_score_result(&result);
            Ok(())
        }
        Some(Commands::Autosave { state }) => {
            let enabled = matches!(state, Toggle::On);
            let profile = resolve_profile(&cli)?;
            let mut store = open_store(&cli, &profile)?;
            store.set_autosave(enabled)?;
            println!(
                "Autosave {} for profile '{profile}'",
                if enabled { "enabled" } else { "disabled" },
            );
            Ok(())
        }
        Some(Commands::Profiles { action }) => run_profiles_command(&cli, action.as_ref()),
    }
}

fn run_profiles_command(cli: &Cli, action: Option<&ProfileAction>) -> Result<()> {
    let profiles = ProfileDir::new(&cli.data_dir);

    match action {
        None | Some(ProfileAction::List) => {
            let names = profiles.list()?;
            if names.is_empty() {
                println!("No profiles in {}", profiles.dir().display());
                return Ok(());
            }
            let current = profiles.current()?;
            for name in names {
                let marker = if current.as_deref() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {name}");
            }
        }
        Some(ProfileAction::Add { name }) => match profiles.add(name) {
            Ok(true) => println!("Added profile '{name}'"),
            Ok(false) => println!("Profile '{name}' already exists"),
            Err(e @ StoreError::InvalidProfile(_)) => {
                return Err(e).with_context(|| {
                    format!(
                        "profile names are {}-{} letters, digits, '-' or '_'",
                        NAME_LENGTH.start(),
                        NAME_LENGTH.end()
                    )
                });
            }
            Err(e) => return Err(e.into()),
        },
        Some(ProfileAction::Delete { name }) => {
            if profiles.delete(name)? {
                println!("Deleted profile '{name}'");
            } else {
                println!("No profile named '{name}'");
            }
        }
        Some(ProfileAction::Use { name }) => {
            profiles.set_current(name)?;
            println!("Now playing as '{name}'");
        }
    }
    Ok(())
}

fn start_session(cli: &Cli, profile: &str) -> Result<GameSession<FileStore>> {
    let words = load_dictionary(&cli.wordlist)?;
    let store = open_store(cli, profile)?;
    GameSession::start(store, words).context("failed to start a game")
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let profile = resolve_profile(cli)?;
    let mut session = start_session(cli, &profile)?;
    run_simple(&mut session, &profile)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_session::interactive::{App, run_tui};

    let profile = resolve_profile(cli)?;
    let session = start_session(cli, &profile)?;
    let app = App::new(session, profile);
    run_tui(app)
}
