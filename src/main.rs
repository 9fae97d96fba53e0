//! Wordbook - CLI
//!
//! Guess five-letter words with the help of probabilistic hint books, either
//! in a single classic round or across a campaign against stronger enemies.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordbook::{
    books::EvictionPolicy,
    commands::{SimulationConfig, build_catalog, run_play, run_simulation},
    game::{GameMode, SessionConfig, parse_rounds},
    output::{print_catalog, print_session_outcome, print_simulation_result},
    wordlists::{Tier, WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordbook",
    about = "Word guessing game with a bag of probabilistic hint books",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Campaign rounds; non-numeric or zero values fall back to 8
    #[arg(short, long, global = true)]
    rounds: Option<String>,

    /// Play one classic round instead of a campaign
    #[arg(long, global = true)]
    classic: bool,

    /// Word tier for classic mode
    #[arg(long, global = true, value_enum, default_value_t = Tier::Easy)]
    tier: Tier,

    /// What to do with a reward when the bookbag is full
    #[arg(long, global = true, value_enum, default_value_t = EvictionPolicy::Prompt)]
    eviction: EvictionPolicy,

    /// Seed for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Custom word list file (one word per line, used for every tier)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Starting book by slug or name (repeatable)
    #[arg(long = "book", global = true)]
    books: Vec<String>,

    /// Trigger chance modifier as <book>=<bonus>, e.g. reveal-first=0.1 (repeatable)
    #[arg(long = "modifier", global = true, value_parser = parse_modifier)]
    modifiers: Vec<(String, f64)>,

    /// Do not clear the screen between turns
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal (default)
    Play,

    /// Play many sessions automatically and report statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// List the books that can be found
    Books,
}

/// Parse `<book>=<bonus>`
fn parse_modifier(input: &str) -> Result<(String, f64), String> {
    let (book, bonus) = input
        .split_once('=')
        .ok_or_else(|| format!("expected <book>=<bonus>, got '{input}'"))?;
    let bonus: f64 = bonus
        .trim()
        .parse()
        .map_err(|_| format!("'{bonus}' is not a number"))?;
    Ok((book.trim().to_string(), bonus))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load words based on the -w flag
fn load_bank(wordlist: Option<&str>) -> Result<WordBank> {
    match wordlist {
        None => Ok(WordBank::embedded()),
        Some(path) => {
            let words = load_from_file(path)?;
            if words.is_empty() {
                bail!("no valid five-letter words in '{path}'");
            }
            log::info!("loaded {} words from {path}", words.len());
            Ok(WordBank::uniform(words))
        }
    }
}

fn session_config(cli: &Cli) -> SessionConfig {
    let mode = if cli.classic {
        GameMode::Classic { tier: cli.tier }
    } else {
        GameMode::Campaign {
            rounds: parse_rounds(cli.rounds.as_deref()),
        }
    };

    SessionConfig {
        mode,
        eviction: cli.eviction,
        starting_books: cli.books.clone(),
        modifiers: cli.modifiers.clone(),
        ..SessionConfig::default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = session_config(&cli);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let bank = load_bank(cli.wordlist.as_deref())?;
            let rng = cli
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let outcome = run_play(config, &bank, rng, io::stdin().lock(), !cli.no_clear)?;
            print_session_outcome(&outcome);
        }
        Commands::Simulate { count } => {
            let bank = load_bank(cli.wordlist.as_deref())?;
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Simulating {count} session(s) with seed {seed}...");

            let result = run_simulation(
                &bank,
                &SimulationConfig {
                    sessions: *count,
                    seed,
                    session: config,
                    show_progress: true,
                },
            );
            print_simulation_result(&result);
        }
        Commands::Books => {
            let library = build_catalog(&config.modifiers)?;
            print_catalog(&library);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_argument() {
        assert_eq!(
            parse_modifier("reveal-first=0.1"),
            Ok(("reveal-first".to_string(), 0.1))
        );
        assert_eq!(
            parse_modifier(" spot-vowel = -0.25"),
            Ok(("spot-vowel".to_string(), -0.25))
        );
        assert!(parse_modifier("reveal-first").is_err());
        assert!(parse_modifier("reveal-first=lots").is_err());
    }

    #[test]
    fn cli_defaults_to_campaign() {
        let cli = Cli::parse_from(["wordbook"]);
        let config = session_config(&cli);
        assert_eq!(config.rounds(), 8);
        assert_eq!(config.eviction, EvictionPolicy::Prompt);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_classic_and_options() {
        let cli = Cli::parse_from([
            "wordbook",
            "--classic",
            "--tier",
            "hard",
            "--eviction",
            "oldest",
            "--book",
            "reveal-first",
            "--modifier",
            "reveal-first=0.2",
            "simulate",
            "-n",
            "5",
        ]);
        let config = session_config(&cli);
        assert_eq!(config.mode, GameMode::Classic { tier: Tier::Hard });
        assert_eq!(config.eviction, EvictionPolicy::Oldest);
        assert_eq!(config.starting_books, vec!["reveal-first".to_string()]);
        assert_eq!(config.modifiers, vec![("reveal-first".to_string(), 0.2)]);
        assert!(matches!(cli.command, Some(Commands::Simulate { count: 5 })));
    }

    #[test]
    fn cli_bad_round_count_falls_back() {
        let cli = Cli::parse_from(["wordbook", "--rounds", "many"]);
        assert_eq!(session_config(&cli).rounds(), 8);
        let cli = Cli::parse_from(["wordbook", "--rounds", "3"]);
        assert_eq!(session_config(&cli).rounds(), 3);
    }
}
