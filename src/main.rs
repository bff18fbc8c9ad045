//! Strictly Hangman - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use strictly_hangman::{
    BANNER, Console, ConsoleRenderer, DatamuseClient, DefinitionLookup, DictionaryClient,
    FrequencyGuesser, GameController, Guesser, HangmanConfig, WordPool, WordSource, choose_topic,
    numbered_players, resolve_count,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Quiet unless RUST_LOG asks for more; the board owns the terminal
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HangmanConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_match(config, args).await,
        Command::Words { topic } => list_words(&config, &topic).await,
        Command::Define { word } => define(&config, &word).await,
    }
}

/// Sets up and plays one match.
#[instrument(skip(config))]
async fn run_match(config: HangmanConfig, args: PlayArgs) -> Result<()> {
    let config = apply_overrides(config, &args);
    println!("{}", BANNER);

    let mut console = Console::new();
    let rounds = resolve_count(&mut console, args.rounds, "How many rounds? ", "Rounds").await?;
    let players = resolve_count(&mut console, args.players, "How many players? ", "Players").await?;

    let source = DatamuseClient::from_config(&config)?;
    let (topic, words) = choose_topic(&mut console, &source, args.topic.clone()).await?;
    let pool = WordPool::new(words);
    info!(topic, rounds, players, words = pool.len(), "Match configured");

    let guesser: Box<dyn Guesser> = if args.autoplay {
        Box::new(FrequencyGuesser::new("autoplay"))
    } else {
        Box::new(console)
    };

    let mut controller = GameController::new(
        numbered_players(players),
        pool,
        rounds,
        guesser,
        Box::new(DictionaryClient::from_config(&config)?),
        Box::new(ConsoleRenderer::stdout(*config.clear_screen())),
    )?
    .with_pause_between_turns(*config.pause_between_turns() && !args.autoplay);

    if let Some(seed) = config.seed() {
        controller = controller.with_seed(*seed);
    }

    let summary = controller.run().await?;
    info!(total_score = summary.total_score(), "Match complete");
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: HangmanConfig, args: &PlayArgs) -> HangmanConfig {
    let mut config = config;
    if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }
    // Autoplay never waits, so clearing would wipe each definition unread
    if args.no_clear || args.autoplay {
        config = config.with_clear_screen(false);
    }
    config
}

/// Prints the words a topic yields.
#[instrument(skip(config))]
async fn list_words(config: &HangmanConfig, topic: &str) -> Result<()> {
    let source = DatamuseClient::from_config(config)?;
    let words = source.get_words(topic).await?;
    if words.is_empty() {
        println!("No word list matching category: {}", topic);
    }
    for word in words {
        println!("{}", word);
    }
    Ok(())
}

/// Prints a word's definition.
#[instrument(skip(config))]
async fn define(config: &HangmanConfig, word: &str) -> Result<()> {
    let dictionary = DictionaryClient::from_config(config)?;
    let definition = dictionary.meaning(word).await?;
    println!("{}", definition);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_keeps_previous_boards_on_screen() {
        let args = PlayArgs {
            autoplay: true,
            ..PlayArgs::default()
        };
        let config = apply_overrides(HangmanConfig::default(), &args);
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_flags_override_config() {
        let args = PlayArgs {
            seed: Some(5),
            ..PlayArgs::default()
        };
        let config = apply_overrides(HangmanConfig::default(), &args);
        assert_eq!(config.seed(), &Some(5));
        assert!(*config.clear_screen());

        let args = PlayArgs {
            no_clear: true,
            ..PlayArgs::default()
        };
        assert!(!*apply_overrides(HangmanConfig::default(), &args).clear_screen());
    }
}
